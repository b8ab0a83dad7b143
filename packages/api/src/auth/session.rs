//! Session state: who is logged in, and the one-shot flash messages.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Router;
use serde::{Deserialize, Serialize};
use tower_sessions::cookie::{Key, SameSite};
use tower_sessions::session::Error;
use tower_sessions::{Expiry, Session, SessionManagerLayer, SessionStore};

use crate::error::AppError;
use crate::settings;

/// Key for storing the username in session.
pub const SESSION_USERNAME_KEY: &str = "username";
/// Key for the logged-in flag.
pub const SESSION_LOGGED_IN_KEY: &str = "logged-in";
const SESSION_FLASHES_KEY: &str = "_flashes";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Primary,
    Danger,
    Info,
}

/// A message shown once, on the next rendered page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

/// Mark the session as logged in as `username`.
///
/// The session id is rotated first so a pre-login cookie cannot be reused.
pub async fn login(session: &Session, username: &str) -> Result<(), Error> {
    session.cycle_id().await?;
    session.insert(SESSION_USERNAME_KEY, username).await?;
    session.insert(SESSION_LOGGED_IN_KEY, true).await?;
    Ok(())
}

/// Drop all session state, in the store and in the cookie.
pub async fn logout(session: &Session) -> Result<(), Error> {
    session.flush().await
}

/// The logged-in username, if any.
pub async fn current_user(session: &Session) -> Result<Option<String>, Error> {
    let logged_in: Option<bool> = session.get(SESSION_LOGGED_IN_KEY).await?;
    if logged_in != Some(true) {
        return Ok(None);
    }
    session.get(SESSION_USERNAME_KEY).await
}

pub async fn flash(session: &Session, level: FlashLevel, message: &str) -> Result<(), Error> {
    let mut flashes: Vec<Flash> = session
        .get(SESSION_FLASHES_KEY)
        .await?
        .unwrap_or_default();
    flashes.push(Flash {
        level,
        message: message.to_string(),
    });
    session.insert(SESSION_FLASHES_KEY, flashes).await
}

/// Remove and return the pending flash messages.
pub async fn take_flashes(session: &Session) -> Result<Vec<Flash>, Error> {
    Ok(session
        .remove::<Vec<Flash>>(SESSION_FLASHES_KEY)
        .await?
        .unwrap_or_default())
}

/// Extractor for handlers that need a logged-in user.
///
/// Anonymous requests are redirected to `/login` with a flash instead of reaching
/// the handler.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub String);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        match current_user(&session).await {
            Ok(Some(username)) => Ok(CurrentUser(username)),
            Ok(None) => {
                tracing::debug!(path = %parts.uri.path(), "anonymous request redirected to login");
                flash(
                    &session,
                    FlashLevel::Danger,
                    "Please log in to access this page.",
                )
                .await
                .map_err(|e| AppError::from(e).into_response())?;
                Err(Redirect::to("/login").into_response())
            }
            Err(e) => Err(AppError::from(e).into_response()),
        }
    }
}

/// Build the cookie signing key from the configured secret.
///
/// Without a secret a random key is generated, so sessions do not survive a restart.
pub fn signing_key(secret: Option<&str>) -> Result<Key, String> {
    match secret {
        Some(secret) => Key::try_from(secret.as_bytes())
            .map_err(|e| format!("session.secret is unusable ({e}); it needs at least 64 bytes")),
        None => {
            tracing::warn!("session.secret not set, generating a random signing key");
            Ok(Key::generate())
        }
    }
}

/// Add the session layer in front of every route.
pub fn with_sessions<Store>(
    router: Router,
    store: Store,
    settings: &settings::Session,
    key: Key,
) -> Router
where
    Store: SessionStore + Clone,
{
    let layer = SessionManagerLayer::new(store)
        .with_secure(settings.secure)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(settings.days)))
        .with_signed(key);

    router.layer(layer)
}
