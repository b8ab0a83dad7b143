//! Registration, login and logout.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use tower_sessions::Session;

use super::pages::render_profile;
use super::{profile_path, AppState};
use crate::auth::{self, FlashLevel};
use crate::error::AppError;
use crate::forms::{FormErrors, LoginForm, RegisterForm};
use crate::views::{FormView, Page};

const BAD_CREDENTIALS: &str = "Invalid username or password.";

pub async fn login_form(session: Session) -> Result<Response, AppError> {
    let flashes = auth::take_flashes(&session).await?;
    Ok(Page::new("login", flashes, FormView::blank(LoginForm::default())).into_response())
}

async fn login_again(
    session: &Session,
    form: LoginForm,
    errors: FormErrors,
) -> Result<Response, AppError> {
    let flashes = auth::take_flashes(session).await?;
    Ok(Page::new("login", flashes, FormView { form, errors }).into_response())
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form?;
    if let Err(errors) = form.validate() {
        return login_again(&session, form, errors).await;
    }

    let user = state.store.find_user(&form.username).await?;
    let verified = match &user {
        Some(user) => {
            auth::verify_password_blocking(form.password.clone(), user.password_hash.clone())
                .await?
        }
        None => false,
    };

    let Some(user) = user.filter(|_| verified) else {
        tracing::info!(username = %form.username, "login rejected");
        auth::flash(&session, FlashLevel::Danger, BAD_CREDENTIALS).await?;
        return Ok(Redirect::to("/login").into_response());
    };

    auth::login(&session, &user.username).await?;
    auth::flash(&session, FlashLevel::Primary, "Logged in successfully.").await?;
    tracing::info!(username = %user.username, "user logged in");

    Ok(Redirect::to(&profile_path(&user.username)).into_response())
}

pub async fn register_form(session: Session) -> Result<Response, AppError> {
    let flashes = auth::take_flashes(&session).await?;
    Ok(Page::new("register", flashes, FormView::blank(RegisterForm::default())).into_response())
}

/// Create the account and show the new user's profile straight away.
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<RegisterForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form?;
    if let Err(errors) = form.validate() {
        let flashes = auth::take_flashes(&session).await?;
        return Ok(Page::new("register", flashes, FormView { form, errors }).into_response());
    }

    // Cheap early exit; insert_user is what actually guarantees uniqueness.
    let taken = state.store.find_user(&form.username).await?.is_some();
    let user = if taken {
        None
    } else {
        let hash = auth::hash_password_blocking(form.password.clone()).await?;
        state.store.insert_user(&form.username, &hash).await?
    };

    let Some(user) = user else {
        tracing::info!(username = %form.username, "duplicate registration refused");
        auth::flash(
            &session,
            FlashLevel::Danger,
            "Duplicate username detected. Please try again.",
        )
        .await?;
        return Ok(Redirect::to("/register").into_response());
    };

    auth::login(&session, &user.username).await?;
    tracing::info!(username = %user.username, "user registered");

    render_profile(&state, &session, user.username).await
}

pub async fn logout(session: Session) -> Result<Response, AppError> {
    let username = auth::current_user(&session).await?;
    auth::logout(&session).await?;
    auth::flash(&session, FlashLevel::Info, "You have been logged out.").await?;
    if let Some(username) = username {
        tracing::info!(%username, "user logged out");
    }
    Ok(Redirect::to("/").into_response())
}
