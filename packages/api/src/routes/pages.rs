//! Read-only pages: landing page, recipe listing, profile.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tower_sessions::Session;

use super::AppState;
use crate::auth::{self, CurrentUser};
use crate::error::AppError;
use crate::views::{Home, Page, Profile, RecipeList};

pub async fn home(session: Session) -> Result<Response, AppError> {
    let username = auth::current_user(&session).await?;
    let flashes = auth::take_flashes(&session).await?;
    Ok(Page::new("home", flashes, Home { username }).into_response())
}

/// `?page=N` on the listing. Kept as text so that `?page=` or `?page=abc` fall back
/// to the first page instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
}

impl ListParams {
    pub fn page(&self) -> Option<i64> {
        self.page.as_deref().and_then(|page| page.trim().parse().ok())
    }
}

/// `offset` and `total_pages` for a 1-based page number, clamping pages below 1.
pub(crate) fn page_window(page: Option<i64>, per_page: i64, total: i64) -> (i64, i64, i64) {
    let page = page.unwrap_or(1).max(1);
    let offset = (page - 1).saturating_mul(per_page);
    let total_pages = (total + per_page - 1) / per_page;
    (page, offset, total_pages)
}

pub async fn all_recipes(
    State(state): State<AppState>,
    session: Session,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(params) = params?;
    let total = state.store.count_recipes().await?;
    let (page, offset, total_pages) = page_window(params.page(), state.per_page, total);
    let recipes = state.store.recipes(offset, state.per_page).await?;
    let flashes = auth::take_flashes(&session).await?;

    Ok(Page::new(
        "allrecipes",
        flashes,
        RecipeList {
            recipes,
            page,
            per_page: state.per_page,
            total,
            total_pages,
        },
    )
    .into_response())
}

/// The logged-in user's profile with every recipe in the store.
///
/// The path segment is only informational; the page always shows the session user.
pub async fn profile(
    CurrentUser(username): CurrentUser,
    State(state): State<AppState>,
    session: Session,
    Path(_requested): Path<String>,
) -> Result<Response, AppError> {
    render_profile(&state, &session, username).await
}

pub(crate) async fn render_profile(
    state: &AppState,
    session: &Session,
    username: String,
) -> Result<Response, AppError> {
    let recipes = state.store.all_recipes().await?;
    let flashes = auth::take_flashes(session).await?;
    Ok(Page::new("profile", flashes, Profile { username, recipes }).into_response())
}
