//! Recipe create, view, edit and delete.
//!
//! Creating needs a logged-in user. Editing and deleting additionally need the
//! session user to own the recipe, checked against the stored owner.

use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use tower_sessions::Session;
use uuid::Uuid;

use super::{profile_path, AppState};
use crate::auth::{self, CurrentUser, FlashLevel};
use crate::error::AppError;
use crate::forms::{DeleteForm, FormErrors, RecipeForm};
use crate::models::Recipe;
use crate::views::{EditRecipe, FormView, Page, RecipeDetail};

const NOT_OWNER: &str = "You can only change your own recipes.";

/// Resolve a path id to a stored recipe; malformed and unknown ids are both not found.
async fn load_recipe(state: &AppState, recipe_id: &str) -> Result<Recipe, AppError> {
    let id = Uuid::parse_str(recipe_id).map_err(|_| AppError::NotFound)?;
    state
        .store
        .find_recipe(id)
        .await?
        .ok_or(AppError::NotFound)
}

fn recipe_path(id: Uuid) -> String {
    format!("/recipe_view/{id}")
}

pub async fn add_form(
    CurrentUser(_username): CurrentUser,
    session: Session,
) -> Result<Response, AppError> {
    let flashes = auth::take_flashes(&session).await?;
    Ok(Page::new("add_recipe", flashes, FormView::blank(RecipeForm::default())).into_response())
}

pub async fn add(
    CurrentUser(username): CurrentUser,
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<RecipeForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form?;
    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(errors) => {
            let flashes = auth::take_flashes(&session).await?;
            return Ok(Page::new("add_recipe", flashes, FormView { form, errors }).into_response());
        }
    };

    let recipe = state.store.insert_recipe(&username, &fields).await?;
    tracing::info!(%username, recipe_id = %recipe.id, "recipe added");
    auth::flash(&session, FlashLevel::Primary, "Recipe added.").await?;

    Ok(Redirect::to(&profile_path(&username)).into_response())
}

pub async fn view(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<String>,
) -> Result<Response, AppError> {
    let recipe = load_recipe(&state, &recipe_id).await?;
    let flashes = auth::take_flashes(&session).await?;
    Ok(Page::new("recipe_view", flashes, RecipeDetail { recipe }).into_response())
}

async fn refuse_non_owner(
    session: &Session,
    username: &str,
    recipe: &Recipe,
) -> Result<Response, AppError> {
    tracing::warn!(%username, owner = %recipe.username, recipe_id = %recipe.id, "change by non-owner refused");
    auth::flash(session, FlashLevel::Danger, NOT_OWNER).await?;
    Ok(Redirect::to(&recipe_path(recipe.id)).into_response())
}

async fn edit_page(
    session: &Session,
    recipe_id: Uuid,
    form: RecipeForm,
    errors: FormErrors,
) -> Result<Response, AppError> {
    let flashes = auth::take_flashes(session).await?;
    Ok(Page::new(
        "edit_recipe",
        flashes,
        EditRecipe {
            recipe_id,
            form,
            errors,
        },
    )
    .into_response())
}

pub async fn edit_form(
    CurrentUser(username): CurrentUser,
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<String>,
) -> Result<Response, AppError> {
    let recipe = load_recipe(&state, &recipe_id).await?;
    if !recipe.is_owned_by(&username) {
        return refuse_non_owner(&session, &username, &recipe).await;
    }
    edit_page(
        &session,
        recipe.id,
        RecipeForm::from(recipe.fields()),
        FormErrors::default(),
    )
    .await
}

/// Overwrite every editable field of the recipe with the submission.
pub async fn edit(
    CurrentUser(username): CurrentUser,
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<String>,
    form: Result<Form<RecipeForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form?;
    let recipe = load_recipe(&state, &recipe_id).await?;
    if !recipe.is_owned_by(&username) {
        return refuse_non_owner(&session, &username, &recipe).await;
    }

    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(errors) => return edit_page(&session, recipe.id, form, errors).await,
    };

    if !state.store.update_recipe(recipe.id, &fields).await? {
        // Deleted between the lookup and the update
        return Err(AppError::NotFound);
    }
    tracing::info!(%username, recipe_id = %recipe.id, "recipe updated");
    auth::flash(&session, FlashLevel::Primary, "Recipe updated.").await?;

    Ok(Redirect::to(&recipe_path(recipe.id)).into_response())
}

/// Confirmation page for a delete.
pub async fn delete_form(
    CurrentUser(_username): CurrentUser,
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<String>,
) -> Result<Response, AppError> {
    let recipe = load_recipe(&state, &recipe_id).await?;
    let flashes = auth::take_flashes(&session).await?;
    Ok(Page::new("delete_recipe", flashes, RecipeDetail { recipe }).into_response())
}

/// Remove the recipe when the submitted username confirms the session user and that
/// user owns it.
pub async fn delete(
    CurrentUser(username): CurrentUser,
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<String>,
    form: Result<Form<DeleteForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form?;
    let recipe = load_recipe(&state, &recipe_id).await?;

    let confirmed = form.username.as_deref() == Some(username.as_str());
    if confirmed && recipe.is_owned_by(&username) {
        state.store.delete_recipe(recipe.id).await?;
        tracing::info!(%username, recipe_id = %recipe.id, "recipe removed");
        auth::flash(&session, FlashLevel::Info, "Recipe removed.").await?;
    } else {
        tracing::warn!(
            %username,
            owner = %recipe.username,
            confirmed,
            recipe_id = %recipe.id,
            "delete refused"
        );
        auth::flash(&session, FlashLevel::Danger, "Error occurred.").await?;
    }

    Ok(Redirect::to(&profile_path(&username)).into_response())
}
