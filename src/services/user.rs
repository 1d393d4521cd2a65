//! User services - Gestione account utente (solo il proprietario)

use super::resolve_principal;
use crate::core::{AppError, AppState, Claims};
use crate::dtos::{UpdateUserDTO, UserDTO};
use crate::repositories::{Delete, Update};
use axum::{
    Extension,
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

#[instrument(skip(state, claims, body), fields(user_id = %user_id))]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>, // inserito dall'authentication_middleware
    Path(user_id): Path<Uuid>,
    Json(body): Json<UpdateUserDTO>,
) -> Result<Json<UserDTO>, AppError> {
    let principal = resolve_principal(&state, &claims).await?;
    if principal.user_id != user_id {
        warn!("User {} tried to update account {}", principal.user_id, user_id);
        return Err(AppError::forbidden("You can only modify your own account"));
    }

    let body = body.trimmed();
    body.validate()?;

    let hasher = state.hasher;
    let password = body.password.clone();
    let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password)).await??;

    let changes = UpdateUserDTO {
        password: password_hash,
        ..body
    };
    let updated = state.users.update(&user_id, &changes).await?;

    info!("User updated");
    Ok(Json(UserDTO::from(updated)))
}

#[instrument(skip(state, claims), fields(user_id = %user_id))]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let principal = resolve_principal(&state, &claims).await?;
    if principal.user_id != user_id {
        warn!("User {} tried to delete account {}", principal.user_id, user_id);
        return Err(AppError::forbidden("You can only delete your own account"));
    }

    let removed = state.photos.delete_by_user_id(&user_id).await?;
    state.users.delete(&user_id).await?;

    info!("User deleted together with {} photos", removed);
    Ok(StatusCode::NO_CONTENT)
}
