//! Photo services - Foto profilo degli utenti

use super::resolve_principal;
use crate::core::{AppError, AppState, Claims};
use crate::dtos::{CreatePhotoDTO, PhotoDTO, PhotoInputDTO, UpdatePhotoDTO};
use crate::repositories::{Create, Delete, Read, Update};
use axum::{
    Extension,
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_macros::debug_handler;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// Maximum number of photos returned by the listing.
const PHOTO_LIST_LIMIT: usize = 100;

#[debug_handler]
pub async fn list_photos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PhotoDTO>>, AppError> {
    let photos = state.photos.list(PHOTO_LIST_LIMIT).await?;
    debug!("Listing {} photos", photos.len());

    let mut result = Vec::with_capacity(photos.len());
    for photo in photos {
        let owner = state.users.read(&photo.user_id).await?;
        let dto = PhotoDTO::from(photo);
        result.push(match owner {
            Some(owner) => dto.with_owner(&owner),
            None => dto,
        });
    }
    Ok(Json(result))
}

/// Creates the principal's photo, or replaces it when one already exists.
#[instrument(skip(state, claims, body), fields(email = %claims.email))]
pub async fn create_photo(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(body): Json<PhotoInputDTO>,
) -> Result<impl IntoResponse, AppError> {
    let principal = resolve_principal(&state, &claims).await?;
    let body = body.trimmed();
    body.validate()?;

    if let Some(existing) = state.photos.find_by_user_id(&principal.user_id).await? {
        debug!("Replacing photo {}", existing.photo_id);
        let updated = state
            .photos
            .update(&existing.photo_id, &UpdatePhotoDTO::from(body))
            .await?;
        info!("Photo {} replaced", updated.photo_id);
        return Ok((
            StatusCode::OK,
            Json(PhotoDTO::from(updated).with_owner(&principal)),
        ));
    }

    let created = state
        .photos
        .create(&CreatePhotoDTO {
            user_id: principal.user_id,
            title: body.title,
            caption: body.caption,
            photo_url: body.photo_url,
        })
        .await?;

    info!("Photo {} created", created.photo_id);
    Ok((
        StatusCode::CREATED,
        Json(PhotoDTO::from(created).with_owner(&principal)),
    ))
}

#[instrument(skip(state, claims, body), fields(photo_id = %photo_id))]
pub async fn update_photo(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(photo_id): Path<i32>,
    Json(body): Json<UpdatePhotoDTO>,
) -> Result<Json<PhotoDTO>, AppError> {
    let principal = resolve_principal(&state, &claims).await?;
    let body = body.trimmed();
    body.validate()?;

    let photo = state
        .photos
        .read(&photo_id)
        .await?
        .ok_or_else(|| AppError::not_found("Photo not found"))?;

    if photo.user_id != principal.user_id {
        warn!("User {} does not own photo {}", principal.user_id, photo_id);
        return Err(AppError::forbidden("You are not the owner of this photo"));
    }

    let updated = state.photos.update(&photo_id, &body).await?;
    info!("Photo updated");
    Ok(Json(PhotoDTO::from(updated).with_owner(&principal)))
}

#[instrument(skip(state, claims), fields(photo_id = %photo_id))]
pub async fn delete_photo(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(photo_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let principal = resolve_principal(&state, &claims).await?;

    let photo = state
        .photos
        .read(&photo_id)
        .await?
        .ok_or_else(|| AppError::not_found("Photo not found"))?;

    if photo.user_id != principal.user_id {
        warn!("User {} does not own photo {}", principal.user_id, photo_id);
        return Err(AppError::forbidden("You are not the owner of this photo"));
    }

    state.photos.delete(&photo_id).await?;
    info!("Photo deleted");
    Ok(StatusCode::NO_CONTENT)
}
