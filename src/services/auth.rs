//! Auth services - Gestione autenticazione e registrazione utenti

use crate::core::{AppError, AppState};
use crate::dtos::{CreateUserDTO, LoginDTO, LoginResponseDTO, PhotoDTO, UserDTO};
use crate::repositories::Create;
use axum::{
    extract::{Json, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn login_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginDTO>,
) -> Result<impl IntoResponse, AppError> {
    // 1. Validare email e password (fail-fast prima di toccare lo store)
    // 2. Cercare l'utente tramite email, UNAUTHORIZED se non esiste
    // 3. Verificare la password contro l'hash memorizzato (blocking pool)
    // 4. Emettere il token e ritornarlo nel body e nell'header Authorization
    let body = LoginDTO {
        email: body.email.trim().to_string(),
        password: body.password,
    };
    body.validate()?;

    let user = match state.users.find_by_email(&body.email).await? {
        Some(user) => user,
        None => {
            warn!("Login attempt for unknown email");
            return Err(AppError::unauthorized("Email or password is incorrect"));
        }
    };

    let hasher = state.hasher;
    let stored_hash = user.password.clone();
    let password = body.password;
    tokio::task::spawn_blocking(move || hasher.verify(&stored_hash, &password))
        .await?
        .map_err(|e| {
            warn!("Password verification failed");
            AppError::from(e)
        })?;

    let token = state.tokens.issue(&user)?;
    let photo = state
        .photos
        .find_by_user_id(&user.user_id)
        .await?
        .map(PhotoDTO::from);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| AppError::internal_server_error("Invalid token encoding"))?,
    );

    info!("User logged in");
    Ok((
        StatusCode::OK,
        headers,
        Json(LoginResponseDTO {
            id: user.user_id,
            username: user.username,
            email: user.email,
            token,
            photo,
        }),
    ))
}

#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateUserDTO>,
) -> Result<impl IntoResponse, AppError> {
    // 1. Normalizzare e validare il DTO
    // 2. CONFLICT se l'email è già registrata
    // 3. Hash della password: se fallisce la scrittura viene rifiutata, mai salvare il plaintext
    // 4. Salvare l'utente con la password hashata e ritornare il DTO
    let body = body.trimmed();
    body.validate()?;

    if state.users.find_by_email(&body.email).await?.is_some() {
        warn!("Email already registered");
        return Err(AppError::conflict("email already exist"));
    }

    let hasher = state.hasher;
    let password = body.password.clone();
    let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password)).await??;
    debug!("Password hashed");

    let new_user = CreateUserDTO {
        password: password_hash,
        ..body
    };
    let created_user = state.users.create(&new_user).await?;

    info!("User registered: {}", created_user.user_id);
    Ok((StatusCode::CREATED, Json(UserDTO::from(created_user))))
}
