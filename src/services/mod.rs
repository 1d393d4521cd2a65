//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Ogni modulo gestisce gli endpoint HTTP per una specifica funzionalità.

pub mod auth;
pub mod photo;
pub mod user;

// Re-exports per facilitare l'import
pub use auth::{login_user, register_user};
pub use photo::{create_photo, delete_photo, list_photos, update_photo};
pub use user::{delete_user, update_user};

use crate::core::{AppError, AppState, Claims};
use crate::entities::User;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;
use tracing::warn;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}

/// Resolves the verified token's email to the stored user.
///
/// A token whose account no longer exists is rejected here; the token
/// itself stays cryptographically valid until it expires.
pub(crate) async fn resolve_principal(state: &AppState, claims: &Claims) -> Result<User, AppError> {
    state.users.find_by_email(&claims.email).await?.ok_or_else(|| {
        warn!("No user for token email {}", claims.email);
        AppError::unauthorized("You are not an authorized user")
    })
}
