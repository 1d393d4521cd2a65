//! Access gate - estrazione e verifica del bearer token

use super::{AuthError, Claims, TokenService};
use crate::core::{AppError, AppState};
use axum::extract::State;
use axum::{body::Body, extract::Request, http, http::Response, middleware::Next};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

pub const BEARER_PREFIX: &str = "Bearer ";

/// Pulls the raw token out of an `Authorization` carrier value.
///
/// The prefix is checked before slicing, so a malformed header is a typed
/// rejection and never an out-of-range access.
pub fn bearer_token(carrier: Option<&str>) -> Result<&str, AuthError> {
    let value = carrier.unwrap_or_default();
    if value.trim().is_empty() {
        return Err(AuthError::Unauthenticated("token not found"));
    }

    let token = value
        .trim_start()
        .strip_prefix(BEARER_PREFIX)
        .ok_or(AuthError::Unauthenticated("invalid authorization scheme"))?
        .trim();

    if token.is_empty() {
        return Err(AuthError::Unauthenticated("token not found"));
    }
    Ok(token)
}

/// Gating check: carrier value in, verified claims out.
///
/// Every token failure is folded into `Unauthenticated`, keeping only the
/// expired/invalid distinction in the reason.
pub fn authorize(tokens: &TokenService, carrier: Option<&str>) -> Result<Claims, AuthError> {
    let token = bearer_token(carrier)?;
    tokens
        .verify(token)
        .map_err(|e| AuthError::Unauthenticated(e.reason()))
}

/// Rejects the request with 401 unless it carries a valid bearer token.
/// On success the verified [`Claims`] are available as an `Extension`.
#[instrument(skip(state, req, next))]
pub async fn authentication_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running authentication middleware");
    let carrier = match req.headers().get(http::header::AUTHORIZATION) {
        Some(value) => Some(value.to_str().map_err(|_| {
            warn!("Authorization header is not valid UTF-8");
            AuthError::Unauthenticated("malformed authorization header")
        })?),
        None => None,
    };

    let claims = authorize(&state.tokens, carrier).map_err(|e| {
        warn!("Request rejected: {}", e);
        e
    })?;

    info!("Authenticated {}", claims.email);
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
