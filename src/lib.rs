//! Photo API library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, auth, config};
pub use services::root;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/users", configure_user_routes(state.clone()))
        .nest("/photos", configure_photo_routes(state.clone()))
        .with_state(state)
}

/// Configura le routes degli utenti: login e register sono pubbliche,
/// update e delete passano dall'access gate
fn configure_user_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    Router::new()
        .route("/login", post(login_user))
        .route("/register", post(register_user))
        .route(
            "/{user_id}",
            put(update_user)
                .delete(delete_user)
                .layer(middleware::from_fn_with_state(
                    state,
                    authentication_middleware,
                )),
        )
}

/// Configura le routes delle foto: la lista è pubblica, il resto no
fn configure_photo_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    Router::new()
        .route(
            "/",
            // the layer only wraps methods registered before it
            post(create_photo)
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    authentication_middleware,
                ))
                .get(list_photos),
        )
        .route(
            "/{photo_id}",
            put(update_photo)
                .delete(delete_photo)
                .layer(middleware::from_fn_with_state(
                    state,
                    authentication_middleware,
                )),
        )
}
