//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Autenticazione: token, password, access gate
//! - Clock
//! - Configurazione
//! - Gestione errori
//! - Stato applicazione

pub mod auth;
pub mod clock;
pub mod config;
pub mod error;
pub mod state;

// Re-exports per facilitare l'import
pub use auth::{AuthError, Claims, CredentialHasher, TokenService, authentication_middleware};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use error::AppError;
pub use state::AppState;
