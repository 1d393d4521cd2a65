//! Application State - Stato globale dell'applicazione
//!
//! Contiene i repository e i componenti di autenticazione condivisi
//! tra tutte le route e i middleware.

use crate::core::Config;
use crate::core::auth::{CredentialHasher, TokenService};
use crate::repositories::{PhotoRepository, UserRepository};

/// Stato globale dell'applicazione condiviso tra tutte le route e middleware
pub struct AppState {
    /// Repository per la gestione degli utenti
    pub users: UserRepository,

    /// Repository per la gestione delle foto
    pub photos: PhotoRepository,

    /// Emissione e verifica dei token, con la secret del processo
    pub tokens: TokenService,

    /// Hashing delle password
    pub hasher: CredentialHasher,
}

impl AppState {
    /// Builds the state from the loaded configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_components(
            TokenService::new(&config.api_secret),
            CredentialHasher::new(config.bcrypt_cost),
        )
    }

    /// Builds the state around already constructed auth components, with
    /// empty repositories.
    pub fn with_components(tokens: TokenService, hasher: CredentialHasher) -> Self {
        Self {
            users: UserRepository::new(),
            photos: PhotoRepository::new(),
            tokens,
            hasher,
        }
    }
}
