//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! The store is an external collaborator of the auth core; these
//! repositories keep it in process memory behind the same CRUD traits a
//! database-backed implementation would expose.

pub mod photo;
pub mod traits;
pub mod user;

use thiserror::Error;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Read, Update};

pub use photo::PhotoRepository;
pub use user::UserRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("resource not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(&'static str),
}
