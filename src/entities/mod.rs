//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene le entità che rappresentano i dati persistiti
//! dallo store esterno.

pub mod photo;
pub mod user;

// Re-exports per facilitare l'import
pub use photo::Photo;
pub use user::User;
