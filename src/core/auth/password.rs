//! Password hashing via bcrypt.

use super::AuthError;
use tracing::{error, instrument, warn};

/// bcrypt cost factor used when nothing else is configured.
pub const DEFAULT_BCRYPT_COST: u32 = 14;

/// One-way credential storage and verification.
///
/// Each `hash` call embeds a fresh random salt, so hashing the same
/// plaintext twice gives two different strings that both verify.
#[derive(Debug, Clone, Copy)]
pub struct CredentialHasher {
    cost: u32,
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl CredentialHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    #[instrument(skip(self, plaintext), fields(cost = self.cost))]
    pub fn hash(&self, plaintext: &str) -> Result<String, AuthError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| {
            error!("bcrypt hash failed: {}", e);
            AuthError::HashingFailure
        })
    }

    /// `Ok(())` when `plaintext` matches `hash`, `Mismatch` otherwise.
    ///
    /// A stored hash bcrypt cannot parse counts as a mismatch.
    #[instrument(skip_all)]
    pub fn verify(&self, hash: &str, plaintext: &str) -> Result<(), AuthError> {
        match bcrypt::verify(plaintext, hash) {
            Ok(true) => Ok(()),
            Ok(false) => Err(AuthError::Mismatch),
            Err(e) => {
                warn!("Stored hash could not be checked: {}", e);
                Err(AuthError::Mismatch)
            }
        }
    }
}
