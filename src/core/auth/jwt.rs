//! JWT - emissione e verifica dei token

use super::AuthError;
use crate::core::clock::{Clock, SystemClock};
use crate::entities::User;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Fixed validity window of every issued token: one hour.
pub const TOKEN_VALIDITY_SECS: i64 = 60 * 60;

// contenuto firmato nel token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub email: String,
    pub iat: i64, // issued at, seconds since epoch
    pub exp: i64, // always iat + TOKEN_VALIDITY_SECS
}

/// Issues and verifies HS256 tokens with a process-wide secret.
///
/// Holds no per-token state: verification depends only on the token bytes,
/// the secret and the clock. Cheap to clone and safe to share across tasks.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService").finish_non_exhaustive()
    }
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self::with_clock(secret, Arc::new(SystemClock))
    }

    pub fn with_clock(secret: &str, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // expiry is checked explicitly against our own clock in `verify`
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            clock,
        }
    }

    /// Mints a token for `principal`, valid for [`TOKEN_VALIDITY_SECS`].
    #[instrument(skip(self, principal), fields(email = %principal.email))]
    pub fn issue(&self, principal: &User) -> Result<String, AuthError> {
        debug!("Issuing token");
        let iat = self.clock.now();
        let claims = Claims {
            username: principal.username.clone(),
            email: principal.email.clone(),
            iat,
            exp: iat + TOKEN_VALIDITY_SECS,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map(|token| {
                info!("Token issued, expires at {}", claims.exp);
                token
            })
            .map_err(|e| {
                error!("Failed to sign token: {:?}", e);
                AuthError::SigningFailure
            })
    }

    /// Checks signature, claim shape and expiry, in that order.
    #[instrument(skip(self, token))]
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    warn!("Token rejected by signing library as expired");
                    AuthError::Expired
                }
                kind => {
                    warn!("Token rejected: {:?}", kind);
                    AuthError::InvalidToken
                }
            })?
            .claims;

        let now = self.clock.now();
        if now >= claims.exp {
            warn!("Token expired at {}, now {}", claims.exp, now);
            return Err(AuthError::Expired);
        }

        debug!("Token valid for {}", claims.email);
        Ok(claims)
    }

    /// Same checks as [`verify`](Self::verify), returning only the email.
    pub fn extract_principal_email(&self, token: &str) -> Result<String, AuthError> {
        self.verify(token).map(|claims| claims.email)
    }
}
