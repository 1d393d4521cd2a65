//! User DTOs - Data Transfer Objects per utenti

use crate::dtos::PhotoDTO;
use crate::entities::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// struct per gestire io col client, la password non esce mai
#[derive(Serialize, Deserialize, Debug)]
pub struct UserDTO {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDTO {
    fn from(value: User) -> Self {
        Self {
            id: value.user_id,
            username: value.username,
            email: value.email,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// DTO per creare un nuovo utente (senza user_id)
///
/// The service replaces `password` with its hash before handing the DTO to
/// the repository.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateUserDTO {
    #[validate(length(min = 1, max = 255, message = "username is required"))]
    pub username: String,

    #[validate(email(message = "email is invalid"))]
    pub email: String,

    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

impl CreateUserDTO {
    /// Trims username and email; the password is taken verbatim.
    pub fn trimmed(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
        }
    }
}

/// DTO per aggiornare un utente: tutti i campi sono richiesti
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdateUserDTO {
    #[validate(length(min = 1, max = 255, message = "username is required"))]
    pub username: String,

    #[validate(email(message = "email is invalid"))]
    pub email: String,

    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

impl UpdateUserDTO {
    pub fn trimmed(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
        }
    }
}

/// DTO per il login (solo email e password)
#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct LoginDTO {
    #[validate(email(message = "email is invalid"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Risposta al login: dati utente, token e foto (se presente)
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponseDTO {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub token: String,
    pub photo: Option<PhotoDTO>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_user_validation() {
        let valid = CreateUserDTO {
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            password: "password123".to_string(),
        };
        assert!(valid.validate().is_ok());

        let short_password = CreateUserDTO {
            password: "short".to_string(),
            ..valid.clone()
        };
        assert!(short_password.validate().is_err());

        let bad_email = CreateUserDTO {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let no_username = CreateUserDTO {
            username: String::new(),
            ..valid
        };
        assert!(no_username.validate().is_err());
    }

    #[test]
    fn trimmed_keeps_password_verbatim() {
        let dto = CreateUserDTO {
            username: "  alice ".to_string(),
            email: " a@x.com ".to_string(),
            password: " pass word ".to_string(),
        }
        .trimmed();
        assert_eq!(dto.username, "alice");
        assert_eq!(dto.email, "a@x.com");
        assert_eq!(dto.password, " pass word ");
    }

    #[test]
    fn user_dto_never_serializes_password() {
        let user = User {
            user_id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            password: "$2b$04$hash".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&UserDTO::from(user.clone())).unwrap();
        assert!(!json.contains("$2b$04$hash"));
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("$2b$04$hash"));
    }
}
