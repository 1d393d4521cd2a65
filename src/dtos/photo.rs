//! Photo DTOs - Data Transfer Objects per foto

use crate::entities::{Photo, User};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OwnerDTO {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl From<&User> for OwnerDTO {
    fn from(value: &User) -> Self {
        Self {
            id: value.user_id,
            username: value.username.clone(),
            email: value.email.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PhotoDTO {
    pub id: i32,
    pub title: String,
    pub caption: String,
    pub photo_url: String,
    pub user_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerDTO>,
}

impl From<Photo> for PhotoDTO {
    fn from(value: Photo) -> Self {
        Self {
            id: value.photo_id,
            title: value.title,
            caption: value.caption,
            photo_url: value.photo_url,
            user_id: value.user_id,
            owner: None, // da popolare con with_owner se serve
        }
    }
}

impl PhotoDTO {
    pub fn with_owner(mut self, owner: &User) -> Self {
        self.owner = Some(OwnerDTO::from(owner));
        self
    }
}

/// Body di POST /photos
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct PhotoInputDTO {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "caption is required"))]
    pub caption: String,

    #[serde(default)]
    pub photo_url: String,
}

/// DTO per creare una nuova foto (senza photo_id), owner già risolto
#[derive(Debug, Clone)]
pub struct CreatePhotoDTO {
    pub user_id: Uuid,
    pub title: String,
    pub caption: String,
    pub photo_url: String,
}

/// Body di PUT /photos/{photo_id}: tutti i campi sono richiesti
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdatePhotoDTO {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "caption is required"))]
    pub caption: String,

    #[validate(length(min = 1, message = "photo_url is required"))]
    pub photo_url: String,
}

impl PhotoInputDTO {
    pub fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            caption: self.caption.trim().to_string(),
            photo_url: self.photo_url.trim().to_string(),
        }
    }
}

impl UpdatePhotoDTO {
    pub fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            caption: self.caption.trim().to_string(),
            photo_url: self.photo_url.trim().to_string(),
        }
    }
}

impl From<PhotoInputDTO> for UpdatePhotoDTO {
    fn from(value: PhotoInputDTO) -> Self {
        Self {
            title: value.title,
            caption: value.caption,
            photo_url: value.photo_url,
        }
    }
}
