//! Photo entity - Foto profilo, una per utente

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub photo_id: i32,
    pub title: String,
    pub caption: String,
    pub photo_url: String,
    pub user_id: Uuid,
}
