//! PhotoRepository - Repository per la gestione delle foto

use super::{Create, Delete, Read, RepositoryError, Update};
use crate::dtos::{CreatePhotoDTO, UpdatePhotoDTO};
use crate::entities::Photo;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use uuid::Uuid;

pub struct PhotoRepository {
    photos: DashMap<i32, Photo>,
    next_id: AtomicI32,
}

impl Default for PhotoRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PhotoRepository {
    pub fn new() -> PhotoRepository {
        Self {
            photos: DashMap::new(),
            next_id: AtomicI32::new(1),
        }
    }

    /// Up to `limit` photos, oldest first.
    pub async fn list(&self, limit: usize) -> Result<Vec<Photo>, RepositoryError> {
        let mut photos: Vec<Photo> = self
            .photos
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        photos.sort_by_key(|photo| photo.photo_id);
        photos.truncate(limit);
        Ok(photos)
    }

    pub async fn find_by_user_id(&self, user_id: &Uuid) -> Result<Option<Photo>, RepositoryError> {
        Ok(self
            .photos
            .iter()
            .find(|entry| entry.value().user_id == *user_id)
            .map(|entry| entry.value().clone()))
    }

    /// Removes every photo owned by `user_id`, returning how many went.
    pub async fn delete_by_user_id(&self, user_id: &Uuid) -> Result<usize, RepositoryError> {
        let before = self.photos.len();
        self.photos.retain(|_, photo| photo.user_id != *user_id);
        Ok(before.saturating_sub(self.photos.len()))
    }
}

impl Create<Photo, CreatePhotoDTO> for PhotoRepository {
    async fn create(&self, data: &CreatePhotoDTO) -> Result<Photo, RepositoryError> {
        let photo = Photo {
            photo_id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: data.title.clone(),
            caption: data.caption.clone(),
            photo_url: data.photo_url.clone(),
            user_id: data.user_id,
        };
        self.photos.insert(photo.photo_id, photo.clone());
        Ok(photo)
    }
}

impl Read<Photo, i32> for PhotoRepository {
    async fn read(&self, id: &i32) -> Result<Option<Photo>, RepositoryError> {
        Ok(self.photos.get(id).map(|entry| entry.value().clone()))
    }
}

impl Update<Photo, UpdatePhotoDTO, i32> for PhotoRepository {
    async fn update(&self, id: &i32, data: &UpdatePhotoDTO) -> Result<Photo, RepositoryError> {
        let mut entry = self.photos.get_mut(id).ok_or(RepositoryError::NotFound)?;
        let photo = entry.value_mut();
        photo.title = data.title.clone();
        photo.caption = data.caption.clone();
        photo.photo_url = data.photo_url.clone();
        Ok(photo.clone())
    }
}

impl Delete<i32> for PhotoRepository {
    async fn delete(&self, id: &i32) -> Result<(), RepositoryError> {
        self.photos
            .remove(id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}
