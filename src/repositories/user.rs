//! UserRepository - Repository per la gestione degli utenti

use super::{Create, Delete, Read, RepositoryError, Update};
use crate::dtos::{CreateUserDTO, UpdateUserDTO};
use crate::entities::User;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

// USER REPO
// lock order is always `emails` before `users`
pub struct UserRepository {
    users: DashMap<Uuid, User>,
    emails: DashMap<String, Uuid>,
}

impl Default for UserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository {
    pub fn new() -> UserRepository {
        Self {
            users: DashMap::new(),
            emails: DashMap::new(),
        }
    }

    /// considero l'email univoca
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let Some(user_id) = self.emails.get(email).map(|entry| *entry.value()) else {
            return Ok(None);
        };
        Ok(self.users.get(&user_id).map(|entry| entry.value().clone()))
    }
}

impl Create<User, CreateUserDTO> for UserRepository {
    async fn create(&self, data: &CreateUserDTO) -> Result<User, RepositoryError> {
        let now = Utc::now();
        let user = User {
            user_id: Uuid::new_v4(),
            username: data.username.clone(),
            email: data.email.clone(),
            password: data.password.clone(),
            created_at: now,
            updated_at: now,
        };

        match self.emails.entry(data.email.clone()) {
            Entry::Occupied(_) => Err(RepositoryError::Conflict("email already exist")),
            Entry::Vacant(slot) => {
                slot.insert(user.user_id);
                self.users.insert(user.user_id, user.clone());
                Ok(user)
            }
        }
    }
}

impl Read<User, Uuid> for UserRepository {
    async fn read(&self, id: &Uuid) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.get(id).map(|entry| entry.value().clone()))
    }
}

impl Update<User, UpdateUserDTO, Uuid> for UserRepository {
    /// `data.password` must already be hashed.
    async fn update(&self, id: &Uuid, data: &UpdateUserDTO) -> Result<User, RepositoryError> {
        let current_email = self
            .users
            .get(id)
            .map(|entry| entry.value().email.clone())
            .ok_or(RepositoryError::NotFound)?;

        if current_email != data.email {
            match self.emails.entry(data.email.clone()) {
                Entry::Occupied(_) => return Err(RepositoryError::Conflict("email already exist")),
                Entry::Vacant(slot) => {
                    slot.insert(*id);
                }
            }
            self.emails.remove(&current_email);
        }

        let mut entry = self.users.get_mut(id).ok_or(RepositoryError::NotFound)?;
        let user = entry.value_mut();
        user.username = data.username.clone();
        user.email = data.email.clone();
        user.password = data.password.clone();
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}

impl Delete<Uuid> for UserRepository {
    async fn delete(&self, id: &Uuid) -> Result<(), RepositoryError> {
        let (_, user) = self.users.remove(id).ok_or(RepositoryError::NotFound)?;
        self.emails.remove(&user.email);
        Ok(())
    }
}
