//! Common repository traits
//!
//! This module defines generic interfaces for store operations.

use super::RepositoryError;

/// Trait for creating new entities in the store
///
/// # Type Parameters
/// * `Entity` - Type of the returned entity (with ID assigned by the store)
/// * `CreateDTO` - DTO for creation (without ID, will be automatically generated)
pub trait Create<Entity, CreateDTO> {
    /// Creates a new entity in the store
    ///
    /// # Returns
    /// * `Ok(Entity)` - Created entity with ID assigned by the store
    /// * `Err(RepositoryError::Conflict)` - A unique field is already taken
    async fn create(&self, data: &CreateDTO) -> Result<Entity, RepositoryError>;
}

/// Trait for reading a single entity by primary key
pub trait Read<Entity, Id> {
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity found
    /// * `Ok(None)` - No entity with that ID
    async fn read(&self, id: &Id) -> Result<Option<Entity>, RepositoryError>;
}

/// Trait for updating existing entities
///
/// # Type Parameters
/// * `Entity` - Type of the updated entity
/// * `UpdateDTO` - DTO carrying the new values
/// * `Id` - Type of the primary key
pub trait Update<Entity, UpdateDTO, Id> {
    /// # Returns
    /// * `Ok(Entity)` - Updated entity
    /// * `Err(RepositoryError::NotFound)` - No entity with that ID
    async fn update(&self, id: &Id, data: &UpdateDTO) -> Result<Entity, RepositoryError>;
}

/// Trait for deleting entities
pub trait Delete<Id> {
    /// # Returns
    /// * `Ok(())` - Deletion successful
    /// * `Err(RepositoryError::NotFound)` - No entity with that ID
    async fn delete(&self, id: &Id) -> Result<(), RepositoryError>;
}
