//! Common repository traits
//!
//! This module defines generic interfaces for database operations.

use crate::core::RepositoryError;

/// Trait for creating new entities in the database
///
/// # Type Parameters
/// * `Entity` - Type of the returned entity (with ID assigned by the database)
/// * `CreateDTO` - DTO for creation (without ID, will be automatically generated)
pub trait Create<Entity, CreateDTO> {
    /// Creates a new entity in the database
    ///
    /// # Returns
    /// * `Ok(Entity)` - Created entity with ID assigned by the database
    /// * `Err(RepositoryError)` - Constraint violation or database failure
    async fn create(&self, data: &CreateDTO) -> Result<Entity, RepositoryError>;
}

/// Trait for reading a single entity by primary key
///
/// # Type Parameters
/// * `Entity` - Type of the entity to read
/// * `Id` - Type of the primary key
pub trait Read<Entity, Id> {
    /// Reads an entity from the database by its primary key
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity found
    /// * `Ok(None)` - No entity with that ID
    /// * `Err(RepositoryError)` - Error during reading
    async fn read(&self, id: &Id) -> Result<Option<Entity>, RepositoryError>;
}

/// Trait for updating existing entities
///
/// # Type Parameters
/// * `Entity` - Type of the updated entity
/// * `UpdateDTO` - DTO carrying the fields to change
/// * `Id` - Type of the primary key
pub trait Update<Entity, UpdateDTO, Id> {
    /// Updates an existing entity and returns it as stored after the update
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Updated entity
    /// * `Ok(None)` - No entity with that ID, nothing changed
    /// * `Err(RepositoryError)` - Error during update
    async fn update(&self, id: &Id, data: &UpdateDTO) -> Result<Option<Entity>, RepositoryError>;
}
