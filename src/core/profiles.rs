use std::sync::Arc;
use uuid::Uuid;

use crate::core::ports::DogStore;
use crate::core::reactions::MatchEngine;
use crate::error::{AppError, AppResult, ErrorKind};
use crate::models::{Dog, DogAttributes, Pagination};

/// Dog profile service enforcing ownership
///
/// Every mutation loads the current record and compares its owner with the
/// acting user before anything reaches the store. The load and the write
/// are not one transaction; ownership never changes after creation, so the
/// check cannot be invalidated in between.
#[derive(Clone)]
pub struct DogService {
    store: Arc<dyn DogStore>,
    engine: MatchEngine,
}

impl DogService {
    pub fn new(store: Arc<dyn DogStore>) -> Self {
        let engine = MatchEngine::new(store.clone());
        Self { store, engine }
    }

    /// Reaction recording and match computation over the same store
    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Other users' dogs, newest first
    pub async fn list(&self, acting_user: Uuid, pagination: Pagination) -> AppResult<Vec<Dog>> {
        let dogs = self
            .store
            .list_excluding(acting_user, pagination)
            .await
            .map_err(|e| AppError::wrap(ErrorKind::Internal, e, "getting dogs list error"))?;

        tracing::debug!("Listed {} dogs for user {}", dogs.len(), acting_user);
        Ok(dogs)
    }

    pub async fn get(&self, dog_id: Uuid) -> AppResult<Dog> {
        self.store.load(dog_id).await
    }

    pub async fn create(&self, acting_user: Uuid, attrs: DogAttributes) -> AppResult<Dog> {
        let dog = self
            .store
            .insert(acting_user, &attrs)
            .await
            .map_err(|e| AppError::wrap(ErrorKind::Internal, e, "creation dog error"))?;

        tracing::info!("Created dog {} for user {}", dog.id, acting_user);
        Ok(dog)
    }

    pub async fn update(
        &self,
        dog_id: Uuid,
        acting_user: Uuid,
        attrs: DogAttributes,
    ) -> AppResult<Dog> {
        let current = self.store.load(dog_id).await?;

        if !current.is_owned_by(acting_user) {
            tracing::warn!(
                "User {} tried to edit dog {} owned by {}",
                acting_user,
                dog_id,
                current.user_id
            );
            return Err(AppError::permission_denied("cannot edit a dog that isn't yours"));
        }

        let dog = self
            .store
            .save(dog_id, &attrs)
            .await
            .map_err(|e| AppError::wrap(ErrorKind::Internal, e, "updating dog error"))?;

        tracing::info!("Updated dog {}", dog_id);
        Ok(dog)
    }

    pub async fn delete(&self, dog_id: Uuid, acting_user: Uuid) -> AppResult<()> {
        let current = self.store.load(dog_id).await?;

        if !current.is_owned_by(acting_user) {
            tracing::warn!(
                "User {} tried to delete dog {} owned by {}",
                acting_user,
                dog_id,
                current.user_id
            );
            return Err(AppError::permission_denied("cannot delete a dog that isn't yours"));
        }

        self.store
            .remove(dog_id)
            .await
            .map_err(|e| AppError::wrap(ErrorKind::Internal, e, "deletion dog error"))?;

        tracing::info!("Deleted dog {}", dog_id);
        Ok(())
    }

    /// Matches of a dog; only its owner may see them
    pub async fn matches(
        &self,
        acting_user: Uuid,
        dog_id: Uuid,
        pagination: Pagination,
    ) -> AppResult<Vec<Dog>> {
        let dog = self.store.load(dog_id).await?;

        if !dog.is_owned_by(acting_user) {
            return Err(AppError::permission_denied("cannot get matches of not your dog"));
        }

        self.engine.compute_matches(dog_id, pagination).await
    }

    /// Whether the backing store answers
    pub async fn health_check(&self) -> AppResult<()> {
        self.store.health_check().await
    }
}
