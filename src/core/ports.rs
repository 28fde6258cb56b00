//! Collaborator contracts consumed by the core services.
//!
//! Store implementations classify their own failures: a missing row is
//! `NotFound`, a unique-email violation is `AlreadyExists`, everything else
//! is `Internal`. Services pass these through or wrap them, never reinterpret.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{Action, Dog, DogAttributes, Pagination, Reaction, User};

/// Persistence of dog profiles and reaction edges
#[async_trait]
pub trait DogStore: Send + Sync {
    /// Load one dog by id
    async fn load(&self, dog_id: Uuid) -> AppResult<Dog>;

    /// Insert a new dog owned by `owner`; id and timestamps are generated
    async fn insert(&self, owner: Uuid, attrs: &DogAttributes) -> AppResult<Dog>;

    /// Overwrite the attributes of an existing dog and refresh `updated_at`
    async fn save(&self, dog_id: Uuid, attrs: &DogAttributes) -> AppResult<Dog>;

    /// Delete a dog and every reaction referencing it
    async fn remove(&self, dog_id: Uuid) -> AppResult<()>;

    /// Dogs not owned by `user_id`, newest first
    async fn list_excluding(&self, user_id: Uuid, pagination: Pagination) -> AppResult<Vec<Dog>>;

    /// Insert the edge or overwrite action and timestamp of the existing one
    async fn upsert_reaction(&self, reaction: &Reaction) -> AppResult<()>;

    /// Dogs D with `action` edges both `dog_id -> D` and `D -> dog_id`,
    /// ordered by the `D -> dog_id` edge timestamp, newest first
    async fn query_reciprocal(
        &self,
        dog_id: Uuid,
        action: Action,
        pagination: Pagination,
    ) -> AppResult<Vec<Dog>>;

    async fn health_check(&self) -> AppResult<()>;
}

/// Persistence of user accounts
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn exists(&self, email: &str) -> AppResult<bool>;

    async fn create(&self, email: &str, password_hash: &str) -> AppResult<User>;

    /// Fails with `NotFound` when no user has this email and hash
    async fn find_by_credentials(&self, email: &str, password_hash: &str) -> AppResult<User>;
}

/// One-way password hashing
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> String;
}

/// Session token issuing and validation
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user_id: Uuid) -> AppResult<String>;

    /// Resolve a token to the user id it was issued for
    fn validate(&self, token: &str) -> AppResult<Uuid>;
}
