// Core service exports
pub mod auth;
pub mod ports;
pub mod profiles;
pub mod reactions;

pub use auth::AuthService;
pub use ports::{DogStore, PasswordHasher, TokenIssuer, UserStore};
pub use profiles::DogService;
pub use reactions::MatchEngine;

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::core::ports::{DogStore, UserStore};
    use crate::error::{AppError, AppResult};
    use crate::models::{Action, Dog, DogAttributes, DogSex, Pagination, Reaction};
    use crate::services::MemoryStore;

    pub fn attrs(name: &str) -> DogAttributes {
        DogAttributes {
            name: name.to_string(),
            sex: DogSex::Female,
            age: 3,
            breed: "Beagle".to_string(),
            image: format!("https://images.example.com/{}.jpg", name.to_lowercase()),
        }
    }

    pub async fn seed_user(store: &MemoryStore, email: &str) -> Uuid {
        store.create(email, "hash").await.unwrap().id
    }

    pub async fn seed_dog(store: &MemoryStore, owner: Uuid, name: &str) -> Dog {
        store.insert(owner, &attrs(name)).await.unwrap()
    }

    /// Store whose every call fails with an I/O-style error
    pub struct FailingStore;

    fn io_fault() -> AppError {
        AppError::internal("connection refused")
    }

    #[async_trait]
    impl DogStore for FailingStore {
        async fn load(&self, _dog_id: Uuid) -> AppResult<Dog> {
            Err(io_fault())
        }

        async fn insert(&self, _owner: Uuid, _attrs: &DogAttributes) -> AppResult<Dog> {
            Err(io_fault())
        }

        async fn save(&self, _dog_id: Uuid, _attrs: &DogAttributes) -> AppResult<Dog> {
            Err(io_fault())
        }

        async fn remove(&self, _dog_id: Uuid) -> AppResult<()> {
            Err(io_fault())
        }

        async fn list_excluding(
            &self,
            _user_id: Uuid,
            _pagination: Pagination,
        ) -> AppResult<Vec<Dog>> {
            Err(io_fault())
        }

        async fn upsert_reaction(&self, _reaction: &Reaction) -> AppResult<()> {
            Err(io_fault())
        }

        async fn query_reciprocal(
            &self,
            _dog_id: Uuid,
            _action: Action,
            _pagination: Pagination,
        ) -> AppResult<Vec<Dog>> {
            Err(io_fault())
        }

        async fn health_check(&self) -> AppResult<()> {
            Err(io_fault())
        }
    }
}
