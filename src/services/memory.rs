use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::ports::{DogStore, UserStore};
use crate::error::{AppError, AppResult};
use crate::models::{Action, Dog, DogAttributes, Pagination, Reaction, User};

/// In-process store with the same contract as the PostgreSQL schema
///
/// Mirrors the schema constraints: dogs need an existing owner, reactions
/// need existing dogs on both ends, emails are unique, and removing a dog
/// cascades to its reactions. A single lock makes every write atomic,
/// which gives the reaction upsert its insert-or-update semantics.
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    users: HashMap<Uuid, UserRecord>,
    dogs: HashMap<Uuid, DogRecord>,
    reactions: HashMap<(Uuid, Uuid), EdgeRecord>,
    // Tie-breaker for rows written within the same clock tick
    sequence: u64,
}

struct UserRecord {
    user: User,
    password_hash: String,
}

struct DogRecord {
    dog: Dog,
    seq: u64,
}

struct EdgeRecord {
    action: Action,
    created_at: DateTime<Utc>,
    seq: u64,
}

impl MemoryState {
    fn next_seq(&mut self) -> u64 {
        self.sequence += 1;
        self.sequence
    }
}

fn paginate<T>(items: Vec<T>, pagination: Pagination) -> Vec<T> {
    items
        .into_iter()
        .skip(pagination.offset())
        .take(pagination.limit())
        .collect()
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState::default()),
        }
    }

    /// Inspection helper: number of stored reaction edges
    pub async fn reaction_count(&self) -> usize {
        self.state.read().await.reactions.len()
    }

    /// Inspection helper: current action on the (liker, liked) edge, if any
    pub async fn reaction_action(&self, liker: Uuid, liked: Uuid) -> Option<Action> {
        self.state
            .read()
            .await
            .reactions
            .get(&(liker, liked))
            .map(|edge| edge.action)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DogStore for MemoryStore {
    async fn load(&self, dog_id: Uuid) -> AppResult<Dog> {
        self.state
            .read()
            .await
            .dogs
            .get(&dog_id)
            .map(|record| record.dog.clone())
            .ok_or_else(|| AppError::not_found("dog not found"))
    }

    async fn insert(&self, owner: Uuid, attrs: &DogAttributes) -> AppResult<Dog> {
        let mut state = self.state.write().await;

        if !state.users.contains_key(&owner) {
            return Err(AppError::internal(format!("owner {} does not exist", owner)));
        }

        let now = Utc::now();
        let dog = Dog {
            id: Uuid::new_v4(),
            user_id: owner,
            name: attrs.name.clone(),
            sex: attrs.sex,
            age: attrs.age,
            breed: attrs.breed.clone(),
            image: attrs.image.clone(),
            created_at: now,
            updated_at: now,
        };

        let seq = state.next_seq();
        state.dogs.insert(dog.id, DogRecord { dog: dog.clone(), seq });

        Ok(dog)
    }

    async fn save(&self, dog_id: Uuid, attrs: &DogAttributes) -> AppResult<Dog> {
        let mut state = self.state.write().await;

        let record = state
            .dogs
            .get_mut(&dog_id)
            .ok_or_else(|| AppError::not_found("dog not found"))?;

        let dog = &mut record.dog;
        dog.name = attrs.name.clone();
        dog.sex = attrs.sex;
        dog.age = attrs.age;
        dog.breed = attrs.breed.clone();
        dog.image = attrs.image.clone();
        dog.updated_at = Utc::now().max(dog.updated_at);

        Ok(dog.clone())
    }

    async fn remove(&self, dog_id: Uuid) -> AppResult<()> {
        let mut state = self.state.write().await;

        state.dogs.remove(&dog_id);
        state
            .reactions
            .retain(|(liker, liked), _| *liker != dog_id && *liked != dog_id);

        Ok(())
    }

    async fn list_excluding(&self, user_id: Uuid, pagination: Pagination) -> AppResult<Vec<Dog>> {
        let state = self.state.read().await;

        let mut records: Vec<&DogRecord> = state
            .dogs
            .values()
            .filter(|record| record.dog.user_id != user_id)
            .collect();

        records.sort_by(|a, b| {
            (b.dog.created_at, b.seq).cmp(&(a.dog.created_at, a.seq))
        });

        let dogs = records.into_iter().map(|record| record.dog.clone()).collect();
        Ok(paginate(dogs, pagination))
    }

    async fn upsert_reaction(&self, reaction: &Reaction) -> AppResult<()> {
        let mut state = self.state.write().await;

        if reaction.is_self_reaction() {
            return Err(AppError::internal("reaction endpoints must differ"));
        }
        for dog_id in [reaction.liker, reaction.liked] {
            if !state.dogs.contains_key(&dog_id) {
                return Err(AppError::internal(format!(
                    "reaction references unknown dog {}",
                    dog_id
                )));
            }
        }

        let seq = state.next_seq();
        state.reactions.insert(
            (reaction.liker, reaction.liked),
            EdgeRecord {
                action: reaction.action,
                created_at: Utc::now(),
                seq,
            },
        );

        Ok(())
    }

    async fn query_reciprocal(
        &self,
        dog_id: Uuid,
        action: Action,
        pagination: Pagination,
    ) -> AppResult<Vec<Dog>> {
        let state = self.state.read().await;

        let mut matched: Vec<(&EdgeRecord, &Dog)> = state
            .reactions
            .iter()
            .filter(|((liker, _), outbound)| *liker == dog_id && outbound.action == action)
            .filter_map(|((_, partner), _)| {
                let inbound = state.reactions.get(&(*partner, dog_id))?;
                if inbound.action != action {
                    return None;
                }
                let dog = &state.dogs.get(partner)?.dog;
                Some((inbound, dog))
            })
            .collect();

        matched.sort_by(|(a, _), (b, _)| (b.created_at, b.seq).cmp(&(a.created_at, a.seq)));

        let dogs = matched.into_iter().map(|(_, dog)| dog.clone()).collect();
        Ok(paginate(dogs, pagination))
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn exists(&self, email: &str) -> AppResult<bool> {
        Ok(self
            .state
            .read()
            .await
            .users
            .values()
            .any(|record| record.user.email == email))
    }

    async fn create(&self, email: &str, password_hash: &str) -> AppResult<User> {
        let mut state = self.state.write().await;

        if state.users.values().any(|record| record.user.email == email) {
            return Err(AppError::already_exists("user with provided email already exists"));
        }

        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            registered_at: Utc::now(),
        };
        state.users.insert(
            user.id,
            UserRecord {
                user: user.clone(),
                password_hash: password_hash.to_string(),
            },
        );

        Ok(user)
    }

    async fn find_by_credentials(&self, email: &str, password_hash: &str) -> AppResult<User> {
        self.state
            .read()
            .await
            .users
            .values()
            .find(|record| record.user.email == email && record.password_hash == password_hash)
            .map(|record| record.user.clone())
            .ok_or_else(|| AppError::not_found("user not found"))
    }
}
