use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::models::domain::{Dog, DogSex, User};

/// Dog profile as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DogResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub sex: DogSex,
    pub age: u32,
    pub breed: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Dog> for DogResponse {
    fn from(dog: Dog) -> Self {
        DogResponse {
            id: dog.id,
            owner_id: dog.user_id,
            name: dog.name,
            sex: dog.sex,
            age: dog.age,
            breed: dog.breed,
            image: dog.image,
            created_at: dog.created_at,
            updated_at: dog.updated_at,
        }
    }
}

/// Registered user; never carries the password
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub registered_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            email: user.email,
            registered_at: user.registered_at,
        }
    }
}

/// Response for sign-in endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInResponse {
    pub token: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, String>,
}
