use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::AppError;

/// Sex of a dog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DogSex {
    Male,
    Female,
}

impl DogSex {
    pub fn as_str(&self) -> &'static str {
        match self {
            DogSex::Male => "male",
            DogSex::Female => "female",
        }
    }
}

impl fmt::Display for DogSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DogSex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(DogSex::Male),
            "female" => Ok(DogSex::Female),
            other => Err(AppError::invalid_argument(format!("unknown dog sex '{}'", other))),
        }
    }
}

/// Dog profile, owned by exactly one user for its whole lifetime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub sex: DogSex,
    pub age: u32,
    pub breed: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Dog {
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

/// Mutable attributes of a dog profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogAttributes {
    pub name: String,
    pub sex: DogSex,
    pub age: u32,
    pub breed: String,
    pub image: String,
}

/// Reaction of one dog to another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Like,
    Dislike,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Like => "like",
            Action::Dislike => "dislike",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Action::Like),
            "dislike" => Ok(Action::Dislike),
            other => Err(AppError::invalid_argument(format!("unknown action '{}'", other))),
        }
    }
}

/// Directed reaction edge, unique per (liker, liked)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub liker: Uuid,
    pub liked: Uuid,
    pub action: Action,
}

impl Reaction {
    pub fn is_self_reaction(&self) -> bool {
        self.liker == self.liked
    }
}

/// Registered user. The password credential never leaves the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub registered_at: DateTime<Utc>,
}

/// Email and plain-text password, as submitted on sign-up or sign-in
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Page-based pagination, `page` starts at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    pub fn limit(&self) -> usize {
        self.per_page as usize
    }

    pub fn offset(&self) -> usize {
        self.per_page as usize * self.page.saturating_sub(1) as usize
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, per_page: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_offset() {
        assert_eq!(Pagination::new(1, 10).offset(), 0);
        assert_eq!(Pagination::new(3, 10).offset(), 20);
        assert_eq!(Pagination::new(2, 7).limit(), 7);
        assert_eq!(Pagination::default(), Pagination::new(1, 10));
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!("female".parse::<DogSex>().unwrap(), DogSex::Female);
        assert_eq!(Action::Dislike.to_string(), "dislike");
        assert!("poodle".parse::<DogSex>().is_err());
        assert_eq!(serde_json::to_string(&Action::Like).unwrap(), "\"like\"");
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials {
            email: "owner@example.com".to_string(),
            password: "hunter22".to_string(),
        };
        assert!(!format!("{:?}", creds).contains("hunter22"));
    }
}
