use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::domain::{Action, Credentials, DogAttributes, DogSex, Pagination, Reaction};

/// Sign-up request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl From<SignUpRequest> for Credentials {
    fn from(req: SignUpRequest) -> Self {
        Credentials {
            email: req.email,
            password: req.password,
        }
    }
}

/// Sign-in request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl From<SignInRequest> for Credentials {
    fn from(req: SignInRequest) -> Self {
        Credentials {
            email: req.email,
            password: req.password,
        }
    }
}

/// Body of dog create and update requests
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DogRequest {
    #[validate(length(min = 3, max = 30))]
    pub name: String,
    pub sex: DogSex,
    #[validate(range(max = 30))]
    pub age: u32,
    #[validate(length(min = 1, max = 30))]
    pub breed: String,
    #[validate(url, length(max = 1024))]
    pub image: String,
}

impl From<DogRequest> for DogAttributes {
    fn from(req: DogRequest) -> Self {
        DogAttributes {
            name: req.name,
            sex: req.sex,
            age: req.age,
            breed: req.breed,
            image: req.image,
        }
    }
}

/// Reaction request
///
/// `action` is one of `like` or `dislike`; anything else fails to
/// deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionRequest {
    pub liker: Uuid,
    pub liked: Uuid,
    pub action: Action,
}

impl From<ReactionRequest> for Reaction {
    fn from(req: ReactionRequest) -> Self {
        Reaction {
            liker: req.liker,
            liked: req.liked,
            action: req.action,
        }
    }
}

/// Pagination query string: `?page=1&per-page=10`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct PaginationQuery {
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,
    #[serde(default = "default_per_page", rename = "per-page")]
    #[validate(range(min = 1, max = 100))]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    10
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl From<PaginationQuery> for Pagination {
    fn from(query: PaginationQuery) -> Self {
        Pagination::new(query.page, query.per_page)
    }
}
