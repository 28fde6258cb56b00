//! Dogmatch - matchmaking backend for dog owners
//!
//! Owners register, manage their dogs' profiles and react to other dogs.
//! Two dogs match when each has liked the other.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{AuthService, DogService, MatchEngine};
pub use error::{AppError, AppResult, ErrorKind};
pub use models::{Action, Dog, DogAttributes, DogSex, Pagination, Reaction, User};
