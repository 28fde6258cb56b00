// Service exports
pub mod hasher;
pub mod memory;
pub mod postgres;
pub mod token;

pub use hasher::Sha256Hasher;
pub use memory::MemoryStore;
pub use postgres::{PostgresClient, PostgresError};
pub use token::{Claims, JwtTokens};
