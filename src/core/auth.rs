use std::sync::Arc;
use uuid::Uuid;

use crate::core::ports::{PasswordHasher, TokenIssuer, UserStore};
use crate::error::{AppError, AppResult, ErrorKind};
use crate::models::{Credentials, User};

/// Registration, credential checks and session tokens
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self { users, hasher, tokens }
    }

    /// Register a new user; the returned record never carries the password
    pub async fn sign_up(&self, credentials: Credentials) -> AppResult<User> {
        if self.users.exists(&credentials.email).await? {
            return Err(AppError::already_exists("user with provided email already exists"));
        }

        let password_hash = self.hasher.hash(&credentials.password);

        let user = self
            .users
            .create(&credentials.email, &password_hash)
            .await
            .map_err(|e| match e.kind() {
                // Lost the race against a concurrent sign-up with the same email.
                ErrorKind::AlreadyExists => e,
                _ => AppError::wrap(ErrorKind::Internal, e, "creating user error"),
            })?;

        tracing::info!("Registered user {}", user.id);
        Ok(user)
    }

    /// Resolve credentials to a user
    pub async fn authenticate(&self, credentials: &Credentials) -> AppResult<User> {
        let password_hash = self.hasher.hash(&credentials.password);
        self.users
            .find_by_credentials(&credentials.email, &password_hash)
            .await
    }

    /// Authenticate and issue a session token
    pub async fn sign_in(&self, credentials: Credentials) -> AppResult<String> {
        let user = self.authenticate(&credentials).await?;
        let token = self.tokens.issue(user.id)?;

        tracing::debug!("Issued token for user {}", user.id);
        Ok(token)
    }

    /// Resolve a session token to the acting user id
    pub fn validate_token(&self, token: &str) -> AppResult<Uuid> {
        self.tokens.validate(token)
    }
}
