use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::ports::TokenIssuer;
use crate::error::{AppError, AppResult, ErrorKind};

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "user-id")]
    pub user_id: String,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

/// HS256 JWT session tokens
pub struct JwtTokens {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtTokens {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }
}

impl TokenIssuer for JwtTokens {
    fn issue(&self, user_id: Uuid) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            user_id: user_id.to_string(),
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::wrap(ErrorKind::Internal, e, "signing token error"))
    }

    fn validate(&self, token: &str) -> AppResult<Uuid> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
            .map_err(|e| {
                let message = if matches!(e.kind(), JwtErrorKind::ExpiredSignature) {
                    "token is expired"
                } else {
                    "parsing token error"
                };
                AppError::wrap(ErrorKind::Unauthenticated, e, message)
            })?;

        Uuid::parse_str(&data.claims.user_id).map_err(|e| {
            AppError::wrap(ErrorKind::Unauthenticated, e, "getting user id from token claims error")
        })
    }
}
