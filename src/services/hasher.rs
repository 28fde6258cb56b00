use sha2::{Digest, Sha256};

use crate::core::ports::PasswordHasher;

/// Salted SHA-256 password hasher, hex encoded
pub struct Sha256Hasher {
    salt: String,
}

impl Sha256Hasher {
    pub fn new(salt: impl Into<String>) -> Self {
        Self { salt: salt.into() }
    }
}

impl PasswordHasher for Sha256Hasher {
    fn hash(&self, password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(password.as_bytes());
        hasher.update(self.salt.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic_and_salted() {
        let a = Sha256Hasher::new("salt-a");
        let b = Sha256Hasher::new("salt-b");

        assert_eq!(a.hash("secret"), a.hash("secret"));
        assert_ne!(a.hash("secret"), b.hash("secret"));
        assert_ne!(a.hash("secret"), "secret");
        assert_eq!(a.hash("secret").len(), 64);
    }
}
