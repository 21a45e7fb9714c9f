use std::sync::Arc;

use super::bcrypt_hasher::BcryptHasher;
use super::password_hasher::PasswordHasher;

/// Thin dispatcher over the configured hashing backend. Only bcrypt is
/// wired today but callers never touch the backend directly.
#[derive(Clone)]
pub struct PasswordHashingService {
    hasher: Arc<dyn PasswordHasher>,
}

impl PasswordHashingService {
    pub fn bcrypt() -> Self {
        Self {
            hasher: Arc::new(BcryptHasher),
        }
    }

    pub fn with_hasher(hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { hasher }
    }

    pub fn hash_password(&self, password: &str) -> Result<String, String> {
        self.hasher.hash_password(password)
    }

    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, String> {
        self.hasher.verify_password(password, hash)
    }
}

impl std::fmt::Debug for PasswordHashingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHashingService").finish()
    }
}
