use super::password_hasher::PasswordHasher;
use bcrypt::{hash, verify};

/// Cost 12 keeps hashing around 250ms on current hardware.
const BCRYPT_COST: u32 = 12;

pub struct BcryptHasher;

impl PasswordHasher for BcryptHasher {
    fn hash_password(&self, password: &str) -> Result<String, String> {
        hash(password, BCRYPT_COST).map_err(|e| e.to_string())
    }

    fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, String> {
        verify(password, hashed).map_err(|e| e.to_string())
    }
}
