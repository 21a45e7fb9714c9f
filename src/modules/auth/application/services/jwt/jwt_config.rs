#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    /// Session lifetime in seconds.
    pub session_expiry: i64,
}

impl JwtConfig {
    pub fn new(secret_key: String, session_expiry: i64) -> Self {
        Self {
            secret_key,
            session_expiry,
        }
    }
}
