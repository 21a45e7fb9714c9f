use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,
    #[error("Invalid token signature")]
    InvalidSignature,
    #[error("Malformed token")]
    MalformedToken,
    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Claims carried by a session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: Uuid,
    pub email: String,
    pub exp: i64,
}

pub trait TokenProvider: Send + Sync {
    fn generate_session_token(&self, user_id: Uuid, email: &str) -> Result<String, TokenError>;
    fn verify_session_token(&self, token: &str) -> Result<SessionClaims, TokenError>;
}
