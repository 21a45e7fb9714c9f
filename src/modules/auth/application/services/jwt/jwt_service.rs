use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use super::jwt_config::JwtConfig;
use crate::auth::application::ports::outgoing::token_provider::{
    SessionClaims, TokenError, TokenProvider,
};

pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtService {
    fn generate_session_token(&self, user_id: Uuid, email: &str) -> Result<String, TokenError> {
        let expiration = Utc::now() + Duration::seconds(self.config.session_expiry);
        let claims = SessionClaims {
            sub: user_id,
            email: email.to_string(),
            exp: expiration.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn verify_session_token(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let validation = Validation::new(Algorithm::HS256);

        let decoded =
            decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    _ => TokenError::MalformedToken,
                }
            })?;

        Ok(decoded.claims)
    }
}
