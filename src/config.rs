// src/config.rs
//
// Explicit configuration struct built once at startup and passed by
// reference to the collaborators that need it. Environment variables are
// loaded from `.env.{RUST_ENV}` with a fallback to `.env`.
use anyhow::{Context, Result};
use std::env;

#[derive(Clone, Debug)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_email: String,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// "development" | "production" | "test"
    pub env: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expires_secs: i64,
    /// Base URL of the web client, used when building e-mailed links.
    pub app_client_url: String,
    /// External recommendation engine forwarded to by /provide-recommendation.
    pub recommender_url: String,
    pub smtp: SmtpConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", env_name);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a number")?;

        let smtp_port = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse::<u16>()
            .context("SMTP_PORT must be a number")?;

        Ok(Self {
            env: env_name,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            database_url: env::var("DATABASE_URL").context("DATABASE_URL is not set")?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET is not set")?,
            jwt_expires_secs: env::var("JWT_EXPIRES_SECS")
                .unwrap_or_else(|_| (7 * 24 * 60 * 60).to_string())
                .parse::<i64>()
                .context("JWT_EXPIRES_SECS must be a number")?,
            app_client_url: env::var("APP_CLIENT").context("APP_CLIENT is not set")?,
            recommender_url: env::var("RECOMMENDER_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:5000/recommend".to_string()),
            smtp: SmtpConfig {
                host: env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string()),
                port: smtp_port,
                username: env::var("SMTP_USERNAME").unwrap_or_default(),
                password: env::var("SMTP_PASSWORD").unwrap_or_default(),
                from_email: env::var("EMAIL_FROM")
                    .unwrap_or_else(|_| "PathNest <hello@pathnest.io>".to_string()),
            },
        })
    }

    pub fn is_production(&self) -> bool {
        self.env == "production"
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            env: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            database_url: "postgres://localhost/pathnest_test".to_string(),
            jwt_secret: "testsecret".to_string(),
            jwt_expires_secs: 3600,
            app_client_url: "https://app.pathnest.io".to_string(),
            recommender_url: "http://127.0.0.1:5000/recommend".to_string(),
            smtp: SmtpConfig {
                host: "localhost".to_string(),
                port: 1025,
                username: String::new(),
                password: String::new(),
                from_email: "PathNest <hello@pathnest.io>".to_string(),
            },
        }
    }
}
