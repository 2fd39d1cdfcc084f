use anyhow::Context;
use serde::Deserialize;

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Read the full configuration from the environment.
    ///
    /// `DATABASE_URL` and `JWT_SECRET` are required; everything else has a
    /// development default.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let secret = std::env::var("JWT_SECRET").context("JWT_SECRET is not set")?;
        let ttl_minutes = env_or("JWT_TTL_MINUTES", "60")
            .parse::<i64>()
            .context("JWT_TTL_MINUTES must be an integer")?;
        Ok(Self {
            database_url,
            jwt: JwtConfig {
                secret,
                issuer: env_or("JWT_ISSUER", "userhub"),
                audience: env_or("JWT_AUDIENCE", "userhub-clients"),
                ttl_minutes,
            },
        })
    }
}
