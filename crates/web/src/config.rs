use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub admin_pin: String,
    pub operator_pin: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            admin_pin: std::env::var("ADMIN_PIN").context("Cannot load ADMIN_PIN env variable")?,
            operator_pin: std::env::var("OPERATOR_PIN")
                .context("Cannot load OPERATOR_PIN env variable")?,
        })
    }
}
