use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub uploads_dir: String,
    pub send_login_links_url: Option<String>,
    pub auth_token_length: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database_url: get_env("DATABASE_URL")?,
            uploads_dir: env::var("UPLOADS_DIR").unwrap_or_else(|_| "./uploads".to_string()),
            send_login_links_url: env::var("SEND_LOGIN_LINKS_URL").ok(),
            auth_token_length: env::var("AUTH_TOKEN_LENGTH")
                .ok()
                .map(|raw| {
                    raw.parse()
                        .map_err(|e| Error::Config(format!("Invalid value for AUTH_TOKEN_LENGTH: {}", e)))
                })
                .transpose()?
                .unwrap_or(32),
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}
