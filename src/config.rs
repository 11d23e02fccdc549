use std::{env, time::Duration};

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

#[derive(Clone, Debug)]
pub struct Config {
    pub llm_api_key: SecretString,
    pub llm_api_base: String,
    pub llm_model: String,
    pub llm_timeout_secs: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            llm_api_key: SecretString::from(env::var("GROQ_API_KEY").unwrap_or_default()),
            llm_api_base: env::var("LLM_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            llm_timeout_secs: env::var("LLM_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .or_else(|_| env::var("PORT"))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5001),
        }
    }

    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.llm_api_key.expose_secret().trim().is_empty() {
            return Err(AppError::Configuration(
                "GROQ_API_KEY is not set! Set GROQ_API_KEY to a valid completion provider key."
                    .to_string(),
            ));
        }

        if self.llm_timeout_secs == 0 {
            return Err(AppError::Configuration(
                "LLM_TIMEOUT_SECS must be greater than zero.".to_string(),
            ));
        }

        Ok(())
    }

    /// Panics if the provider credential is missing; every advice route would fail without it.
    pub fn validate_for_production(&self) {
        if let Err(err) = self.validate() {
            panic!("FATAL: {}", err);
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            llm_api_key: SecretString::from("test_api_key".to_string()),
            llm_api_base: "http://127.0.0.1:9/v1".to_string(),
            llm_model: DEFAULT_MODEL.to_string(),
            llm_timeout_secs: 5,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5001,
        }
    }
}
