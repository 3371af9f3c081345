use std::env;

use auth_core::CredentialPolicy;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub jwt: JwtConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_minutes: i64,
    pub issuer: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SecurityConfig {
    pub bcrypt_cost: u32,
    pub username_min_length: usize,
    pub username_max_length: usize,
    pub password_min_length: usize,
    pub password_max_length: usize,
    pub password_require_digit: bool,
    pub password_require_symbol: bool,
    pub password_require_uppercase: bool,
    pub password_require_lowercase: bool,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, SECURITY__BCRYPT_COST, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}

impl SecurityConfig {
    /// Bridge the startup thresholds into the validator's policy.
    pub fn policy(&self) -> CredentialPolicy {
        CredentialPolicy {
            username_min: self.username_min_length,
            username_max: self.username_max_length,
            password_min: self.password_min_length,
            password_max: self.password_max_length,
            password_require_digit: self.password_require_digit,
            password_require_symbol: self.password_require_symbol,
            password_require_uppercase: self.password_require_uppercase,
            password_require_lowercase: self.password_require_lowercase,
        }
    }
}
