//! Configuration Management
//!
//! Handles persistent configuration for the VisionBoard Pro client and the
//! token issuer. The signing key has no usable default: it must come from
//! the environment or the config file, and the development placeholder is
//! rejected when the issuer is constructed.

use crate::token::{TokenIssuer, DEFAULT_TOKEN_LIFETIME_DAYS};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.visionboardpro.com/v1";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// API base URL override
    #[serde(default)]
    pub base_url: Option<String>,
    /// Token lifetime in days
    #[serde(default)]
    pub token_lifetime_days: Option<i64>,
    /// Token signing key (prefer VISIONBOARD_SIGNING_KEY over storing this)
    #[serde(default)]
    pub signing_key: Option<String>,
}

impl Config {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("visionboard").join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };

        // Create parent directory
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Get effective base URL (env > config > default)
    pub fn effective_base_url(&self) -> String {
        std::env::var("VISIONBOARD_API_URL")
            .ok()
            .or_else(|| self.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Get effective token lifetime in days (env > config > default)
    pub fn effective_token_lifetime_days(&self) -> i64 {
        std::env::var("VISIONBOARD_TOKEN_TTL_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(self.token_lifetime_days)
            .unwrap_or(DEFAULT_TOKEN_LIFETIME_DAYS)
    }

    /// Get the signing key (env > config; never defaulted)
    pub fn effective_signing_key(&self) -> Option<String> {
        std::env::var("VISIONBOARD_SIGNING_KEY")
            .ok()
            .or_else(|| self.signing_key.clone())
    }

    /// Build a token issuer from this configuration
    ///
    /// Fails when no signing key is configured or when the key is the
    /// development placeholder.
    pub fn token_issuer(&self) -> Result<TokenIssuer> {
        let key = self
            .effective_signing_key()
            .context("No signing key configured. Set VISIONBOARD_SIGNING_KEY")?;
        TokenIssuer::new(&key, self.effective_token_lifetime_days())
            .context("Failed to construct token issuer")
    }
}
