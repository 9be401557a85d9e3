use crate::error::{Error, Result};
use crate::navigation::NavigationPolicy;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Daily quota used when nothing else is configured
pub const DEFAULT_DAILY_QUOTA: u32 = 20;

/// Target the progress indicator counts towards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quota {
    /// Fixed daily target, independent of how many bills are loaded
    Daily(u32),
    /// One full pass over the loaded deck
    CollectionLength,
}

impl Quota {
    /// Resolve to a concrete number for a deck of `len` bills
    pub fn resolve(self, len: usize) -> u32 {
        match self {
            Quota::Daily(n) => n,
            Quota::CollectionLength => u32::try_from(len).unwrap_or(u32::MAX),
        }
    }
}

impl Default for Quota {
    fn default() -> Self {
        Quota::Daily(DEFAULT_DAILY_QUOTA)
    }
}

/// Configuration for the bill card engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub policy: NavigationPolicy,
    pub quota: Quota,
}

impl Config {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.quota == Quota::Daily(0) {
            return Err(Error::InvalidConfiguration(
                "quota must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    /// Load a configuration file (YAML, or TOML for `.toml` files)
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let file: ConfigFile = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&contents)?,
            _ => serde_yaml::from_str(&contents)?,
        };

        let mut builder = ConfigBuilder::new();
        if let Some(policy) = file.policy {
            builder = builder.policy_str(&policy)?;
        }
        if let Some(quota) = file.quota {
            builder = builder.quota_value(quota)?;
        }

        let config = builder.build()?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration file");
        Ok(config)
    }
}

/// On-disk configuration shape
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    policy: Option<String>,
    quota: Option<QuotaValue>,
}

/// Quota as written in a file: a number, or the word "collection"
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum QuotaValue {
    Number(i64),
    Word(String),
}

/// Builder for creating configurations
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the navigation policy
    pub fn policy(mut self, policy: NavigationPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Set the navigation policy from string ("wrap" or "clamp")
    pub fn policy_str(mut self, policy: &str) -> Result<Self> {
        self.config.policy = policy.parse()?;
        Ok(self)
    }

    /// Set a fixed daily quota
    pub fn quota(mut self, quota: u32) -> Self {
        self.config.quota = Quota::Daily(quota);
        self
    }

    /// Count progress against the number of loaded bills
    pub fn quota_from_collection(mut self) -> Self {
        self.config.quota = Quota::CollectionLength;
        self
    }

    /// Set the quota from string: a positive integer or "collection"
    pub fn quota_str(self, quota: &str) -> Result<Self> {
        let trimmed = quota.trim();
        if trimmed.eq_ignore_ascii_case("collection") {
            return Ok(self.quota_from_collection());
        }
        let n: i64 = trimmed.parse().map_err(|_| {
            Error::InvalidConfiguration(format!(
                "Invalid quota '{}'. Expected a positive integer or 'collection'",
                trimmed
            ))
        })?;
        self.quota_number(n)
    }

    fn quota_value(self, value: QuotaValue) -> Result<Self> {
        match value {
            QuotaValue::Number(n) => self.quota_number(n),
            QuotaValue::Word(word) => self.quota_str(&word),
        }
    }

    fn quota_number(self, n: i64) -> Result<Self> {
        match u32::try_from(n) {
            Ok(quota) if quota > 0 => Ok(self.quota(quota)),
            _ => Err(Error::InvalidConfiguration(format!(
                "quota must be a positive integer, got {}",
                n
            ))),
        }
    }

    /// Build the final configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
