pub mod console;
pub mod suite_config;

use crate::core::registry;
use crate::domain::model::{SecretEntry, DEFAULT_SECRET_KEYS};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "record-demos")]
#[command(about = "A small runner for record-shape demos")]
pub struct CliConfig {
    /// Demos to run, in order. Empty means the full default set.
    #[arg(long, value_delimiter = ',')]
    pub demos: Vec<String>,

    /// Keys queried by the secret-lookup demos.
    #[arg(long, value_delimiter = ',')]
    pub secret_keys: Vec<i64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn demo_names(&self) -> &[String] {
        &self.demos
    }

    fn secret_keys(&self) -> Vec<i64> {
        if self.secret_keys.is_empty() {
            DEFAULT_SECRET_KEYS.to_vec()
        } else {
            self.secret_keys.clone()
        }
    }

    fn secret_entries(&self) -> Vec<SecretEntry> {
        SecretEntry::defaults()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        for name in &self.demos {
            validation::validate_one_of("demos", name, &registry::DEMO_NAMES)?;
        }
        validation::validate_unique_keys("secret_keys", &self.secret_keys)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            demos: vec![],
            secret_keys: vec![],
            verbose: false,
        }
    }

    #[test]
    fn test_empty_config_falls_back_to_defaults() {
        let config = base_config();

        assert!(config.validate().is_ok());
        assert!(config.demo_names().is_empty());
        assert_eq!(ConfigProvider::secret_keys(&config), vec![1, 293, 100000000]);
        assert_eq!(config.secret_entries().len(), 2);
    }

    #[test]
    fn test_unknown_demo_name_fails_validation() {
        let mut config = base_config();
        config.demos = vec!["projection".to_string(), "pipeline".to_string()];

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duplicate_secret_keys_fail_validation() {
        let mut config = base_config();
        config.secret_keys = vec![1, 1];

        assert!(config.validate().is_err());
    }
}
