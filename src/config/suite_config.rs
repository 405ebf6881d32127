use crate::core::registry;
use crate::domain::model::{SecretEntry, DEFAULT_SECRET_KEYS};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    pub suite: SuiteMeta,
    pub run: RunSection,
    pub secrets: Option<SecretsSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteMeta {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSection {
    pub demos: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretsSection {
    pub keys: Option<Vec<i64>>,
    pub entries: Option<Vec<SecretEntry>>,
}

impl SuiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DemoError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DemoError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SUITE_NAME})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("suite.name", &self.suite.name)?;
        validation::validate_non_empty_string("suite.version", &self.suite.version)?;

        validation::validate_non_empty_list("run.demos", &self.run.demos)?;
        for name in &self.run.demos {
            validation::validate_one_of("run.demos", name, &registry::DEMO_NAMES)?;
        }

        if let Some(secrets) = &self.secrets {
            if let Some(keys) = &secrets.keys {
                validation::validate_non_empty_list("secrets.keys", keys)?;
                validation::validate_unique_keys("secrets.keys", keys)?;
            }
            if let Some(entries) = &secrets.entries {
                let store_keys: Vec<i64> = entries.iter().map(|e| e.key).collect();
                validation::validate_unique_keys("secrets.entries", &store_keys)?;
            }
        }

        Ok(())
    }
}

impl ConfigProvider for SuiteConfig {
    fn demo_names(&self) -> &[String] {
        &self.run.demos
    }

    fn secret_keys(&self) -> Vec<i64> {
        self.secrets
            .as_ref()
            .and_then(|s| s.keys.clone())
            .unwrap_or_else(|| DEFAULT_SECRET_KEYS.to_vec())
    }

    fn secret_entries(&self) -> Vec<SecretEntry> {
        self.secrets
            .as_ref()
            .and_then(|s| s.entries.clone())
            .unwrap_or_else(SecretEntry::defaults)
    }
}

impl Validate for SuiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_suite_config() {
        let toml_content = r#"
[suite]
name = "record-demos"
description = "Record shape demonstrations"
version = "1.0.0"

[run]
demos = ["projection", "secrets"]
"#;

        let config = SuiteConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.suite.name, "record-demos");
        assert_eq!(config.run.demos, vec!["projection", "secrets"]);
        assert!(config.validate().is_ok());
        assert_eq!(
            ConfigProvider::secret_keys(&config),
            vec![1, 293, 100000000]
        );
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_SUITE_NAME", "substituted-demos");

        let toml_content = r#"
[suite]
name = "${TEST_SUITE_NAME}"
description = "test"
version = "1.0"

[run]
demos = ["projection"]
"#;

        let config = SuiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.suite.name, "substituted-demos");

        std::env::remove_var("TEST_SUITE_NAME");
    }

    #[test]
    fn test_unresolved_env_var_is_left_intact() {
        let toml_content = r#"
[suite]
name = "${NO_SUCH_SUITE_VAR}"
description = "test"
version = "1.0"

[run]
demos = ["projection"]
"#;

        let config = SuiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.suite.name, "${NO_SUCH_SUITE_VAR}");
    }

    #[test]
    fn test_unknown_demo_fails_validation() {
        let toml_content = r#"
[suite]
name = "test"
description = "test"
version = "1.0"

[run]
demos = ["pipeline"]
"#;

        let config = SuiteConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_demo_list_fails_validation() {
        let toml_content = r#"
[suite]
name = "test"
description = "test"
version = "1.0"

[run]
demos = []
"#;

        let config = SuiteConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_secret_overrides() {
        let toml_content = r#"
[suite]
name = "test"
description = "test"
version = "1.0"

[run]
demos = ["secrets"]

[secrets]
keys = [7, 8]

[[secrets.entries]]
key = 7
number = 42
"#;

        let config = SuiteConfig::from_toml_str(toml_content).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(ConfigProvider::secret_keys(&config), vec![7, 8]);
        assert_eq!(
            config.secret_entries(),
            vec![SecretEntry { key: 7, number: 42 }]
        );
    }

    #[test]
    fn test_duplicate_store_entries_fail_validation() {
        let toml_content = r#"
[suite]
name = "test"
description = "test"
version = "1.0"

[run]
demos = ["secrets"]

[[secrets.entries]]
key = 1
number = 2

[[secrets.entries]]
key = 1
number = 3
"#;

        let config = SuiteConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[suite]
name = "file-test"
description = "File test"
version = "1.0"

[run]
demos = ["rename"]
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = SuiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.suite.name, "file-test");
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let err = SuiteConfig::from_toml_str("not toml at all [").unwrap_err();
        assert!(matches!(err, DemoError::ConfigValidationError { .. }));
    }
}
