use crate::app::demos::payload::PayloadDemo;
use crate::app::demos::projection::ProjectionDemo;
use crate::app::demos::rename::RenameDemo;
use crate::app::demos::secrets::{SecretsDemo, SecretsDirectDemo};
use crate::domain::ports::{ConfigProvider, Demo};
use crate::utils::error::{DemoError, Result};

/// All registered demos, in default execution order.
pub const DEMO_NAMES: [&str; 5] = [
    "projection",
    "payload",
    "rename",
    "secrets",
    "secrets-direct",
];

pub fn is_known(name: &str) -> bool {
    DEMO_NAMES.contains(&name)
}

pub fn build_demo(name: &str, config: &dyn ConfigProvider) -> Result<Box<dyn Demo>> {
    match name {
        "projection" => Ok(Box::new(ProjectionDemo)),
        "payload" => Ok(Box::new(PayloadDemo::new())),
        "rename" => Ok(Box::new(RenameDemo)),
        "secrets" => Ok(Box::new(SecretsDemo::new(
            config.secret_entries(),
            config.secret_keys(),
        ))),
        "secrets-direct" => Ok(Box::new(SecretsDirectDemo::new(
            config.secret_entries(),
            config.secret_keys(),
        ))),
        other => Err(DemoError::UnknownDemo {
            name: other.to_string(),
        }),
    }
}

pub fn build_demos(config: &dyn ConfigProvider) -> Result<Vec<Box<dyn Demo>>> {
    let requested = config.demo_names();

    if requested.is_empty() {
        DEMO_NAMES
            .iter()
            .map(|name| build_demo(name, config))
            .collect()
    } else {
        requested
            .iter()
            .map(|name| build_demo(name, config))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SecretEntry;

    struct TestConfig {
        demos: Vec<String>,
    }

    impl ConfigProvider for TestConfig {
        fn demo_names(&self) -> &[String] {
            &self.demos
        }

        fn secret_keys(&self) -> Vec<i64> {
            vec![1]
        }

        fn secret_entries(&self) -> Vec<SecretEntry> {
            SecretEntry::defaults()
        }
    }

    #[test]
    fn test_empty_selection_builds_full_set() {
        let config = TestConfig { demos: vec![] };
        let demos = build_demos(&config).unwrap();

        let names: Vec<&str> = demos.iter().map(|d| d.name()).collect();
        assert_eq!(names, DEMO_NAMES);
    }

    #[test]
    fn test_explicit_selection_preserves_order() {
        let config = TestConfig {
            demos: vec!["rename".to_string(), "projection".to_string()],
        };
        let demos = build_demos(&config).unwrap();

        let names: Vec<&str> = demos.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["rename", "projection"]);
    }

    #[test]
    fn test_unknown_demo_is_an_error() {
        let config = TestConfig {
            demos: vec!["pipeline".to_string()],
        };

        let err = build_demos(&config).err().unwrap();
        assert!(matches!(err, DemoError::UnknownDemo { name } if name == "pipeline"));
    }
}
