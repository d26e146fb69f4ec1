use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::path::Path;

/// Constraints applied to the project form.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    pub description_min_length: usize,
    pub people_min: u32,
    pub people_max: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            description_min_length: 5,
            people_min: 1,
            people_max: 5,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub show_description: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_description: true,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub form: FormConfig,
    pub display: DisplayConfig,
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(file_name).wrap_err_with(|| {
            format!("cannot load configuration file {}", file_name.display())
        })?;
        Self::parse(&content)
            .wrap_err_with(|| format!("cannot parse configuration file {}", file_name.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        eyre::ensure!(
            config.form.people_min >= 1,
            "form.people_min must be at least 1, got {}",
            config.form.people_min
        );
        eyre::ensure!(
            config.form.people_min <= config.form.people_max,
            "form.people_min ({}) is larger than form.people_max ({})",
            config.form.people_min,
            config.form.people_max
        );
        Ok(config)
    }
}

#[test]
fn test_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.form.description_min_length, 5);
    assert_eq!((config.form.people_min, config.form.people_max), (1, 5));
    assert!(config.display.show_description);
}

#[test]
fn test_partial_override() {
    let config = Config::parse(
        r#"
        [form]
        people_max = 8

        [display]
        show_description = false
        "#,
    )
    .unwrap();
    assert_eq!(config.form.people_max, 8);
    assert_eq!(config.form.people_min, 1);
    assert!(!config.display.show_description);
}

#[test]
fn test_rejects_bad_configuration() {
    assert!(Config::parse("[form]\npeople_min = 6\npeople_max = 2\n").is_err());
    assert!(Config::parse("[form]\nunknown = 1\n").is_err());
    assert!(Config::parse("[form]\npeople_min = 0\n").is_err());
}
