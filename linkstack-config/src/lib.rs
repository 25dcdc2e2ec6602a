//! # Linkstack Configuration
//!
//! Layered configuration for the linkstack demonstration program.
//!
//! ## Features
//! - **Defaults**: a bounded stack of one-`char` elements
//! - **Validation**: runtime validation of every loaded value
//! - **Environment Awareness**: `LINKSTACK_*` overrides on top of files

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod error;
mod stack;
mod telemetry;
mod validation;

pub use error::ConfigError;
pub use stack::{StackConfig, MAX_ELEMENT_SIZE};
pub use telemetry::TelemetryConfig;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/linkstack.yaml";

const ENV_PREFIX: &str = "LINKSTACK_";

/// Top‑level configuration container.
#[derive(Debug, Serialize, Deserialize, Validate, Default, Clone, PartialEq, Eq)]
pub struct LinkstackConfig {
    /// Shape of the stack.
    #[serde(default)]
    #[validate(nested)]
    pub stack: StackConfig,

    /// Logging and metrics.
    #[serde(default)]
    #[validate(nested)]
    pub telemetry: TelemetryConfig,
}

impl LinkstackConfig {
    /// Load configuration from the default file and environment.
    ///
    /// Hierarchy:
    /// 1. Default Values
    /// 2. `config/linkstack.yaml`. If missing, defaults are used.
    /// 3. `LINKSTACK_*` environment variables (`__` separates nested keys).
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Self::defaults();

        if Path::new(DEFAULT_CONFIG_PATH).exists() {
            figment = figment.merge(Yaml::file(DEFAULT_CONFIG_PATH));
        }

        Self::extract(figment)
    }

    /// Load configuration from a specific path, still honouring the environment.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        Self::extract(Self::defaults().merge(Yaml::file(path)))
    }

    fn defaults() -> Figment {
        Figment::from(Serialized::defaults(LinkstackConfig::default()))
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn full_config_validation() {
        let config = LinkstackConfig::default();
        config.validate().expect("Default config should validate");
    }

    #[test]
    fn environment_override() {
        Jail::expect_with(|jail| {
            jail.set_env("LINKSTACK_STACK__MAX_ELEMENTS", "16");
            let config = LinkstackConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.stack.max_elements, 16);
            assert_eq!(config.stack.element_size, 4);
            Ok(())
        });
    }

    #[test]
    fn file_values_layer_over_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "linkstack.yaml",
                "stack:\n  max_elements: 3\ntelemetry:\n  log_level: debug\n",
            )?;
            let config = LinkstackConfig::load_from_path("linkstack.yaml")
                .map_err(|e| e.to_string())?;
            assert_eq!(config.stack.max_elements, 3);
            assert_eq!(config.stack.element_size, 4);
            assert_eq!(config.telemetry.log_level, "debug");
            assert!(!config.telemetry.metrics);
            Ok(())
        });
    }

    #[test]
    fn environment_wins_over_file() {
        Jail::expect_with(|jail| {
            jail.create_file("linkstack.yaml", "stack:\n  max_elements: 3\n")?;
            jail.set_env("LINKSTACK_STACK__MAX_ELEMENTS", "0");
            let config = LinkstackConfig::load_from_path("linkstack.yaml")
                .map_err(|e| e.to_string())?;
            assert!(!config.stack.is_bounded());
            Ok(())
        });
    }

    #[test]
    fn missing_file_is_reported() {
        let err = LinkstackConfig::load_from_path("does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn invalid_values_fail_validation() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "linkstack.yaml",
                "stack:\n  element_size: 0\ntelemetry:\n  log_level: loud\n",
            )?;
            let err = LinkstackConfig::load_from_path("linkstack.yaml").unwrap_err();
            let message = err.to_string();
            assert!(matches!(err, ConfigError::Validation(_)));
            assert!(message.contains("stack.element_size"));
            assert!(message.contains("invalid_log_level"));
            Ok(())
        });
    }
}
