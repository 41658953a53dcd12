//! Site configuration management for `signal.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[base]`    | Site metadata (title, description, locale)     |
//! | `[build]`   | Build paths, template engine, prefix, assets   |
//! | `[extra]`   | User-defined custom fields                     |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Signal"
//! description = "A personal blog"
//! locale = "ru-RU"
//!
//! [build]
//! input = "src"
//! output = "_site"
//! path_prefix = "/signal"
//! passthrough = ["css", "assets"]
//!
//! [extra]
//! analytics_id = "UA-12345"
//! ```

mod base;
mod build;
pub mod defaults;
mod error;

// Internal imports used in this module
use base::BaseConfig;
use build::BuildConfig;
use error::ConfigError;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing signal.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Get CLI arguments reference
    pub fn get_cli(&self) -> &'static Cli {
        self.cli.unwrap()
    }

    /// Posts directory as an absolute path
    pub fn posts_dir(&self) -> PathBuf {
        self.build.input.join(&self.build.posts)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        // Determine the final root path based on command
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => {
                let base = cli
                    .root
                    .as_ref()
                    .cloned()
                    .unwrap_or_else(|| self.get_root().to_owned());
                base.join(name)
            }
            _ => cli
                .root
                .as_ref()
                .cloned()
                .unwrap_or_else(|| self.get_root().to_owned()),
        };

        self.set_root(&root);
        self.update_path_with_root(&root);

        if let Commands::Build { build_args } = &cli.command {
            if build_args.clean {
                self.build.clean = true;
            }
            Self::update_option(
                &mut self.build.path_prefix,
                build_args.path_prefix.as_ref(),
            );
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path) {
        let cli = self.get_cli();

        // Apply CLI overrides first
        Self::update_option(&mut self.build.input, cli.input.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        // Normalize root to absolute path
        let root = Self::normalize_path(root);
        self.set_root(&root);

        // Normalize config path
        self.config_path = Self::normalize_path(&root.join(&cli.config));

        // Normalize all directory paths
        self.build.input = Self::normalize_path(&root.join(&self.build.input));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
        self.build.includes = Self::normalize_path(&self.build.input.join(&self.build.includes));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self) -> Result<()> {
        if !self.config_path.exists() {
            bail!("Config file not found");
        }

        if !self.build.input.exists() {
            bail!(ConfigError::Validation(format!(
                "[build.input] directory `{}` does not exist",
                self.build.input.display()
            )));
        }

        // The `url` filter concatenates the prefix verbatim, so a trailing
        // slash would double up in every generated link.
        if self.build.path_prefix.ends_with('/') {
            bail!(ConfigError::Validation(
                "[build.path_prefix] must not end with `/`".into()
            ));
        }

        if !self.build.path_prefix.is_empty() && !self.build.path_prefix.starts_with('/') {
            bail!(ConfigError::Validation(
                "[build.path_prefix] must start with `/` or be empty".into()
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config() {
        let config = SiteConfig::from_str(
            r#"
            [base]
            title = "Signal"
            description = "Signal blog"
        "#,
        )
        .unwrap();

        assert_eq!(config.base.title, "Signal");
        assert_eq!(config.build.path_prefix, "/signal");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SiteConfig::from_str("").unwrap();
        assert_eq!(config.build.template_engine, "njk");
        assert_eq!(config.base.locale, "ru-RU");
    }

    #[test]
    fn test_extra_fields_preserved() {
        let config = SiteConfig::from_str(
            r#"
            [extra]
            analytics_id = "UA-12345"
        "#,
        )
        .unwrap();

        assert_eq!(
            config.extra.get("analytics_id").and_then(|v| v.as_str()),
            Some("UA-12345")
        );
    }

    #[test]
    fn test_unknown_section_rejected() {
        let result = SiteConfig::from_str(
            r#"
            [unknown]
            key = "value"
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_roundtrip_serialization() {
        let config = SiteConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed = SiteConfig::from_str(&serialized).unwrap();
        assert_eq!(parsed.build.path_prefix, config.build.path_prefix);
        assert_eq!(parsed.base.locale, config.base.locale);
    }
}
