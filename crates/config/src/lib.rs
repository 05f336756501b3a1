//! # oru-config
//!
//! Layered configuration for oru: built-in defaults, then `oru.toml` in the project root, then
//! `ORU_*` environment variables.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

use figment::{
    Figment, Metadata, Profile, Provider,
    providers::{Env, Format, Serialized, Toml},
    value::{Dict, Map},
};
use oru_core::{TargetLibrary, constants::DEFAULT_CONTRACT_NAME};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod error;
pub use error::{ExtractConfigError, FAILED_TO_EXTRACT_CONFIG, OruConfigError};

/// oru's configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The project root. Always the directory the config was loaded for.
    #[serde(skip)]
    pub root: PathBuf,
    /// Library snippets are generated for when none is requested.
    pub library: TargetLibrary,
    /// Where scanned contracts are stored, relative to `root` unless absolute.
    pub store_dir: PathBuf,
    /// Network label given to scanned contracts by default.
    pub network: String,
    /// Display name given to scanned contracts by default.
    pub name: String,
    /// Whether highlighted code gets a line number gutter.
    pub line_numbers: bool,
}

impl Config {
    /// Name of the config file looked up in the project root.
    pub const FILE_NAME: &'static str = "oru.toml";

    /// Prefix of the environment variables that override config values.
    pub const ENV_PREFIX: &'static str = "ORU_";

    /// Loads the config for `root`.
    pub fn load_with_root(root: impl AsRef<Path>) -> Result<Self, ExtractConfigError> {
        let root = root.as_ref();
        let figment = Self::figment_with_root(root);
        trace!(metadata = ?figment.metadata().collect::<Vec<_>>(), "loading config");
        let mut config = Self::try_from(figment)?;
        config.root = root.to_path_buf();
        Ok(config)
    }

    /// Extracts a config from `provider`.
    pub fn try_from<T: Provider>(provider: T) -> Result<Self, ExtractConfigError> {
        Figment::from(provider).extract().map_err(ExtractConfigError::new)
    }

    /// Returns the figment used to load the config for `root`.
    pub fn figment_with_root(root: impl AsRef<Path>) -> Figment {
        let root = root.as_ref();
        Figment::from(Self::with_root(root))
            .merge(Toml::file(root.join(Self::FILE_NAME)))
            .merge(Env::prefixed(Self::ENV_PREFIX).ignore(&["debug"]))
    }

    /// Returns the default config for `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), ..Default::default() }
    }

    /// Returns the store directory, resolved against the root.
    pub fn store_path(&self) -> PathBuf {
        if self.store_dir.is_absolute() {
            self.store_dir.clone()
        } else {
            self.root.join(&self.store_dir)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            library: TargetLibrary::default(),
            store_dir: PathBuf::from(".oru").join("contracts"),
            network: oru_core::constants::NETWORKS[0].to_string(),
            name: DEFAULT_CONTRACT_NAME.to_string(),
            line_numbers: true,
        }
    }
}

impl Provider for Config {
    fn metadata(&self) -> Metadata {
        Metadata::named("oru defaults")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        Serialized::defaults(self).data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use similar_asserts::assert_eq;

    #[test]
    fn defaults() {
        Jail::expect_with(|jail| {
            let config = Config::load_with_root(jail.directory()).unwrap();
            assert_eq!(config, Config::with_root(jail.directory()));
            assert_eq!(config.library, TargetLibrary::Wagmi);
            assert_eq!(config.network, "Ethereum Mainnet");
            assert_eq!(config.name, "Lensed Artifact");
            assert!(config.line_numbers);
            assert_eq!(config.store_path(), jail.directory().join(".oru").join("contracts"));
            Ok(())
        });
    }

    #[test]
    fn reads_toml() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "oru.toml",
                r#"
                library = "viem"
                network = "Base"
                store_dir = "artifacts"
                line_numbers = false
            "#,
            )?;
            let config = Config::load_with_root(jail.directory()).unwrap();
            assert_eq!(config.library, TargetLibrary::Viem);
            assert_eq!(config.network, "Base");
            assert_eq!(config.name, "Lensed Artifact");
            assert!(!config.line_numbers);
            assert_eq!(config.store_path(), jail.directory().join("artifacts"));
            Ok(())
        });
    }

    #[test]
    fn env_overrides_toml() {
        Jail::expect_with(|jail| {
            jail.create_file("oru.toml", r#"library = "viem""#)?;
            jail.set_env("ORU_LIBRARY", "ethers");
            jail.set_env("ORU_NAME", "Vault");
            jail.set_env("ORU_DEBUG", "1");
            let config = Config::load_with_root(jail.directory()).unwrap();
            assert_eq!(config.library, TargetLibrary::Ethers);
            assert_eq!(config.name, "Vault");
            Ok(())
        });
    }

    #[test]
    fn absolute_store_dir() {
        Jail::expect_with(|jail| {
            let abs = jail.directory().join("elsewhere");
            jail.set_env("ORU_STORE_DIR", abs.display());
            let config = Config::load_with_root(jail.directory().join("project")).unwrap();
            assert_eq!(config.store_path(), abs);
            Ok(())
        });
    }

    #[test]
    fn labels_toml_errors() {
        Jail::expect_with(|jail| {
            jail.create_file("oru.toml", r#"library = "web3""#)?;
            let err = Config::load_with_root(jail.directory()).unwrap_err();
            let msg = err.to_string();
            assert!(msg.starts_with(FAILED_TO_EXTRACT_CONFIG), "{msg}");
            assert!(msg.contains("oru.toml error"), "{msg}");
            assert!(msg.contains("for setting `library`"), "{msg}");
            Ok(())
        });
    }
}
