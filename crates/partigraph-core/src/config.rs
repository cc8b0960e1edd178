//! Layered configuration for graph construction and traversal defaults.
//!
//! Values are resolved in order, later layers overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. A TOML file (optional)
//! 3. Environment variables prefixed with `PARTIGRAPH_`, using `__` to
//!    separate nested keys (e.g. `PARTIGRAPH_TRAVERSAL__MAX_DEPTH=5`)
//!
//! # Example
//!
//! ```rust
//! use partigraph_core::GraphConfig;
//!
//! let config = GraphConfig::from_toml_str(
//!     r#"
//!     vertex_capacity = 1024
//!
//!     [traversal]
//!     max_depth = 6
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.vertex_capacity, 1024);
//! assert_eq!(config.traversal.max_depth, 6);
//! assert_eq!(config.traversal.limit, 100);
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::TraversalConfig;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "PARTIGRAPH_";

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A provider failed to load or the merged values did not deserialize.
    #[error("Failed to load configuration: {0}")]
    Load(#[from] figment::Error),

    /// The configuration could not be rendered as TOML.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value is out of its accepted range.
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue {
        /// Dotted key of the offending value.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Default traversal bounds used by [`TraversalConfig`] built from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalDefaults {
    /// Maximum number of hops for bounded traversals.
    pub max_depth: usize,
    /// Maximum number of steps returned by bounded traversals.
    pub limit: usize,
}

impl Default for TraversalDefaults {
    fn default() -> Self {
        Self {
            max_depth: 3,
            limit: 100,
        }
    }
}

/// Top-level graph configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Number of vertices to pre-allocate adjacency storage for.
    pub vertex_capacity: usize,
    /// Bounded traversal defaults.
    pub traversal: TraversalDefaults,
}

impl GraphConfig {
    /// Builds the layered figment: defaults, optional TOML file, environment.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads configuration from a TOML file with environment overrides.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::extract(&Self::figment(Some(path.as_ref())))
    }

    /// Loads configuration from defaults and environment variables only.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::extract(&Self::figment(None))
    }

    /// Parses configuration from a TOML string over the defaults.
    ///
    /// Environment variables are not consulted.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let figment =
            Figment::from(Serialized::defaults(Self::default())).merge(Toml::string(toml));
        Self::extract(&figment)
    }

    /// Renders the configuration as a TOML document.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Checks that every value is within its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.traversal.max_depth == 0 {
            return Err(ConfigError::InvalidValue {
                key: "traversal.max_depth".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.traversal.limit == 0 {
            return Err(ConfigError::InvalidValue {
                key: "traversal.limit".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Returns a child-direction [`TraversalConfig`] using the configured bounds.
    #[must_use]
    pub fn traversal_config(&self) -> TraversalConfig {
        TraversalConfig::new(self.traversal.max_depth, self.traversal.limit)
    }

    fn extract(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        tracing::debug!(
            vertex_capacity = config.vertex_capacity,
            max_depth = config.traversal.max_depth,
            limit = config.traversal.limit,
            "Loaded graph configuration"
        );
        Ok(config)
    }
}
