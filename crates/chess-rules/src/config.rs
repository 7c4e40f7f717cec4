//! Rules configuration.
//!
//! The two behaviours that differ between the textbook rules and older
//! board programs are selectable here, and can be loaded from a TOML file:
//!
//! ```toml
//! pawn_double_step = "standard"   # or "legacy"
//! missing_king = "permissive"     # or "reject"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// How a pawn's two-square advance from its starting row is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PawnDoubleStep {
    /// Both the passed-over square and the destination must be empty.
    #[default]
    Standard,
    /// Only the destination must be empty; a piece directly in front of the
    /// pawn does not block the advance.
    Legacy,
}

/// What a legality check does when the mover has no king on the board
/// after the simulated move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingKingPolicy {
    /// The move is legal; there is no king to leave in check.
    #[default]
    Permissive,
    /// The move is illegal.
    Reject,
}

/// Selectable rule behaviours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    pub pawn_double_step: PawnDoubleStep,
    pub missing_king: MissingKingPolicy,
}

impl RulesConfig {
    /// Parses a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads a configuration file.
    ///
    /// Returns the default configuration if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file exists but cannot be read,
    /// or [`ConfigError::Parse`] if it contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml_str(&content)
        } else {
            Ok(Self::default())
        }
    }
}
