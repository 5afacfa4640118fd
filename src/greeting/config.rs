//! Defaults file parser
//!
//! Parses an optional TOML file that supplies fallback values for inputs the
//! caller did not set:
//!
//! ```toml
//! [defaults]
//! text = "Dennis"
//! boolean = true
//! list = "everything"
//! password = ""
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::inputs::{FlagValue, PartialInputs};

/// Fallback input values
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputDefaults {
    /// Default free text
    #[serde(default)]
    pub text: Option<String>,
    /// Default flag, as a bool or a string
    #[serde(default)]
    pub boolean: Option<FlagValue>,
    /// Default list selection
    #[serde(default)]
    pub list: Option<String>,
    /// Default secret
    #[serde(default)]
    pub password: Option<String>,
}

/// Top-level defaults file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Fallback values for each input
    #[serde(default)]
    pub defaults: InputDefaults,
}

impl DefaultsConfig {
    /// Parse a defaults file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read defaults file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid defaults file: {}", path.display()))
    }

    /// Parse defaults file content from a string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse defaults TOML")
    }

    /// Convert into an input layer
    #[must_use]
    pub fn into_partial(self) -> PartialInputs {
        let d = self.defaults;
        PartialInputs {
            text: d.text,
            flag: d.boolean.as_ref().map(FlagValue::as_flag),
            list: d.list,
            secret: d.password,
        }
    }
}
