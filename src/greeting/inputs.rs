//! Greeting inputs and the sources they are read from
//!
//! Inputs arrive from up to three layers: a JSON object on stdin, the
//! `RIT_INPUT_*` environment variables and a TOML defaults file. Each layer
//! produces a [`PartialInputs`]; layers are merged with [`PartialInputs::or`]
//! and resolved once into [`GreetingInputs`]. Nothing here ever rejects a
//! value: unset keys become empty strings and unrecognized booleans are false.

use std::io::Read;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable holding the free-text input
pub const ENV_TEXT: &str = "RIT_INPUT_TEXT";
/// Environment variable holding the boolean input
pub const ENV_BOOLEAN: &str = "RIT_INPUT_BOOLEAN";
/// Environment variable holding the list input
pub const ENV_LIST: &str = "RIT_INPUT_LIST";
/// Environment variable holding the password input
pub const ENV_PASSWORD: &str = "RIT_INPUT_PASSWORD";

const STDIN_ERROR: &str =
    "the STDIN inputs weren't informed correctly. Check the JSON used to execute the command";

/// Fully resolved inputs for a single greeting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreetingInputs {
    /// Free text, used as the name
    pub text: String,
    /// Whether the user has created formulas before
    pub flag: bool,
    /// List selection, used as the automation target
    pub list: String,
    /// Secret value, may be empty
    pub secret: String,
}

/// Parse a boolean input.
///
/// Surrounding whitespace is ignored and `true` is matched ASCII
/// case-insensitively. Any other value, including `1` or `yes`, is false.
#[must_use]
pub fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

/// A boolean that may be written either as a native bool or as a string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    /// `true` / `false`
    Bool(bool),
    /// Any string, interpreted with [`parse_flag`]
    Text(String),
}

impl FlagValue {
    /// Interpret the value as a flag
    #[must_use]
    pub fn as_flag(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Text(s) => parse_flag(s),
        }
    }
}

/// Inputs from a single source; `None` means the source did not set the key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialInputs {
    /// Free text
    pub text: Option<String>,
    /// Boolean flag
    pub flag: Option<bool>,
    /// List selection
    pub list: Option<String>,
    /// Secret
    pub secret: Option<String>,
}

/// Wire shape of the stdin JSON object
#[derive(Debug, Deserialize)]
struct StdinInputs {
    #[serde(default)]
    input_text: Option<String>,
    #[serde(default)]
    input_boolean: Option<FlagValue>,
    #[serde(default)]
    input_list: Option<String>,
    #[serde(default)]
    input_password: Option<String>,
}

impl PartialInputs {
    /// Read inputs through an arbitrary variable lookup.
    ///
    /// The lookup is called with each `RIT_INPUT_*` name; returning `None`
    /// leaves that key unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            text: lookup(ENV_TEXT),
            flag: lookup(ENV_BOOLEAN).map(|v| parse_flag(&v)),
            list: lookup(ENV_LIST),
            secret: lookup(ENV_PASSWORD),
        }
    }

    /// Read inputs from the process environment.
    ///
    /// Values that are not valid UTF-8 are decoded lossily.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| {
            std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
        })
    }

    /// Read inputs from a JSON object such as the runner writes to stdin.
    ///
    /// Recognized keys are `input_text`, `input_boolean`, `input_list` and
    /// `input_password`; other keys are ignored.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: StdinInputs = serde_json::from_reader(reader).context(STDIN_ERROR)?;
        Ok(Self {
            text: raw.input_text,
            flag: raw.input_boolean.as_ref().map(FlagValue::as_flag),
            list: raw.input_list,
            secret: raw.input_password,
        })
    }

    /// Fill every key unset here from `fallback`
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            text: self.text.or(fallback.text),
            flag: self.flag.or(fallback.flag),
            list: self.list.or(fallback.list),
            secret: self.secret.or(fallback.secret),
        }
    }

    /// Names of the keys this source sets, for diagnostics
    #[must_use]
    pub fn set_keys(&self) -> Vec<&'static str> {
        [
            ("text", self.text.is_some()),
            ("boolean", self.flag.is_some()),
            ("list", self.list.is_some()),
            ("password", self.secret.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect()
    }

    /// Resolve into concrete inputs; unset strings are empty, unset flag is false
    #[must_use]
    pub fn resolve(self) -> GreetingInputs {
        GreetingInputs {
            text: self.text.unwrap_or_default(),
            flag: self.flag.unwrap_or(false),
            list: self.list.unwrap_or_default(),
            secret: self.secret.unwrap_or_default(),
        }
    }
}
