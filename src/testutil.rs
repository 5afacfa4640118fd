//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use crate::greeting::GreetingInputs;
use regex::Regex;

/// Create `GreetingInputs` with text `Hello` and list `world`.
#[must_use]
pub fn make_test_inputs(flag: bool, secret: &str) -> GreetingInputs {
    GreetingInputs {
        text: "Hello".to_string(),
        flag,
        list: "world".to_string(),
        secret: secret.to_string(),
    }
}

/// Remove ANSI SGR escape sequences so styled output can be compared as text
#[must_use]
pub fn strip_ansi(s: &str) -> String {
    let re = Regex::new(r"\x1b\[[0-9;]*m").unwrap();
    re.replace_all(s, "").into_owned()
}
