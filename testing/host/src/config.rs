use crate::error::HostError;
use serde::Deserialize;

///
/// HostConfig
///
/// Limits enforced by [`HostContext`](crate::context::HostContext).
/// Configuration states constraints only; enforcement lives in the context.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    /// Longest accepted statement, in bytes.
    pub max_statement_len: usize,

    /// Most positional arguments accepted by one statement.
    pub max_positional_args: usize,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            max_statement_len: 16 * 1024,
            max_positional_args: 64,
        }
    }
}

impl HostConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config document. Missing keys keep their defaults.
    pub fn from_json(source: &str) -> Result<Self, HostError> {
        Ok(serde_json::from_str(source)?)
    }
}

///
/// TESTS
///
