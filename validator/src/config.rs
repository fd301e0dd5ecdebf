use serde::Deserialize;

/// Default ceiling on the trimmed input, in bytes.
pub const DEFAULT_MAX_INPUT_LEN: usize = 64 * 1024;

/// Knobs for [`KeyValidator`](crate::KeyValidator).
///
/// Missing fields fall back to their defaults when deserialized, so hosts
/// can embed a partial table in their own configuration files:
///
/// ```
/// use keyguard_validator::ValidatorConfig;
///
/// let config = ValidatorConfig::default()
///     .with_max_input_len(Some(16 * 1024))
///     .with_require_matching_footer(true);
/// assert!(config.require_matching_footer);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Largest accepted input after trimming. `None` disables the check.
    pub max_input_len: Option<usize>,
    /// Reject a footer whose label differs from the header's.
    pub require_matching_footer: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        ValidatorConfig {
            max_input_len: Some(DEFAULT_MAX_INPUT_LEN),
            require_matching_footer: false,
        }
    }
}

impl ValidatorConfig {
    pub fn with_max_input_len(mut self, max_input_len: Option<usize>) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    pub fn with_require_matching_footer(mut self, require: bool) -> Self {
        self.require_matching_footer = require;
        self
    }
}
