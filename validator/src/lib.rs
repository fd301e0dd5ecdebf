//! Structural validation of PEM-encoded private keys.
//!
//! [`KeyValidator`] answers whether a piece of text is a well-formed
//! private key without using the key. It runs four stages and stops at the
//! first one that fails:
//!
//! 1. [`frame`] trims the text and splits it into lines.
//! 2. [`match_envelope`] checks the first and last line against the
//!    boundaries of every [`KeyKind`].
//! 3. [`decode_blocks`] and [`select_key_block`] decode the PEM blocks and
//!    pick the first private-key block.
//! 4. [`check_block`] dispatches on the block label and decodes the body
//!    as a PKCS#1, SEC1 or PKCS#8 structure.
//!
//! Every outcome, including malformed input, is reported as a
//! [`ValidationResult`]:
//!
//! ```
//! use keyguard_validator::{ErrorKind, validate_private_key};
//!
//! let result = validate_private_key("   ");
//! assert!(!result.is_valid());
//! assert_eq!(result.error_kind(), Some(ErrorKind::EmptyInput));
//! ```

mod block;
mod body;
mod config;
mod envelope;
pub mod error;
mod kind;
mod result;

use tracing::debug;

pub use block::{EncodedBlock, decode_blocks, select_key_block};
pub use body::{Accepted, check_block};
pub use config::{DEFAULT_MAX_INPUT_LEN, ValidatorConfig};
pub use envelope::{Envelope, frame, match_envelope};
pub use error::{Error, Result};
pub use kind::KeyKind;
pub use result::{ErrorKind, ErrorPosition, ValidationResult};

/// Validates private keys with a fixed configuration.
///
/// The validator holds no state besides its configuration and can be
/// shared across threads.
#[derive(Debug, Clone, Default)]
pub struct KeyValidator {
    config: ValidatorConfig,
}

impl KeyValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        KeyValidator { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates `input` and reports the verdict. Never fails.
    pub fn validate(&self, input: &str) -> ValidationResult {
        match self.check(input) {
            Ok(accepted) => accepted.into(),
            Err(err) => {
                debug!(
                    stage = err.stage(),
                    kind = %err.kind(),
                    cause = ?std::error::Error::source(&err).map(ToString::to_string),
                    "rejected private key: {err}"
                );
                err.into()
            }
        }
    }

    /// Runs the pipeline and returns the accepted key or the first error.
    pub fn check(&self, input: &str) -> Result<Accepted> {
        let envelope = frame(input, &self.config)?;
        let kind = match_envelope(&envelope, &self.config)?;
        debug!(%kind, lines = envelope.lines().len(), "envelope matched");

        let blocks = decode_blocks(envelope.text())?;
        let block = select_key_block(blocks)?;
        check_block(&block)
    }
}

/// Validates `input` with [`ValidatorConfig::default`].
pub fn validate_private_key(input: &str) -> ValidationResult {
    KeyValidator::default().validate(input)
}
