use keyguard_pkcs::{PrivateKey, PrivateKeyExt};
use tracing::debug;

use crate::block::EncodedBlock;
use crate::error::{Error, Result};
use crate::kind::KeyKind;
use crate::result::ValidationResult;

/// A block that passed the body check.
#[derive(Debug, Clone)]
pub enum Accepted {
    /// The body decoded as a PKCS#1, SEC1 or PKCS#8 private key.
    Key(PrivateKey),
    /// DSA blocks are accepted without looking at the body.
    Dsa,
}

impl Accepted {
    pub fn message(&self) -> &'static str {
        match self {
            Accepted::Key(_) => "Valid private key.",
            Accepted::Dsa => "Valid DSA private key (basic validation).",
        }
    }

    pub fn key(&self) -> Option<&PrivateKey> {
        match self {
            Accepted::Key(key) => Some(key),
            Accepted::Dsa => None,
        }
    }
}

impl From<Accepted> for ValidationResult {
    fn from(accepted: Accepted) -> Self {
        ValidationResult::valid(accepted.message())
    }
}

/// Dispatches on the block label and checks the body structure.
///
/// RSA, EC and generic blocks go through the same auto-detecting decoder,
/// so a PKCS#8 body under an `RSA PRIVATE KEY` label is still accepted.
pub fn check_block(block: &EncodedBlock) -> Result<Accepted> {
    let kind = KeyKind::try_from(block.label())?;
    if block.is_encrypted() {
        return Err(Error::Encrypted);
    }

    match kind {
        KeyKind::EncryptedPrivateKey => Err(Error::Encrypted),
        KeyKind::DsaPrivateKey => Ok(Accepted::Dsa),
        KeyKind::RsaPrivateKey | KeyKind::EcPrivateKey | KeyKind::GenericPrivateKey => {
            let key = PrivateKey::from_der(block.body())?;
            debug!(
                %kind,
                format = key.format(),
                algorithm = %key.algorithm(),
                key_size = key.key_size(),
                "decoded private key"
            );
            Ok(Accepted::Key(key))
        }
    }
}
