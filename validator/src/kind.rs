use std::fmt::{Display, Formatter};

use keyguard_pem::Label;

use crate::error::Error;

/// Envelope labels the validator accepts as private keys.
///
/// Both the envelope matcher and the body parser derive everything they
/// need from this enumeration, so the set of accepted boundaries and the
/// set of dispatchable blocks cannot diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// `PRIVATE KEY` (PKCS#8)
    GenericPrivateKey,
    /// `RSA PRIVATE KEY` (PKCS#1)
    RsaPrivateKey,
    /// `EC PRIVATE KEY` (SEC1)
    EcPrivateKey,
    /// `DSA PRIVATE KEY` (OpenSSL traditional)
    DsaPrivateKey,
    /// `ENCRYPTED PRIVATE KEY` (PKCS#8 EncryptedPrivateKeyInfo)
    EncryptedPrivateKey,
}

impl KeyKind {
    pub const ALL: [KeyKind; 5] = [
        KeyKind::GenericPrivateKey,
        KeyKind::RsaPrivateKey,
        KeyKind::EcPrivateKey,
        KeyKind::DsaPrivateKey,
        KeyKind::EncryptedPrivateKey,
    ];

    pub fn label(&self) -> Label {
        match self {
            KeyKind::GenericPrivateKey => Label::PrivateKey,
            KeyKind::RsaPrivateKey => Label::RSAPrivateKey,
            KeyKind::EcPrivateKey => Label::ECPrivateKey,
            KeyKind::DsaPrivateKey => Label::DSAPrivateKey,
            KeyKind::EncryptedPrivateKey => Label::EncryptedPrivateKey,
        }
    }

    /// `-----BEGIN <label>-----`
    pub fn header(&self) -> String {
        self.label().begin_boundary()
    }

    /// `-----END <label>-----`
    pub fn footer(&self) -> String {
        self.label().end_boundary()
    }

    pub(crate) fn from_header(line: &str) -> Option<KeyKind> {
        Self::ALL.into_iter().find(|kind| kind.header() == line)
    }

    pub(crate) fn from_footer(line: &str) -> Option<KeyKind> {
        Self::ALL.into_iter().find(|kind| kind.footer() == line)
    }
}

impl Display for KeyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<&Label> for KeyKind {
    type Error = Error;

    fn try_from(label: &Label) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label() == *label)
            .ok_or_else(|| Error::UnsupportedKeyType(label.to_string()))
    }
}
