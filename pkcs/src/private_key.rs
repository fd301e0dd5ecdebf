//! Unified private key type supporting multiple formats.
//!
//! [`PrivateKey`] represents a private key in any of:
//! - PKCS#1 (RSA keys only)
//! - SEC1 (EC keys only)
//! - PKCS#8 (generic format for any key type)
//!
//! ```no_run
//! use keyguard_pkcs::{PrivateKey, PrivateKeyExt};
//!
//! # let der: Vec<u8> = Vec::new();
//! let key = PrivateKey::from_der(&der).unwrap();
//! println!("Algorithm: {}", key.algorithm());
//! println!("Key size: {} bits", key.key_size());
//! ```

use keyguard::decoder::{DecodableFrom, Decoder};
use keyguard_asn1::{ASN1Object, Element, ObjectIdentifier};
use keyguard_der::Der;

use crate::error::{Error, Result};
use crate::pkcs1::RSAPrivateKey;
use crate::pkcs8::{AlgorithmIdentifier, OneAsymmetricKey};
use crate::sec1::ECPrivateKey;

/// Key algorithm type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAlgorithm {
    Rsa,
    /// Elliptic Curve (ECDSA/ECDH)
    Ec,
    Dsa,
    Ed25519,
    X25519,
    Ed448,
    X448,
    /// Unknown or unsupported algorithm
    Unknown,
}

impl KeyAlgorithm {
    const KNOWN: [KeyAlgorithm; 7] = [
        KeyAlgorithm::Rsa,
        KeyAlgorithm::Ec,
        KeyAlgorithm::Dsa,
        KeyAlgorithm::Ed25519,
        KeyAlgorithm::X25519,
        KeyAlgorithm::Ed448,
        KeyAlgorithm::X448,
    ];

    /// Returns the OID string for this algorithm, if known.
    pub fn oid(&self) -> Option<&'static str> {
        match self {
            KeyAlgorithm::Rsa => Some(AlgorithmIdentifier::OID_RSA_ENCRYPTION),
            KeyAlgorithm::Ec => Some(AlgorithmIdentifier::OID_EC_PUBLIC_KEY),
            KeyAlgorithm::Dsa => Some(AlgorithmIdentifier::OID_DSA),
            KeyAlgorithm::Ed25519 => Some(AlgorithmIdentifier::OID_ED25519),
            KeyAlgorithm::X25519 => Some(AlgorithmIdentifier::OID_X25519),
            KeyAlgorithm::Ed448 => Some(AlgorithmIdentifier::OID_ED448),
            KeyAlgorithm::X448 => Some(AlgorithmIdentifier::OID_X448),
            KeyAlgorithm::Unknown => None,
        }
    }

    /// Maps an AlgorithmIdentifier OID to a known algorithm.
    pub fn from_oid(oid: &ObjectIdentifier) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|algorithm| algorithm.oid().is_some_and(|known| *oid == known))
            .unwrap_or(KeyAlgorithm::Unknown)
    }

    /// Returns a human-readable name for this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            KeyAlgorithm::Rsa => "RSA",
            KeyAlgorithm::Ec => "EC",
            KeyAlgorithm::Dsa => "DSA",
            KeyAlgorithm::Ed25519 => "Ed25519",
            KeyAlgorithm::X25519 => "X25519",
            KeyAlgorithm::Ed448 => "Ed448",
            KeyAlgorithm::X448 => "X448",
            KeyAlgorithm::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Properties common to every private key format.
pub trait PrivateKeyExt {
    /// Returns the key size in bits.
    ///
    /// For RSA keys, this is the modulus bit length.
    /// For EC keys, this is determined by the curve (e.g., 256 for P-256).
    /// Ed25519 and X25519 report 256, Ed448 456 and X448 448.
    ///
    /// Returns 0 if the key size cannot be determined.
    fn key_size(&self) -> u32;

    /// Returns the algorithm type of this key.
    fn algorithm(&self) -> KeyAlgorithm;
}

/// A private key in one of the supported formats.
#[derive(Debug, Clone)]
pub enum PrivateKey {
    /// PKCS#1 RSA private key (RSA keys only)
    Pkcs1(RSAPrivateKey),
    /// SEC1 EC private key (elliptic curve keys only)
    Sec1(ECPrivateKey),
    /// PKCS#8 private key (generic format)
    Pkcs8(OneAsymmetricKey),
}

impl PrivateKey {
    /// Attempt to parse a private key from DER-encoded bytes.
    ///
    /// This method tries each format in order:
    /// 1. PKCS#8 (most common for modern keys)
    /// 2. SEC1 (EC keys)
    /// 3. PKCS#1 (RSA keys)
    ///
    /// The input must hold exactly one top-level element.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is not DER, carries trailing elements,
    /// or cannot be parsed as any known format.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        let der: Der = bytes.decode()?;
        let asn1_obj: ASN1Object = der.decode()?;

        match asn1_obj.elements() {
            [] => Err(Error::EmptyAsn1Object),
            [element] => element.decode(),
            [_, rest @ ..] => Err(Error::TrailingElements(rest.len())),
        }
    }

    /// Returns `true` if this is a PKCS#1 RSA key.
    pub fn is_pkcs1(&self) -> bool {
        matches!(self, PrivateKey::Pkcs1(_))
    }

    /// Returns `true` if this is a SEC1 EC key.
    pub fn is_sec1(&self) -> bool {
        matches!(self, PrivateKey::Sec1(_))
    }

    /// Returns `true` if this is a PKCS#8 key.
    pub fn is_pkcs8(&self) -> bool {
        matches!(self, PrivateKey::Pkcs8(_))
    }

    /// Name of the container format.
    pub fn format(&self) -> &'static str {
        match self {
            PrivateKey::Pkcs1(_) => "PKCS#1",
            PrivateKey::Sec1(_) => "SEC1",
            PrivateKey::Pkcs8(_) => "PKCS#8",
        }
    }
}

// Element -> PrivateKey decoder
impl DecodableFrom<Element> for PrivateKey {}

impl Decoder<Element, PrivateKey> for Element {
    type Error = Error;

    fn decode(&self) -> Result<PrivateKey> {
        let pkcs8_err = match Decoder::<Element, OneAsymmetricKey>::decode(self) {
            Ok(key) => return Ok(PrivateKey::Pkcs8(key)),
            Err(e) => e,
        };

        let sec1_err = match Decoder::<Element, ECPrivateKey>::decode(self) {
            Ok(key) => return Ok(PrivateKey::Sec1(key)),
            Err(e) => e,
        };

        let pkcs1_err = match Decoder::<Element, RSAPrivateKey>::decode(self) {
            Ok(key) => return Ok(PrivateKey::Pkcs1(key)),
            Err(e) => e,
        };

        Err(Error::UnrecognizedPrivateKeyFormat {
            pkcs8: Box::new(pkcs8_err),
            sec1: Box::new(sec1_err),
            pkcs1: Box::new(pkcs1_err),
        })
    }
}

impl From<RSAPrivateKey> for PrivateKey {
    fn from(key: RSAPrivateKey) -> Self {
        PrivateKey::Pkcs1(key)
    }
}

impl From<ECPrivateKey> for PrivateKey {
    fn from(key: ECPrivateKey) -> Self {
        PrivateKey::Sec1(key)
    }
}

impl From<OneAsymmetricKey> for PrivateKey {
    fn from(key: OneAsymmetricKey) -> Self {
        PrivateKey::Pkcs8(key)
    }
}

impl PrivateKeyExt for PrivateKey {
    fn key_size(&self) -> u32 {
        match self {
            PrivateKey::Pkcs1(key) => key.key_size(),
            PrivateKey::Sec1(key) => key.key_size(),
            PrivateKey::Pkcs8(key) => key.key_size(),
        }
    }

    fn algorithm(&self) -> KeyAlgorithm {
        match self {
            PrivateKey::Pkcs1(key) => key.algorithm(),
            PrivateKey::Sec1(key) => key.algorithm(),
            PrivateKey::Pkcs8(key) => key.algorithm(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;
    use crate::testing::{
        DSA_TRADITIONAL, EC_P256_PKCS8, EC_P256_SEC1, EC_P384_SEC1, ED25519_PKCS8,
        RSA_1024_ENCRYPTED_PKCS8, RSA_1024_PKCS1, RSA_1024_PKCS8, RSA_2048_PKCS1, RSA_2048_PKCS8,
        der_bytes,
    };

    #[rstest]
    #[case(RSA_1024_PKCS1, "PKCS#1", KeyAlgorithm::Rsa, 1024)]
    #[case(RSA_2048_PKCS1, "PKCS#1", KeyAlgorithm::Rsa, 2048)]
    #[case(RSA_1024_PKCS8, "PKCS#8", KeyAlgorithm::Rsa, 1024)]
    #[case(RSA_2048_PKCS8, "PKCS#8", KeyAlgorithm::Rsa, 2048)]
    #[case(EC_P256_SEC1, "SEC1", KeyAlgorithm::Ec, 256)]
    #[case(EC_P384_SEC1, "SEC1", KeyAlgorithm::Ec, 384)]
    #[case(EC_P256_PKCS8, "PKCS#8", KeyAlgorithm::Ec, 256)]
    #[case(ED25519_PKCS8, "PKCS#8", KeyAlgorithm::Ed25519, 256)]
    fn test_from_der_detects_format(
        #[case] pem: &str,
        #[case] format: &str,
        #[case] algorithm: KeyAlgorithm,
        #[case] bits: u32,
    ) {
        let key = PrivateKey::from_der(&der_bytes(pem)).unwrap();

        assert_eq!(key.format(), format);
        assert_eq!(key.algorithm(), algorithm);
        assert_eq!(key.key_size(), bits);
    }

    #[rstest]
    #[case::dsa_traditional(DSA_TRADITIONAL)]
    #[case::encrypted_pkcs8(RSA_1024_ENCRYPTED_PKCS8)]
    fn test_from_der_unrecognized(#[case] pem: &str) {
        let result = PrivateKey::from_der(&der_bytes(pem));

        assert!(matches!(
            result,
            Err(Error::UnrecognizedPrivateKeyFormat { .. })
        ));
    }

    #[test]
    fn test_from_der_dsa_reports_each_attempt() {
        let err = PrivateKey::from_der(&der_bytes(DSA_TRADITIONAL)).unwrap_err();

        let Error::UnrecognizedPrivateKeyFormat { pkcs8, sec1, pkcs1 } = err else {
            panic!("unexpected error {err:?}");
        };
        assert_eq!(*pkcs8, crate::pkcs8::Error::InvalidAlgorithmIdentifier);
        assert_eq!(*sec1, crate::sec1::Error::InvalidVersion(0));
        assert_eq!(
            *pkcs1,
            crate::pkcs1::Error::InvalidElementCount {
                expected: 9,
                actual: 6
            }
        );
    }

    #[test]
    fn test_from_der_trailing_element() {
        let mut bytes = der_bytes(RSA_1024_PKCS1);
        bytes.extend_from_slice(&[0x05, 0x00]);

        let result = PrivateKey::from_der(&bytes);

        assert!(matches!(result, Err(Error::TrailingElements(1))));
    }

    #[rstest]
    #[case::empty(&[])]
    #[case::truncated(&[0x30, 0x82, 0x02])]
    #[case::indefinite(&[0x30, 0x80, 0x00, 0x00])]
    fn test_from_der_not_der(#[case] bytes: &[u8]) {
        let result = PrivateKey::from_der(bytes);

        assert!(matches!(result, Err(Error::Der(_))));
    }

    #[test]
    fn test_from_der_truncated_key() {
        let bytes = der_bytes(RSA_2048_PKCS1);

        let result = PrivateKey::from_der(&bytes[..bytes.len() - 10]);

        assert!(result.is_err());
    }

    #[rstest]
    #[case("1.2.840.113549.1.1.1", KeyAlgorithm::Rsa)]
    #[case("1.2.840.10045.2.1", KeyAlgorithm::Ec)]
    #[case("1.2.840.10040.4.1", KeyAlgorithm::Dsa)]
    #[case("1.3.101.112", KeyAlgorithm::Ed25519)]
    #[case("1.3.101.113", KeyAlgorithm::Ed448)]
    #[case("1.2.840.113549.1.1.11", KeyAlgorithm::Unknown)]
    fn test_key_algorithm_from_oid(#[case] oid: &str, #[case] expected: KeyAlgorithm) {
        let oid = ObjectIdentifier::from_str(oid).unwrap();

        assert_eq!(KeyAlgorithm::from_oid(&oid), expected);
    }
}
