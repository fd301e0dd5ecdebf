use keyguard::decoder::{DecodableFrom, Decoder};
use keyguard_asn1::{ASN1Object, BitString, Element, Integer, OctetString};
use keyguard_der::Der;

use super::algorithm::{AlgorithmIdentifier, AlgorithmParameters};
use super::error::{Error, Result};
use crate::pkcs1::RSAPrivateKey;
use crate::private_key::{KeyAlgorithm, PrivateKeyExt};
use crate::sec1::{ECPrivateKey, NamedCurve};

/*
RFC 5958 - Asymmetric Key Packages

OneAsymmetricKey ::= SEQUENCE {
    version                   Version,
    privateKeyAlgorithm       PrivateKeyAlgorithmIdentifier,
    privateKey                PrivateKey,
    attributes            [0] Attributes OPTIONAL,
    ...,
    [[2: publicKey        [1] PublicKey OPTIONAL ]],
    ...
}

PrivateKeyInfo ::= OneAsymmetricKey

Version ::= INTEGER { v1(0), v2(1) } (v1, ..., v2)

PrivateKey ::= OCTET STRING

PublicKey ::= BIT STRING

Attributes ::= SET OF Attribute

RFC 8410
CurvePrivateKey ::= OCTET STRING
*/

/// PKCS#8 OneAsymmetricKey version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    /// Version 1 (no public key)
    V1 = 0,
    /// Version 2 (with public key)
    V2 = 1,
}

impl From<Version> for i64 {
    fn from(v: Version) -> Self {
        v as i64
    }
}

impl TryFrom<i64> for Version {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Version::V1),
            1 => Ok(Version::V2),
            _ => Err(Error::InvalidVersion(value)),
        }
    }
}

/// Raw key of the RFC 8410 curves (Ed25519, X25519, Ed448, X448).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurvePrivateKey {
    algorithm: KeyAlgorithm,
    key: OctetString,
}

impl CurvePrivateKey {
    /// Expected key length in bytes, `None` for algorithms that are not RFC 8410 curves.
    pub fn expected_len(algorithm: KeyAlgorithm) -> Option<usize> {
        match algorithm {
            KeyAlgorithm::Ed25519 | KeyAlgorithm::X25519 => Some(32),
            KeyAlgorithm::Ed448 => Some(57),
            KeyAlgorithm::X448 => Some(56),
            _ => None,
        }
    }

    pub fn algorithm(&self) -> KeyAlgorithm {
        self.algorithm
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.key.as_bytes()
    }

    fn decode(algorithm: KeyAlgorithm, element: &Element) -> Result<Self> {
        let Element::OctetString(key) = element else {
            return Err(Error::ExpectedOctetString {
                field: "CurvePrivateKey",
            });
        };
        let expected = Self::expected_len(algorithm).unwrap_or_default();
        if key.len() != expected {
            return Err(Error::InvalidCurveKeyLength {
                algorithm,
                expected,
                actual: key.len(),
            });
        }
        Ok(CurvePrivateKey {
            algorithm,
            key: key.clone(),
        })
    }
}

/// The algorithm-specific structure inside the privateKey OCTET STRING.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InnerKey {
    Rsa(RSAPrivateKey),
    Ec(ECPrivateKey),
    Curve(CurvePrivateKey),
    /// DSA private exponent `x`
    Dsa(Integer),
    /// Unrecognized algorithm; the bytes are not interpreted.
    Opaque,
}

/// OneAsymmetricKey (PKCS#8 v2)
///
/// When publicKey is present, version MUST be v2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneAsymmetricKey {
    /// Version (v1 or v2)
    pub version: Version,
    /// Private key algorithm identifier
    pub private_key_algorithm: AlgorithmIdentifier,
    /// Private key bytes (algorithm-specific format)
    pub private_key: OctetString,
    /// Decoded form of `private_key`
    pub inner: InnerKey,
    /// Optional attributes [0], left undecoded
    pub attributes: Option<Element>,
    /// Optional public key [1] (only in v2)
    pub public_key: Option<BitString>,
}

/// PrivateKeyInfo (PKCS#8 v1 compatibility)
pub type PrivateKeyInfo = OneAsymmetricKey;

impl OneAsymmetricKey {
    /// Named curve from the algorithm parameters or, failing that, the inner EC key.
    pub fn curve(&self) -> Option<NamedCurve> {
        let outer = match &self.private_key_algorithm.parameters {
            Some(AlgorithmParameters::ObjectIdentifier(oid)) => NamedCurve::try_from(oid).ok(),
            _ => None,
        };
        outer.or(match &self.inner {
            InnerKey::Ec(key) => key.curve(),
            _ => None,
        })
    }

    /// Bit length of DSA prime `p` from `Dss-Parms ::= SEQUENCE { p, q, g }`.
    fn dsa_prime_bits(&self) -> Option<u64> {
        match &self.private_key_algorithm.parameters {
            Some(AlgorithmParameters::Other(Element::Sequence(params))) => match params.first() {
                Some(Element::Integer(p)) => Some(p.bits()),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Decodes `bytes` as exactly one DER element.
fn single_element(bytes: &[u8]) -> Result<Element> {
    let der: Der = bytes.decode()?;
    let asn1_obj: ASN1Object = der.decode()?;
    let mut elements = asn1_obj.into_elements();
    if elements.len() > 1 {
        return Err(Error::TrailingElements(elements.len() - 1));
    }
    elements.pop().ok_or(Error::EmptyAsn1Object)
}

fn decode_inner(algorithm: KeyAlgorithm, private_key: &OctetString) -> Result<InnerKey> {
    if algorithm == KeyAlgorithm::Unknown {
        return Ok(InnerKey::Opaque);
    }
    let element = single_element(private_key.as_bytes())?;
    match algorithm {
        KeyAlgorithm::Rsa => {
            let key: RSAPrivateKey = element.decode()?;
            Ok(InnerKey::Rsa(key))
        }
        KeyAlgorithm::Ec => {
            let key: ECPrivateKey = element.decode()?;
            Ok(InnerKey::Ec(key))
        }
        KeyAlgorithm::Dsa => match element {
            Element::Integer(x) => Ok(InnerKey::Dsa(x)),
            _ => Err(Error::ExpectedInteger {
                field: "DSA private key",
            }),
        },
        KeyAlgorithm::Ed25519 | KeyAlgorithm::X25519 | KeyAlgorithm::Ed448 | KeyAlgorithm::X448 => {
            CurvePrivateKey::decode(algorithm, &element).map(InnerKey::Curve)
        }
        KeyAlgorithm::Unknown => Ok(InnerKey::Opaque),
    }
}

impl DecodableFrom<Element> for OneAsymmetricKey {}

impl Decoder<Element, OneAsymmetricKey> for Element {
    type Error = Error;

    fn decode(&self) -> Result<OneAsymmetricKey> {
        let Element::Sequence(elements) = self else {
            return Err(Error::ExpectedSequence);
        };

        // 1. version (INTEGER)
        let version = match elements.first() {
            Some(Element::Integer(int)) => {
                Version::try_from(int.to_i64().ok_or(Error::VersionOutOfRange)?)?
            }
            Some(_) => return Err(Error::ExpectedInteger { field: "version" }),
            None => return Err(Error::MissingField("version")),
        };

        // 2. privateKeyAlgorithm (AlgorithmIdentifier)
        let private_key_algorithm: AlgorithmIdentifier = elements
            .get(1)
            .ok_or(Error::MissingField("privateKeyAlgorithm"))?
            .decode()?;

        // 3. privateKey (OCTET STRING)
        let private_key = match elements.get(2) {
            Some(Element::OctetString(octets)) => octets.clone(),
            Some(_) => {
                return Err(Error::ExpectedOctetString {
                    field: "privateKey",
                });
            }
            None => return Err(Error::MissingField("privateKey")),
        };

        // Optional: attributes [0] and publicKey [1], in that order
        let mut rest = elements.get(3..).unwrap_or_default();

        let attributes = match rest.split_first() {
            Some((
                Element::ContextSpecific {
                    slot: 0,
                    constructed: true,
                    element,
                },
                tail,
            )) => {
                rest = tail;
                Some(element.as_ref().clone())
            }
            _ => None,
        };

        let public_key = match rest.split_first() {
            Some((
                Element::ContextSpecific {
                    slot: 1,
                    constructed: false,
                    element,
                },
                tail,
            )) => {
                rest = tail;
                let Element::OctetString(raw) = element.as_ref() else {
                    return Err(Error::UnexpectedElement(element.name()));
                };
                Some(BitString::try_from(raw.as_bytes())?)
            }
            _ => None,
        };

        if let Some(extra) = rest.first() {
            return Err(Error::UnexpectedElement(extra.name()));
        }
        if public_key.is_some() && version == Version::V1 {
            return Err(Error::PublicKeyRequiresV2);
        }

        let algorithm = KeyAlgorithm::from_oid(&private_key_algorithm.algorithm);
        let inner = decode_inner(algorithm, &private_key)?;

        Ok(OneAsymmetricKey {
            version,
            private_key_algorithm,
            private_key,
            inner,
            attributes,
            public_key,
        })
    }
}

impl PrivateKeyExt for OneAsymmetricKey {
    fn key_size(&self) -> u32 {
        let bits = match &self.inner {
            InnerKey::Rsa(key) => return key.key_size(),
            InnerKey::Ec(key) => match self.curve() {
                Some(curve) => return curve.key_size(),
                None => return key.key_size(),
            },
            InnerKey::Curve(key) => match key.algorithm() {
                KeyAlgorithm::Ed25519 | KeyAlgorithm::X25519 => 256,
                KeyAlgorithm::Ed448 => 456,
                KeyAlgorithm::X448 => 448,
                _ => 0,
            },
            InnerKey::Dsa(_) => self.dsa_prime_bits().unwrap_or_default(),
            InnerKey::Opaque => 0,
        };
        u32::try_from(bits).unwrap_or(u32::MAX)
    }

    fn algorithm(&self) -> KeyAlgorithm {
        KeyAlgorithm::from_oid(&self.private_key_algorithm.algorithm)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use keyguard_asn1::ObjectIdentifier;
    use rstest::rstest;

    use super::*;
    use crate::testing::{
        EC_P256_PKCS8, ED25519_PKCS8, RSA_1024_ENCRYPTED_PKCS8, RSA_1024_PKCS8, RSA_2048_PKCS8,
        first_element,
    };

    fn int(n: i64) -> Element {
        Element::Integer(Integer::from(n))
    }

    fn algorithm(oid: &str) -> Element {
        Element::Sequence(vec![Element::ObjectIdentifier(
            ObjectIdentifier::from_str(oid).unwrap(),
        )])
    }

    fn octets(bytes: &[u8]) -> Element {
        Element::OctetString(OctetString::from(bytes))
    }

    /// OCTET STRING wrapping a DER OCTET STRING of `len` bytes.
    fn curve_key(len: u8) -> Element {
        let mut der = vec![0x04, len];
        der.extend(std::iter::repeat_n(0x2a, usize::from(len)));
        octets(&der)
    }

    fn implicit_public_key(bytes: &[u8]) -> Element {
        Element::ContextSpecific {
            slot: 1,
            constructed: false,
            element: Box::new(octets(bytes)),
        }
    }

    #[test]
    fn test_version_conversion() {
        assert_eq!(i64::from(Version::V1), 0);
        assert_eq!(i64::from(Version::V2), 1);
        assert_eq!(Version::try_from(0).unwrap(), Version::V1);
        assert_eq!(Version::try_from(1).unwrap(), Version::V2);
        assert_eq!(Version::try_from(2).unwrap_err(), Error::InvalidVersion(2));
    }

    #[rstest]
    #[case(RSA_1024_PKCS8, KeyAlgorithm::Rsa, 1024)]
    #[case(RSA_2048_PKCS8, KeyAlgorithm::Rsa, 2048)]
    #[case(EC_P256_PKCS8, KeyAlgorithm::Ec, 256)]
    #[case(ED25519_PKCS8, KeyAlgorithm::Ed25519, 256)]
    fn test_decode_from_pem(
        #[case] pem: &str,
        #[case] expected_algorithm: KeyAlgorithm,
        #[case] bits: u32,
    ) {
        let key: OneAsymmetricKey = first_element(pem).decode().unwrap();

        assert_eq!(key.version, Version::V1);
        assert_eq!(key.algorithm(), expected_algorithm);
        assert_eq!(key.key_size(), bits);
        assert!(key.attributes.is_none());
        assert!(key.public_key.is_none());
    }

    #[test]
    fn test_decode_ec_uses_outer_curve() {
        let key: OneAsymmetricKey = first_element(EC_P256_PKCS8).decode().unwrap();

        assert_eq!(key.curve(), Some(NamedCurve::Secp256r1));
        match &key.inner {
            InnerKey::Ec(ec) => {
                // OpenSSL drops [0] from the inner key when the outer one names the curve
                assert!(ec.parameters.is_none());
                assert!(ec.public_key.is_some());
            }
            other => panic!("unexpected inner key {other:?}"),
        }
    }

    #[test]
    fn test_decode_encrypted_container_is_not_one_asymmetric_key() {
        let result: Result<OneAsymmetricKey> = first_element(RSA_1024_ENCRYPTED_PKCS8).decode();

        assert_eq!(
            result.unwrap_err(),
            Error::ExpectedInteger { field: "version" }
        );
    }

    #[rstest]
    #[case(AlgorithmIdentifier::OID_ED25519, 32, KeyAlgorithm::Ed25519, 256)]
    #[case(AlgorithmIdentifier::OID_X25519, 32, KeyAlgorithm::X25519, 256)]
    #[case(AlgorithmIdentifier::OID_ED448, 57, KeyAlgorithm::Ed448, 456)]
    #[case(AlgorithmIdentifier::OID_X448, 56, KeyAlgorithm::X448, 448)]
    fn test_decode_curve_keys(
        #[case] oid: &str,
        #[case] len: u8,
        #[case] expected_algorithm: KeyAlgorithm,
        #[case] bits: u32,
    ) {
        let element = Element::Sequence(vec![int(0), algorithm(oid), curve_key(len)]);

        let key: OneAsymmetricKey = element.decode().unwrap();

        assert_eq!(key.algorithm(), expected_algorithm);
        assert_eq!(key.key_size(), bits);
        match key.inner {
            InnerKey::Curve(curve) => assert_eq!(curve.as_bytes().len(), usize::from(len)),
            other => panic!("unexpected inner key {other:?}"),
        }
    }

    #[test]
    fn test_decode_curve_key_wrong_length() {
        let element = Element::Sequence(vec![
            int(0),
            algorithm(AlgorithmIdentifier::OID_ED448),
            curve_key(32),
        ]);

        let result: Result<OneAsymmetricKey> = element.decode();

        assert_eq!(
            result.unwrap_err(),
            Error::InvalidCurveKeyLength {
                algorithm: KeyAlgorithm::Ed448,
                expected: 57,
                actual: 32,
            }
        );
    }

    #[test]
    fn test_decode_dsa() {
        // Dss-Parms with a 12-bit toy p
        let element = Element::Sequence(vec![
            int(0),
            Element::Sequence(vec![
                Element::ObjectIdentifier(
                    ObjectIdentifier::from_str(AlgorithmIdentifier::OID_DSA).unwrap(),
                ),
                Element::Sequence(vec![int(2903), int(23), int(4)]),
            ]),
            octets(&[0x02, 0x01, 0x05]),
        ]);

        let key: OneAsymmetricKey = element.decode().unwrap();

        assert_eq!(key.algorithm(), KeyAlgorithm::Dsa);
        assert_eq!(key.inner, InnerKey::Dsa(Integer::from(5)));
        assert_eq!(key.key_size(), 12);
    }

    #[test]
    fn test_decode_unknown_algorithm_is_opaque() {
        // id-alg-ml-dsa-44 is not interpreted
        let element = Element::Sequence(vec![
            int(0),
            algorithm("2.16.840.1.101.3.4.3.17"),
            octets(&[0xde, 0xad, 0xbe, 0xef]),
        ]);

        let key: OneAsymmetricKey = element.decode().unwrap();

        assert_eq!(key.algorithm(), KeyAlgorithm::Unknown);
        assert_eq!(key.inner, InnerKey::Opaque);
        assert_eq!(key.key_size(), 0);
    }

    #[test]
    fn test_decode_v2_with_attributes_and_public_key() {
        let attributes = Element::Sequence(vec![
            Element::ObjectIdentifier(ObjectIdentifier::from_str("1.2.840.113549.1.9.20").unwrap()),
            Element::Set(vec![octets(b"key")]),
        ]);
        let element = Element::Sequence(vec![
            int(1),
            algorithm(AlgorithmIdentifier::OID_ED25519),
            curve_key(32),
            Element::ContextSpecific {
                slot: 0,
                constructed: true,
                element: Box::new(attributes.clone()),
            },
            implicit_public_key(&[0x00, 0x11, 0x22]),
        ]);

        let key: OneAsymmetricKey = element.decode().unwrap();

        assert_eq!(key.version, Version::V2);
        assert_eq!(key.attributes, Some(attributes));
        assert_eq!(key.public_key, Some(BitString::new(0, vec![0x11, 0x22])));
    }

    #[rstest]
    #[case::not_sequence(int(0), Error::ExpectedSequence)]
    #[case::empty(Element::Sequence(vec![]), Error::MissingField("version"))]
    #[case::bad_version(
        Element::Sequence(vec![int(2), algorithm(AlgorithmIdentifier::OID_ED25519), curve_key(32)]),
        Error::InvalidVersion(2)
    )]
    #[case::missing_algorithm(Element::Sequence(vec![int(0)]), Error::MissingField("privateKeyAlgorithm"))]
    #[case::bad_algorithm(
        Element::Sequence(vec![int(0), int(0), curve_key(32)]),
        Error::InvalidAlgorithmIdentifier
    )]
    #[case::missing_private_key(
        Element::Sequence(vec![int(0), algorithm(AlgorithmIdentifier::OID_ED25519)]),
        Error::MissingField("privateKey")
    )]
    #[case::private_key_not_octets(
        Element::Sequence(vec![int(0), algorithm(AlgorithmIdentifier::OID_ED25519), int(7)]),
        Error::ExpectedOctetString { field: "privateKey" }
    )]
    #[case::public_key_in_v1(
        Element::Sequence(vec![
            int(0),
            algorithm(AlgorithmIdentifier::OID_ED25519),
            curve_key(32),
            implicit_public_key(&[0x00, 0x11]),
        ]),
        Error::PublicKeyRequiresV2
    )]
    #[case::trailing_element(
        Element::Sequence(vec![int(0), algorithm(AlgorithmIdentifier::OID_ED25519), curve_key(32), Element::Null]),
        Error::UnexpectedElement("NULL")
    )]
    #[case::inner_rsa_broken(
        Element::Sequence(vec![int(0), algorithm(AlgorithmIdentifier::OID_RSA_ENCRYPTION), octets(&[0x30, 0x03, 0x02, 0x01, 0x00])]),
        Error::Rsa(crate::pkcs1::Error::InvalidElementCount { expected: 9, actual: 1 })
    )]
    #[case::inner_ec_broken(
        Element::Sequence(vec![int(0), algorithm(AlgorithmIdentifier::OID_EC_PUBLIC_KEY), octets(&[0x30, 0x03, 0x02, 0x01, 0x00])]),
        Error::Ec(crate::sec1::Error::InvalidVersion(0))
    )]
    #[case::inner_trailing(
        Element::Sequence(vec![int(0), algorithm(AlgorithmIdentifier::OID_DSA), octets(&[0x02, 0x01, 0x05, 0x05, 0x00])]),
        Error::TrailingElements(1)
    )]
    fn test_decode_invalid(#[case] element: Element, #[case] expected: Error) {
        let result: Result<OneAsymmetricKey> = element.decode();

        assert_eq!(result.unwrap_err(), expected);
    }

    #[test]
    fn test_decode_inner_truncated() {
        let element = Element::Sequence(vec![
            int(0),
            algorithm(AlgorithmIdentifier::OID_ED25519),
            octets(&[0x04, 0x20, 0x00]),
        ]);

        let result: Result<OneAsymmetricKey> = element.decode();

        assert!(matches!(result, Err(Error::Der(_))));
    }
}
