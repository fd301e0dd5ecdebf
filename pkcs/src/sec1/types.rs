//! SEC1 (RFC 5915) ECPrivateKey structure

use keyguard::decoder::{DecodableFrom, Decoder};
use keyguard_asn1::{BitString, Element, ObjectIdentifier, OctetString};

use super::curve::NamedCurve;
use super::error::{Error, Result};
use crate::private_key::{KeyAlgorithm, PrivateKeyExt};

/*
RFC 5915 - Elliptic Curve Private Key Structure

ECPrivateKey ::= SEQUENCE {
    version        INTEGER { ecPrivkeyVer1(1) } (ecPrivkeyVer1),
    privateKey     OCTET STRING,
    parameters [0] ECParameters {{ NamedCurve }} OPTIONAL,
    publicKey  [1] BIT STRING OPTIONAL
}

RFC 5480
ECParameters ::= CHOICE {
    namedCurve         OBJECT IDENTIFIER
    -- implicitCurve   NULL
    -- specifiedCurve  SpecifiedECDomain
}
*/

/// SEC1 ECPrivateKey version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    /// ecPrivkeyVer1 (value 1)
    V1 = 1,
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
            1 => Ok(Version::V1),
            _ => Err(Error::InvalidVersion(value)),
        }
    }
}

impl DecodableFrom<Element> for Version {}

impl Decoder<Element, Version> for Element {
    type Error = Error;

    fn decode(&self) -> Result<Version> {
        match self {
            Element::Integer(int) => {
                let value = int.to_i64().ok_or(Error::VersionOutOfRange)?;
                Version::try_from(value)
            }
            _ => Err(Error::ExpectedInteger("version")),
        }
    }
}

/// Curve description carried in `[0]` or in a PKCS#8 AlgorithmIdentifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ECParameters {
    Named(NamedCurve),
    /// A named curve outside [`NamedCurve::ALL`].
    NamedOther(ObjectIdentifier),
    /// Explicit domain parameters, kept undecoded.
    Specified(Vec<Element>),
    /// The curve is inherited from elsewhere.
    Implicit,
}

impl ECParameters {
    pub fn named_curve(&self) -> Option<NamedCurve> {
        match self {
            ECParameters::Named(curve) => Some(*curve),
            _ => None,
        }
    }
}

impl DecodableFrom<Element> for ECParameters {}

impl Decoder<Element, ECParameters> for Element {
    type Error = Error;

    fn decode(&self) -> Result<ECParameters> {
        match self {
            Element::ObjectIdentifier(oid) => Ok(NamedCurve::try_from(oid)
                .map_or_else(|_| ECParameters::NamedOther(oid.clone()), ECParameters::Named)),
            Element::Sequence(elements) => Ok(ECParameters::Specified(elements.clone())),
            Element::Null => Ok(ECParameters::Implicit),
            other => Err(Error::InvalidParameters(other.name())),
        }
    }
}

/// SEC1 EC Private Key structure (RFC 5915)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ECPrivateKey {
    /// Version (always V1)
    pub version: Version,
    /// Private key value as octet string
    pub private_key: OctetString,
    /// EC parameters - OPTIONAL [0]
    pub parameters: Option<ECParameters>,
    /// Public key - OPTIONAL [1]
    pub public_key: Option<BitString>,
}

impl ECPrivateKey {
    /// Returns the named curve if the key carries one.
    pub fn curve(&self) -> Option<NamedCurve> {
        self.parameters.as_ref().and_then(ECParameters::named_curve)
    }
}

/// The element wrapped by an explicit `[slot]` tag.
fn explicit(element: &Element, slot: u8) -> Option<&Element> {
    match element {
        Element::ContextSpecific {
            slot: s,
            constructed: true,
            element,
        } if *s == slot => Some(element.as_ref()),
        _ => None,
    }
}

impl DecodableFrom<Element> for ECPrivateKey {}

impl Decoder<Element, ECPrivateKey> for Element {
    type Error = Error;

    fn decode(&self) -> Result<ECPrivateKey> {
        let Element::Sequence(elements) = self else {
            return Err(Error::ExpectedSequence);
        };

        let version: Version = elements
            .first()
            .ok_or(Error::MissingField("version"))?
            .decode()?;

        let private_key = match elements.get(1) {
            Some(Element::OctetString(octets)) if octets.is_empty() => {
                return Err(Error::EmptyPrivateKey);
            }
            Some(Element::OctetString(octets)) => octets.clone(),
            Some(other) => return Err(Error::ExpectedOctetString(other.name())),
            None => return Err(Error::MissingField("privateKey")),
        };

        // [0] then [1], each optional, nothing after them.
        let mut rest = elements.get(2..).unwrap_or_default();

        let parameters = match rest.split_first() {
            Some((first, tail)) => match explicit(first, 0) {
                Some(inner) => {
                    rest = tail;
                    let parameters: ECParameters = inner.decode()?;
                    Some(parameters)
                }
                None => None,
            },
            None => None,
        };

        let public_key = match rest.split_first() {
            Some((first, tail)) => match explicit(first, 1) {
                Some(Element::BitString(bits)) => {
                    rest = tail;
                    Some(bits.clone())
                }
                Some(other) => return Err(Error::ExpectedBitString(other.name())),
                None => None,
            },
            None => None,
        };

        if let Some(extra) = rest.first() {
            return Err(Error::UnexpectedElement(extra.name()));
        }

        Ok(ECPrivateKey {
            version,
            private_key,
            parameters,
            public_key,
        })
    }
}

impl PrivateKeyExt for ECPrivateKey {
    fn key_size(&self) -> u32 {
        self.curve().map_or_else(
            || u32::try_from(self.private_key.len() * 8).unwrap_or(u32::MAX),
            |curve| curve.key_size(),
        )
    }

    fn algorithm(&self) -> KeyAlgorithm {
        KeyAlgorithm::Ec
    }
}
