use keyguard::decoder::{DecodableFrom, Decoder};
use keyguard_asn1::{Element, Integer};

use super::error::{Error, Result};
use crate::private_key::{KeyAlgorithm, PrivateKeyExt};

/*
RFC 8017 - PKCS #1: RSA Cryptography Specifications

RSAPrivateKey ::= SEQUENCE {
    version           Version,
    modulus           INTEGER,  -- n
    publicExponent    INTEGER,  -- e
    privateExponent   INTEGER,  -- d
    prime1            INTEGER,  -- p
    prime2            INTEGER,  -- q
    exponent1         INTEGER,  -- d mod (p-1)
    exponent2         INTEGER,  -- d mod (q-1)
    coefficient       INTEGER,  -- (inverse of q) mod p
    otherPrimeInfos   OtherPrimeInfos OPTIONAL
}

Version ::= INTEGER { two-prime(0), multi(1) }
    (CONSTRAINED BY {-- version must be multi if otherPrimeInfos present --})

OtherPrimeInfos ::= SEQUENCE SIZE(1..MAX) OF OtherPrimeInfo

OtherPrimeInfo ::= SEQUENCE {
    prime             INTEGER,  -- ri
    exponent          INTEGER,  -- di
    coefficient       INTEGER   -- ti
}
*/

/// PKCS#1 RSAPrivateKey version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    TwoPrime = 0,
    Multi = 1,
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
            0 => Ok(Version::TwoPrime),
            1 => Ok(Version::Multi),
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
            _ => Err(Error::ExpectedInteger { field: "version" }),
        }
    }
}

/// One additional prime of a multi-prime key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherPrimeInfo {
    pub prime: Integer,
    pub exponent: Integer,
    pub coefficient: Integer,
}

impl DecodableFrom<Element> for OtherPrimeInfo {}

impl Decoder<Element, OtherPrimeInfo> for Element {
    type Error = Error;

    fn decode(&self) -> Result<OtherPrimeInfo> {
        match self {
            Element::Sequence(elements) => match elements.as_slice() {
                [
                    Element::Integer(prime),
                    Element::Integer(exponent),
                    Element::Integer(coefficient),
                ] => Ok(OtherPrimeInfo {
                    prime: prime.clone(),
                    exponent: exponent.clone(),
                    coefficient: coefficient.clone(),
                }),
                _ => Err(Error::InvalidOtherPrimeInfo),
            },
            _ => Err(Error::InvalidOtherPrimeInfo),
        }
    }
}

/// PKCS#1 RSA Private Key structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RSAPrivateKey {
    pub version: Version,
    pub modulus: Integer,          // n
    pub public_exponent: Integer,  // e
    pub private_exponent: Integer, // d
    pub prime1: Integer,           // p
    pub prime2: Integer,           // q
    pub exponent1: Integer,        // d mod (p-1)
    pub exponent2: Integer,        // d mod (q-1)
    pub coefficient: Integer,      // (inverse of q) mod p
    /// Present only for `Version::Multi`.
    pub other_prime_infos: Vec<OtherPrimeInfo>,
}

impl DecodableFrom<Element> for RSAPrivateKey {}

impl Decoder<Element, RSAPrivateKey> for Element {
    type Error = Error;

    fn decode(&self) -> Result<RSAPrivateKey> {
        let Element::Sequence(elements) = self else {
            return Err(Error::ExpectedSequence);
        };

        let version: Version = elements
            .first()
            .ok_or(Error::MissingField("version"))?
            .decode()?;

        let expected = match version {
            Version::TwoPrime => 9,
            Version::Multi => 10,
        };
        if elements.len() != expected {
            return Err(Error::InvalidElementCount {
                expected,
                actual: elements.len(),
            });
        }

        let get_integer = |idx: usize, field: &'static str| -> Result<Integer> {
            match &elements[idx] {
                Element::Integer(int) => Ok(int.clone()),
                _ => Err(Error::ExpectedInteger { field }),
            }
        };

        let other_prime_infos = match elements.get(9) {
            Some(Element::Sequence(infos)) if infos.is_empty() => {
                return Err(Error::EmptyOtherPrimeInfos);
            }
            Some(Element::Sequence(infos)) => infos
                .iter()
                .map(Decoder::<Element, OtherPrimeInfo>::decode)
                .collect::<Result<Vec<OtherPrimeInfo>>>()?,
            Some(_) => return Err(Error::InvalidOtherPrimeInfo),
            None => Vec::new(),
        };

        Ok(RSAPrivateKey {
            version,
            modulus: get_integer(1, "modulus")?,
            public_exponent: get_integer(2, "publicExponent")?,
            private_exponent: get_integer(3, "privateExponent")?,
            prime1: get_integer(4, "prime1")?,
            prime2: get_integer(5, "prime2")?,
            exponent1: get_integer(6, "exponent1")?,
            exponent2: get_integer(7, "exponent2")?,
            coefficient: get_integer(8, "coefficient")?,
            other_prime_infos,
        })
    }
}

impl PrivateKeyExt for RSAPrivateKey {
    fn key_size(&self) -> u32 {
        u32::try_from(self.modulus.bits()).unwrap_or(u32::MAX)
    }

    fn algorithm(&self) -> KeyAlgorithm {
        KeyAlgorithm::Rsa
    }
}
