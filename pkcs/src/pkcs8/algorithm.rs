use keyguard::decoder::{DecodableFrom, Decoder};
use keyguard_asn1::{Element, ObjectIdentifier};

use super::error::{Error, Result};

/*
RFC 5280

AlgorithmIdentifier ::= SEQUENCE {
    algorithm   OBJECT IDENTIFIER,
    parameters  ANY DEFINED BY algorithm OPTIONAL
}
*/

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmIdentifier {
    pub algorithm: ObjectIdentifier,
    pub parameters: Option<AlgorithmParameters>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmParameters {
    Null,
    /// e.g. the named curve of an id-ecPublicKey key
    ObjectIdentifier(ObjectIdentifier),
    Other(Element),
}

impl AlgorithmIdentifier {
    pub const OID_RSA_ENCRYPTION: &'static str = "1.2.840.113549.1.1.1";
    pub const OID_EC_PUBLIC_KEY: &'static str = "1.2.840.10045.2.1";
    pub const OID_DSA: &'static str = "1.2.840.10040.4.1";
    pub const OID_X25519: &'static str = "1.3.101.110";
    pub const OID_X448: &'static str = "1.3.101.111";
    pub const OID_ED25519: &'static str = "1.3.101.112";
    pub const OID_ED448: &'static str = "1.3.101.113";
}

impl From<&Element> for AlgorithmParameters {
    fn from(element: &Element) -> Self {
        match element {
            Element::Null => AlgorithmParameters::Null,
            Element::ObjectIdentifier(oid) => AlgorithmParameters::ObjectIdentifier(oid.clone()),
            other => AlgorithmParameters::Other(other.clone()),
        }
    }
}

impl DecodableFrom<Element> for AlgorithmIdentifier {}

impl Decoder<Element, AlgorithmIdentifier> for Element {
    type Error = Error;

    fn decode(&self) -> Result<AlgorithmIdentifier> {
        let Element::Sequence(elements) = self else {
            return Err(Error::InvalidAlgorithmIdentifier);
        };
        match elements.as_slice() {
            [Element::ObjectIdentifier(algorithm)] => Ok(AlgorithmIdentifier {
                algorithm: algorithm.clone(),
                parameters: None,
            }),
            [Element::ObjectIdentifier(algorithm), parameters] => Ok(AlgorithmIdentifier {
                algorithm: algorithm.clone(),
                parameters: Some(AlgorithmParameters::from(parameters)),
            }),
            _ => Err(Error::InvalidAlgorithmIdentifier),
        }
    }
}
