//! Typed ASN.1 elements on top of DER TLVs.
//!
//! Only the universal types that appear in private key structures are
//! interpreted. Everything else is kept as an [`Element::Unimplemented`]
//! TLV so callers can still walk past it.

use std::{fmt::Display, str::FromStr};

use error::Error;
use keyguard::decoder::{DecodableFrom, Decoder};
use keyguard_der::{Der, Tag, Tlv, Value};
use num_bigint::BigInt;

pub mod error;

#[derive(Debug, Clone)]
pub struct ASN1Object {
    elements: Vec<Element>,
}

impl ASN1Object {
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }

    pub fn new(elements: Vec<Element>) -> Self {
        ASN1Object { elements }
    }
}

impl DecodableFrom<Der> for ASN1Object {}

impl Decoder<Der, ASN1Object> for Der {
    type Error = Error;

    fn decode(&self) -> Result<ASN1Object, Error> {
        let elements = decode_all(self.elements())?;
        Ok(ASN1Object { elements })
    }
}

fn decode_all(tlvs: &[Tlv]) -> Result<Vec<Element>, Error> {
    tlvs.iter().map(Element::try_from).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Boolean(bool),
    Integer(Integer),
    BitString(BitString),
    OctetString(OctetString),
    Null,
    ObjectIdentifier(ObjectIdentifier),
    Sequence(Vec<Element>),
    Set(Vec<Element>),
    /// `[slot]` tagged value.
    ///
    /// A constructed tag holding exactly one element keeps that element.
    /// One holding several is presented as a `Sequence` of them. A primitive
    /// tag keeps its raw content as an `OctetString`.
    ContextSpecific {
        slot: u8,
        constructed: bool,
        element: Box<Element>,
    },
    Unimplemented(Tlv),
}

impl Element {
    /// ASN.1 type name, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Element::Boolean(_) => "BOOLEAN",
            Element::Integer(_) => "INTEGER",
            Element::BitString(_) => "BIT STRING",
            Element::OctetString(_) => "OCTET STRING",
            Element::Null => "NULL",
            Element::ObjectIdentifier(_) => "OBJECT IDENTIFIER",
            Element::Sequence(_) => "SEQUENCE",
            Element::Set(_) => "SET",
            Element::ContextSpecific { .. } => "context-specific",
            Element::Unimplemented(_) => "unimplemented",
        }
    }
}

impl TryFrom<&Tlv> for Element {
    type Error = Error;

    fn try_from(tlv: &Tlv) -> Result<Self, Self::Error> {
        match (tlv.tag(), tlv.value()) {
            (Tag::Boolean, Value::Data(data)) => match data.as_slice() {
                [0x00] => Ok(Element::Boolean(false)),
                [0xff] => Ok(Element::Boolean(true)),
                _ => Err(Error::InvalidBoolean),
            },
            (Tag::Integer, Value::Data(data)) => {
                Integer::try_from(data.as_slice()).map(Element::Integer)
            }
            (Tag::BitString, Value::Data(data)) => {
                BitString::try_from(data.as_slice()).map(Element::BitString)
            }
            (Tag::OctetString, Value::Data(data)) => {
                Ok(Element::OctetString(OctetString::from(data.as_slice())))
            }
            (Tag::Null, Value::Data(data)) => {
                if data.is_empty() {
                    Ok(Element::Null)
                } else {
                    Err(Error::NullWithContent(data.len()))
                }
            }
            (Tag::ObjectIdentifier, Value::Data(data)) => {
                ObjectIdentifier::try_from(data.as_slice()).map(Element::ObjectIdentifier)
            }
            (Tag::Sequence, Value::Tlv(tlvs)) => Ok(Element::Sequence(decode_all(tlvs)?)),
            (Tag::Set, Value::Tlv(tlvs)) => Ok(Element::Set(decode_all(tlvs)?)),
            (Tag::ContextSpecific { slot, constructed }, Value::Tlv(tlvs)) => {
                let mut elements = decode_all(tlvs)?;
                let element = if elements.len() == 1 {
                    elements.remove(0)
                } else {
                    Element::Sequence(elements)
                };
                Ok(Element::ContextSpecific {
                    slot,
                    constructed,
                    element: Box::new(element),
                })
            }
            (Tag::ContextSpecific { slot, constructed }, Value::Data(data)) => {
                Ok(Element::ContextSpecific {
                    slot,
                    constructed,
                    element: Box::new(Element::OctetString(OctetString::from(data.as_slice()))),
                })
            }
            _ => Ok(Element::Unimplemented(tlv.clone())),
        }
    }
}

// ASN.1 INTEGER is signed and arbitrarily sized; key moduli run to
// thousands of bits, so values are kept as BigInt.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Integer {
    inner: BigInt,
}

impl Integer {
    /// Returns a reference to the inner BigInt
    pub fn as_bigint(&self) -> &BigInt {
        &self.inner
    }

    /// Number of significant bits of the magnitude
    pub fn bits(&self) -> u64 {
        self.inner.bits()
    }

    /// Converts the Integer to i64 if it fits in the range
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.inner).ok()
    }
}

impl TryFrom<&[u8]> for Integer {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(Error::IntegerNoData);
        }
        Ok(Integer {
            inner: BigInt::from_signed_bytes_be(value),
        })
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Integer {
            inner: BigInt::from(value),
        }
    }
}

impl TryFrom<&Integer> for i64 {
    type Error = Error;

    fn try_from(value: &Integer) -> Result<Self, Self::Error> {
        value.to_i64().ok_or(Error::IntegerOutOfRangeI64)
    }
}

impl Display for Integer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectIdentifier {
    inner: Vec<u64>,
}

impl ObjectIdentifier {
    pub fn components(&self) -> &[u64] {
        &self.inner
    }
}

impl TryFrom<&[u8]> for ObjectIdentifier {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(Error::ObjectIdentifierNoData);
        }

        let mut sub_ids = Vec::new();
        let mut val = 0u64;
        let mut in_progress = false;
        for &b in value {
            if !in_progress && b == 0x80 {
                return Err(Error::ObjectIdentifierNonMinimal);
            }
            if val > (u64::MAX >> 7) {
                return Err(Error::ObjectIdentifierComponentOverflow);
            }
            val = (val << 7) | u64::from(b & 0x7f);
            if b & 0x80 == 0 {
                sub_ids.push(val);
                val = 0;
                in_progress = false;
            } else {
                in_progress = true;
            }
        }
        if in_progress {
            return Err(Error::ObjectIdentifierIncompleteEncoding);
        }

        // The first sub-identifier packs the first two arcs.
        let first = sub_ids[0];
        let (arc0, arc1) = match first {
            0..40 => (0, first),
            40..80 => (1, first - 40),
            _ => (2, first - 80),
        };
        let mut inner = Vec::with_capacity(sub_ids.len() + 1);
        inner.push(arc0);
        inner.push(arc1);
        inner.extend_from_slice(&sub_ids[1..]);

        Ok(ObjectIdentifier { inner })
    }
}

impl Display for ObjectIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self.inner.first() {
            Some(n) => self.inner[1..]
                .iter()
                .fold(n.to_string(), |s, n| s + "." + &n.to_string()),
            None => String::new(),
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ObjectIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .split('.')
            .map(|c| {
                if c.is_empty() {
                    Err(Error::ObjectIdentifierInvalidComponent(c.to_string()))
                } else {
                    c.parse::<u64>().map_err(Error::ParseInt)
                }
            })
            .collect::<Result<Vec<u64>, Error>>()?;
        if inner.len() < 2 {
            return Err(Error::ObjectIdentifierTooFewComponents);
        }
        Ok(ObjectIdentifier { inner })
    }
}

impl PartialEq<&str> for ObjectIdentifier {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl PartialEq<ObjectIdentifier> for &str {
    fn eq(&self, other: &ObjectIdentifier) -> bool {
        *self == other.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitString {
    unused: u8,
    data: Vec<u8>,
}

impl BitString {
    /// Creates a new BitString with the specified number of unused bits and data
    pub fn new(unused: u8, data: Vec<u8>) -> Self {
        BitString { unused, data }
    }

    /// Returns the number of unused bits in the last byte
    pub fn unused_bits(&self) -> u8 {
        self.unused
    }

    /// Returns a reference to the underlying byte data
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the total number of bits (excluding unused bits)
    pub fn bit_len(&self) -> usize {
        if self.data.is_empty() {
            0
        } else {
            self.data.len() * 8 - usize::from(self.unused)
        }
    }
}

impl AsRef<[u8]> for BitString {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl TryFrom<&[u8]> for BitString {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let (&unused, data) = value.split_first().ok_or(Error::BitStringNoData)?;
        if unused > 7 {
            return Err(Error::BitStringUnusedBitsOutOfRange(unused));
        }
        if data.is_empty() && unused != 0 {
            return Err(Error::BitStringUnusedBitsWithoutData(unused));
        }
        Ok(BitString {
            unused,
            data: data.to_vec(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OctetString {
    inner: Vec<u8>,
}

impl OctetString {
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl AsRef<[u8]> for OctetString {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl From<Vec<u8>> for OctetString {
    fn from(inner: Vec<u8>) -> Self {
        OctetString { inner }
    }
}

impl From<&[u8]> for OctetString {
    fn from(value: &[u8]) -> Self {
        OctetString {
            inner: value.to_vec(),
        }
    }
}
