//! DER (X.690 Distinguished Encoding Rules) tag-length-value parsing.
//!
//! Only the framing is handled here: tags, lengths and nesting. Typed
//! interpretation of the values lives in `keyguard-asn1`.

use keyguard::decoder::{DecodableFrom, Decoder};
use nom::{IResult, Parser};

pub mod error;

use error::Error;

/// Maximum nesting of constructed values. Private key structures use a
/// handful of levels; anything deeper is rejected before it costs stack.
pub const MAX_DEPTH: usize = 32;

#[derive(Debug, Clone)]
pub struct Der {
    elements: Vec<Tlv>,
}

impl Der {
    pub fn new(elements: Vec<Tlv>) -> Self {
        Der { elements }
    }

    /// Top-level TLVs in input order.
    pub fn elements(&self) -> &[Tlv] {
        &self.elements
    }
}

impl DecodableFrom<Vec<u8>> for Der {}

impl Decoder<Vec<u8>, Der> for Vec<u8> {
    type Error = Error;

    fn decode(&self) -> Result<Der, Self::Error> {
        parse_all(self)
    }
}

impl DecodableFrom<&[u8]> for Der {}

impl Decoder<&[u8], Der> for &[u8] {
    type Error = Error;

    fn decode(&self) -> Result<Der, Self::Error> {
        parse_all(self)
    }
}

fn parse_all(mut input: &[u8]) -> Result<Der, Error> {
    if input.is_empty() {
        return Err(Error::Empty);
    }
    let mut elements = Vec::new();
    while !input.is_empty() {
        let (rest, tlv) = Tlv::parse(input)?;
        input = rest;
        elements.push(tlv);
    }
    Ok(Der { elements })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tag {
    Boolean,
    Integer,
    BitString,
    OctetString,
    Null,
    ObjectIdentifier,
    Sequence,
    Set,
    /// `[slot]` tag of the context-specific class
    ContextSpecific { slot: u8, constructed: bool },
    Unimplemented(u8),
}

impl TryFrom<u8> for Tag {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value & 0x1f == 0x1f {
            return Err(Error::HighTagNumber(value));
        }
        if value & 0xc0 == 0x80 {
            return Ok(Tag::ContextSpecific {
                slot: value & 0x1f,
                constructed: value & 0x20 == 0x20,
            });
        }
        Ok(match value {
            0x01 => Self::Boolean,
            0x02 => Self::Integer,
            0x03 => Self::BitString,
            0x04 => Self::OctetString,
            0x05 => Self::Null,
            0x06 => Self::ObjectIdentifier,
            0x30 => Self::Sequence,
            0x31 => Self::Set,
            _ => Tag::Unimplemented(value),
        })
    }
}

impl Tag {
    /// Whether the value is parsed into nested TLVs.
    pub fn is_structured(&self) -> bool {
        match self {
            Tag::Sequence | Tag::Set => true,
            Tag::ContextSpecific { constructed, .. } => *constructed,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tlv {
    tag: Tag,
    length: u64,
    value: Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Tlv(Vec<Tlv>),
    Data(Vec<u8>),
}

impl Tlv {
    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Parses one TLV from the front of `input`, returning the remainder.
    pub fn parse(input: &[u8]) -> Result<(&[u8], Tlv), Error> {
        Self::parse_nested(input, 0)
    }

    fn parse_nested(input: &[u8], depth: usize) -> Result<(&[u8], Tlv), Error> {
        if depth > MAX_DEPTH {
            return Err(Error::DepthLimitExceeded(MAX_DEPTH));
        }
        let (input, tag) = parse_tag(input)?;
        let (input, length) = parse_length(input)?;
        let size = usize::try_from(length).map_err(|_| Error::LengthOverflow(8))?;
        let (input, data) = take_bytes(input, size)?;

        if tag.is_structured() {
            // parse TLV recursively.
            let mut tlvs = Vec::new();
            let mut data = data;
            while !data.is_empty() {
                let (rest, v) = Self::parse_nested(data, depth + 1)?;
                data = rest;
                tlvs.push(v);
            }

            return Ok((
                input,
                Tlv {
                    tag,
                    length,
                    value: Value::Tlv(tlvs),
                },
            ));
        }

        Ok((
            input,
            Tlv {
                tag,
                length,
                value: Value::Data(data.to_vec()),
            },
        ))
    }
}

fn be_u8(input: &[u8]) -> IResult<&[u8], u8> {
    nom::number::be_u8().parse(input)
}

fn take_bytes(input: &[u8], n: usize) -> IResult<&[u8], &[u8]> {
    nom::bytes::complete::take(n).parse(input)
}

fn parse_tag(input: &[u8]) -> Result<(&[u8], Tag), Error> {
    let (input, n) = be_u8(input)?;
    Ok((input, Tag::try_from(n)?))
}

fn parse_length(input: &[u8]) -> Result<(&[u8], u64), Error> {
    let (input, n) = be_u8(input)?;
    if n & 0x80 == 0 {
        // short form: 0-127
        return Ok((input, u64::from(n)));
    }
    // long form
    // First 1 bit is a marker for long form.
    // Other bits represent bytes length of the length field.
    let count = n & 0x7f;
    if count == 0 {
        return Err(Error::IndefiniteLength);
    }
    if count > 8 {
        return Err(Error::LengthOverflow(count));
    }
    let (input, bs) = take_bytes(input, usize::from(count))?;
    let length = bs.iter().fold(0u64, |n, &b| (n << 8) | u64::from(b));
    Ok((input, length))
}
