use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("parser error {0:?}")]
    Parser(nom::error::ErrorKind),
    #[error("parser incomplete: {0:?}")]
    ParserIncomplete(nom::Needed),
    #[error("indefinite length is not allowed in DER")]
    IndefiniteLength,
    #[error("length field of {0} bytes is too long")]
    LengthOverflow(u8),
    #[error("high tag number form is not supported (tag byte 0x{0:02x})")]
    HighTagNumber(u8),
    #[error("nesting deeper than {0} levels")]
    DepthLimitExceeded(usize),
    #[error("empty input")]
    Empty,
}

impl<'a> From<nom::Err<nom::error::Error<&'a [u8]>>> for Error {
    fn from(err: nom::Err<nom::error::Error<&'a [u8]>>) -> Self {
        match err {
            nom::Err::Incomplete(needed) => Error::ParserIncomplete(needed),
            nom::Err::Error(e) | nom::Err::Failure(e) => Error::Parser(e.code),
        }
    }
}
