use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("DER error: {0}")]
    Der(#[from] keyguard_der::error::Error),

    #[error("ASN.1 error: {0}")]
    Asn1(#[from] keyguard_asn1::error::Error),

    #[error("empty ASN1Object")]
    EmptyAsn1Object,

    #[error("{0} unexpected element(s) after the private key")]
    TrailingElements(usize),

    #[error("unrecognized private key format (PKCS#8: {pkcs8}; SEC1: {sec1}; PKCS#1: {pkcs1})")]
    UnrecognizedPrivateKeyFormat {
        pkcs8: Box<crate::pkcs8::Error>,
        sec1: Box<crate::sec1::Error>,
        pkcs1: Box<crate::pkcs1::Error>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
