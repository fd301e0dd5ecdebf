use std::str::FromStr;

use keyguard::decoder::Decoder;
use keyguard_asn1::{ASN1Object, Element};
use keyguard_der::Der;
use keyguard_pem::Pem;

pub(crate) const RSA_1024_PKCS1: &str = include_str!("../../testdata/rsa1024_pkcs1.pem");
pub(crate) const RSA_2048_PKCS1: &str = include_str!("../../testdata/rsa2048_pkcs1.pem");
pub(crate) const RSA_1024_PKCS8: &str = include_str!("../../testdata/rsa1024_pkcs8.pem");
pub(crate) const RSA_2048_PKCS8: &str = include_str!("../../testdata/rsa2048_pkcs8.pem");
pub(crate) const EC_P256_SEC1: &str = include_str!("../../testdata/ec_p256_sec1.pem");
pub(crate) const EC_P384_SEC1: &str = include_str!("../../testdata/ec_p384_sec1.pem");
pub(crate) const EC_P256_PKCS8: &str = include_str!("../../testdata/ec_p256_pkcs8.pem");
pub(crate) const ED25519_PKCS8: &str = include_str!("../../testdata/ed25519_pkcs8.pem");
pub(crate) const DSA_TRADITIONAL: &str = include_str!("../../testdata/dsa_traditional.pem");
pub(crate) const RSA_1024_ENCRYPTED_PKCS8: &str =
    include_str!("../../testdata/rsa1024_encrypted_pkcs8.pem");

/// Base64-decoded body of the first block in `pem`.
pub(crate) fn der_bytes(pem: &str) -> Vec<u8> {
    let pem = Pem::from_str(pem).unwrap();
    pem.decode().unwrap()
}

/// First top-level element of the first block in `pem`.
pub(crate) fn first_element(pem: &str) -> Element {
    let bytes = der_bytes(pem);
    let der: Der = bytes.decode().unwrap();
    let obj: ASN1Object = der.decode().unwrap();
    obj.elements()[0].clone()
}
