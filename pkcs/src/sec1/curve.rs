use std::fmt::Display;

use keyguard_asn1::ObjectIdentifier;

use super::error::Error;

/// Named elliptic curves accepted in EC key parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedCurve {
    /// NIST P-192 (prime192v1)
    Secp192r1,
    /// NIST P-224
    Secp224r1,
    /// NIST P-256 (prime256v1)
    Secp256r1,
    /// NIST P-384
    Secp384r1,
    /// NIST P-521
    Secp521r1,
    Secp256k1,
    BrainpoolP256r1,
    BrainpoolP384r1,
    BrainpoolP512r1,
}

impl NamedCurve {
    pub const ALL: [NamedCurve; 9] = [
        NamedCurve::Secp192r1,
        NamedCurve::Secp224r1,
        NamedCurve::Secp256r1,
        NamedCurve::Secp384r1,
        NamedCurve::Secp521r1,
        NamedCurve::Secp256k1,
        NamedCurve::BrainpoolP256r1,
        NamedCurve::BrainpoolP384r1,
        NamedCurve::BrainpoolP512r1,
    ];

    /// Dotted OID of the curve.
    pub fn oid(&self) -> &'static str {
        match self {
            NamedCurve::Secp192r1 => "1.2.840.10045.3.1.1",
            NamedCurve::Secp224r1 => "1.3.132.0.33",
            NamedCurve::Secp256r1 => "1.2.840.10045.3.1.7",
            NamedCurve::Secp384r1 => "1.3.132.0.34",
            NamedCurve::Secp521r1 => "1.3.132.0.35",
            NamedCurve::Secp256k1 => "1.3.132.0.10",
            NamedCurve::BrainpoolP256r1 => "1.3.36.3.3.2.8.1.1.7",
            NamedCurve::BrainpoolP384r1 => "1.3.36.3.3.2.8.1.1.11",
            NamedCurve::BrainpoolP512r1 => "1.3.36.3.3.2.8.1.1.13",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NamedCurve::Secp192r1 => "secp192r1",
            NamedCurve::Secp224r1 => "secp224r1",
            NamedCurve::Secp256r1 => "secp256r1",
            NamedCurve::Secp384r1 => "secp384r1",
            NamedCurve::Secp521r1 => "secp521r1",
            NamedCurve::Secp256k1 => "secp256k1",
            NamedCurve::BrainpoolP256r1 => "brainpoolP256r1",
            NamedCurve::BrainpoolP384r1 => "brainpoolP384r1",
            NamedCurve::BrainpoolP512r1 => "brainpoolP512r1",
        }
    }

    /// Field size in bits.
    pub fn key_size(&self) -> u32 {
        match self {
            NamedCurve::Secp192r1 => 192,
            NamedCurve::Secp224r1 => 224,
            NamedCurve::Secp256r1 | NamedCurve::Secp256k1 | NamedCurve::BrainpoolP256r1 => 256,
            NamedCurve::Secp384r1 | NamedCurve::BrainpoolP384r1 => 384,
            NamedCurve::Secp521r1 => 521,
            NamedCurve::BrainpoolP512r1 => 512,
        }
    }
}

impl TryFrom<&ObjectIdentifier> for NamedCurve {
    type Error = Error;

    fn try_from(oid: &ObjectIdentifier) -> Result<Self, Self::Error> {
        NamedCurve::ALL
            .into_iter()
            .find(|curve| *oid == curve.oid())
            .ok_or_else(|| Error::UnknownCurve(oid.to_string()))
    }
}

impl Display for NamedCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[rstest(oid, expected,
        case("1.2.840.10045.3.1.7", NamedCurve::Secp256r1),
        case("1.3.132.0.34", NamedCurve::Secp384r1),
        case("1.3.132.0.35", NamedCurve::Secp521r1),
        case("1.3.132.0.10", NamedCurve::Secp256k1),
        case("1.3.36.3.3.2.8.1.1.13", NamedCurve::BrainpoolP512r1),
    )]
    fn test_named_curve_from_oid(oid: &str, expected: NamedCurve) {
        let oid = ObjectIdentifier::from_str(oid).unwrap();

        assert_eq!(NamedCurve::try_from(&oid).unwrap(), expected);
    }

    #[test]
    fn test_unknown_curve() {
        // sect163k1, a binary curve
        let oid = ObjectIdentifier::from_str("1.3.132.0.1").unwrap();

        assert_eq!(
            NamedCurve::try_from(&oid).unwrap_err(),
            Error::UnknownCurve("1.3.132.0.1".to_string())
        );
    }

    #[test]
    fn test_oids_are_distinct() {
        for (i, a) in NamedCurve::ALL.iter().enumerate() {
            for b in &NamedCurve::ALL[i + 1..] {
                assert_ne!(a.oid(), b.oid());
            }
        }
    }
}
