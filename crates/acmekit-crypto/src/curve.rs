use std::fmt;

use const_oid::{db::rfc5912, ObjectIdentifier};

/// Named elliptic curves supported for certificate keys.
///
/// The set matches what public CAs actually issue for: NIST P-256 and
/// NIST P-384. Every value is a complete, usable parameter set; there is
/// no "unknown curve" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcCurve {
    /// NIST P-256 (secp256r1, prime256v1)
    Secp256r1,
    /// NIST P-384 (secp384r1)
    Secp384r1,
}

impl EcCurve {
    /// Canonical SEC 2 name of the curve.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Secp256r1 => "secp256r1",
            Self::Secp384r1 => "secp384r1",
        }
    }

    /// RFC 5912 object identifier of the curve.
    pub fn oid(&self) -> ObjectIdentifier {
        match self {
            Self::Secp256r1 => rfc5912::SECP_256_R_1,
            Self::Secp384r1 => rfc5912::SECP_384_R_1,
        }
    }

    /// Look up a curve by name.
    ///
    /// Accepts the SEC 2 identifiers plus the aliases commonly seen in
    /// configuration files, case-insensitively. Returns `None` for
    /// anything unrecognized, including the empty string.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "secp256r1" | "prime256v1" | "p-256" | "p256" | "nistp256" => Some(Self::Secp256r1),
            "secp384r1" | "p-384" | "p384" | "nistp384" => Some(Self::Secp384r1),
            _ => None,
        }
    }

    /// Look up a curve by its object identifier.
    pub fn from_oid(oid: &ObjectIdentifier) -> Option<Self> {
        if *oid == rfc5912::SECP_256_R_1 {
            Some(Self::Secp256r1)
        } else if *oid == rfc5912::SECP_384_R_1 {
            Some(Self::Secp384r1)
        } else {
            None
        }
    }
}

impl fmt::Display for EcCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
