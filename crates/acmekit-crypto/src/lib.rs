//! Acmekit Cryptography Library
//!
//! EC primitives for the acmekit certificate client: the named-curve
//! registry, key pair generation and PKCS#8 import/export, and ECDSA
//! signing over SHA-256.

pub mod curve;
pub mod error;
pub mod keypair;
pub mod signer;

// Re-export commonly used types for convenience
pub use curve::EcCurve;
pub use error::{Error, Result};
pub use keypair::EcKeyPair;
pub use signer::{verify_sha256, EcSigner};
