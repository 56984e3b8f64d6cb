//! # Acmekit
//!
//! Elliptic-curve key lifecycle and CSR construction for a certificate
//! issuance client.
//!
//! ## Crates
//!
//! - `acmekit_crypto` - EC primitives: named curves, key pairs, ECDSA signing
//! - `acmekit_csr` - curve selection, key provider, CSR plugin

// Re-export all sub-crates
pub use acmekit_crypto;
pub use acmekit_csr;
