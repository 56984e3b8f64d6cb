//! Certificate Signing Request core for the acmekit client.
//!
//! Owns the lifecycle of the EC key pair behind a CSR: resolving the
//! configured curve (with fallback), restoring a key from cached PEM text
//! or generating a fresh one, building the request bound to a subject
//! name, and managing the signing handle that later signs it.

pub mod config;
pub mod error;
pub mod handle;
pub mod plugin;
pub mod request;
pub mod selector;

// Re-export core functionality
pub use config::EcConfig;
pub use error::{Error, Result};
pub use handle::SigningHandle;
pub use plugin::{CsrPlugin, EcCsrPlugin};
pub use request::{CsrRequest, CsrSubject, SignedCsr};
pub use selector::{resolve_curve, DEFAULT_CURVE};
