//! CSR plugin capability interface.

mod ec;

pub use ec::EcCsrPlugin;

use crate::{
    error::Result,
    request::{CsrRequest, CsrSubject, SignedCsr},
};

/// Capability interface implemented by each key-algorithm family.
///
/// Callers depend only on this trait; the elliptic-curve family is
/// implemented by [`EcCsrPlugin`]. Other families (RSA, ...) would plug
/// in as further implementations.
pub trait CsrPlugin {
    /// Short label of the algorithm family, e.g. `"EC"`.
    fn algorithm(&self) -> &'static str;

    /// Build an unsigned certificate request for `subject`, bound to the
    /// plugin's public key.
    fn generate_csr(&mut self, subject: &CsrSubject) -> Result<CsrRequest>;

    /// Sign a request previously produced by
    /// [`CsrPlugin::generate_csr`].
    fn sign_csr(&mut self, request: &CsrRequest) -> Result<SignedCsr>;

    /// Serialized private key for the caller to persist, if one exists.
    fn cache_data(&self) -> Option<&str>;

    /// Tear down the signing handle. Idempotent.
    fn release(&mut self);
}
