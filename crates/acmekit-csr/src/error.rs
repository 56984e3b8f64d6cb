use thiserror::Error;

/// Errors surfaced to the issuance flow.
///
/// Curve-configuration fallback and cache corruption are absorbed inside
/// the plugin (logged, never raised); what remains here is fatal for the
/// certificate being processed.
#[derive(Error, Debug)]
pub enum Error {
    /// The underlying generator could not produce a key pair
    #[error("Key generation error: {0}")]
    GenerationError(String),

    /// Request construction or assembly failure
    #[error("CSR error: {0}")]
    CsrError(String),

    /// Importing the re-encoded private key into the signer failed
    #[error("Signing handle import error: {0}")]
    HandleImportError(String),

    /// The signing handle was torn down; the plugin no longer signs
    #[error("Signing handle has been released")]
    HandleReleased,

    #[error("Crypto error: {0}")]
    CryptoError(#[from] acmekit_crypto::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
