use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Named curve is not in the supported set
    #[error("Unsupported curve: {0}")]
    UnsupportedCurve(String),

    /// Key material could not be parsed or encoded
    #[error("Key error: {0}")]
    KeyError(String),

    /// Signing or verification failure
    #[error("Signature error: {0}")]
    SignatureError(String),

    #[error("PKCS8 error: {0}")]
    Pkcs8Error(#[from] pkcs8::Error),

    #[error("SPKI error: {0}")]
    SpkiError(#[from] pkcs8::spki::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
