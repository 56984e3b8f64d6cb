//! Signing handle lifecycle.

use acmekit_crypto::{EcKeyPair, EcSigner};

use crate::error::{Error, Result};

enum HandleState {
    Unbuilt,
    Active(EcSigner),
    Released,
}

/// Lazily imported ECDSA signing handle with idempotent teardown.
///
/// Built on first use by re-encoding the private key to PKCS#8 DER and
/// importing the blob into the curve-bound signer. `release` moves the
/// handle into a terminal state from any other state, dropping the signer
/// if one was built; releasing twice, or before the handle was ever
/// built, is a no-op. Signing after release fails with
/// [`Error::HandleReleased`] rather than panicking.
pub struct SigningHandle {
    state: HandleState,
}

impl SigningHandle {
    pub(crate) fn new() -> Self {
        Self {
            state: HandleState::Unbuilt,
        }
    }

    /// Return the signer, importing it on first access.
    pub(crate) fn get_or_import(&mut self, key_pair: &EcKeyPair) -> Result<&EcSigner> {
        if matches!(self.state, HandleState::Released) {
            return Err(Error::HandleReleased);
        }
        if matches!(self.state, HandleState::Unbuilt) {
            let der = key_pair.to_pkcs8_der().map_err(|e| {
                Error::HandleImportError(format!("failed to re-encode private key: {}", e))
            })?;
            let signer = EcSigner::from_pkcs8_der(&der).map_err(|e| {
                Error::HandleImportError(format!("failed to import private key: {}", e))
            })?;
            self.state = HandleState::Active(signer);
        }
        match &self.state {
            HandleState::Active(signer) => Ok(signer),
            _ => Err(Error::HandleReleased),
        }
    }

    /// Tear the handle down. Idempotent; any state becomes `Released`.
    pub fn release(&mut self) {
        self.state = HandleState::Released;
    }

    /// Whether the handle has been torn down.
    pub fn is_released(&self) -> bool {
        matches!(self.state, HandleState::Released)
    }
}

#[cfg(test)]
mod tests {
    use acmekit_crypto::EcCurve;

    use super::*;

    #[test]
    fn test_lazy_import_and_memoization() {
        let key = EcKeyPair::generate(EcCurve::Secp256r1).unwrap();
        let mut handle = SigningHandle::new();

        let curve = handle.get_or_import(&key).unwrap().curve();
        assert_eq!(curve, EcCurve::Secp256r1);

        // Second access returns the memoized signer
        assert_eq!(handle.get_or_import(&key).unwrap().curve(), curve);
    }

    #[test]
    fn test_release_is_idempotent() {
        let key = EcKeyPair::generate(EcCurve::Secp384r1).unwrap();
        let mut handle = SigningHandle::new();
        handle.get_or_import(&key).unwrap();

        handle.release();
        handle.release();
        assert!(handle.is_released());
    }

    #[test]
    fn test_release_before_build_is_noop_but_terminal() {
        let key = EcKeyPair::generate(EcCurve::Secp256r1).unwrap();
        let mut handle = SigningHandle::new();

        handle.release();
        assert!(handle.is_released());
        assert!(matches!(
            handle.get_or_import(&key),
            Err(Error::HandleReleased)
        ));
    }

    #[test]
    fn test_signing_after_release_fails_cleanly() {
        let key = EcKeyPair::generate(EcCurve::Secp256r1).unwrap();
        let mut handle = SigningHandle::new();
        handle.get_or_import(&key).unwrap();

        handle.release();
        assert!(matches!(
            handle.get_or_import(&key),
            Err(Error::HandleReleased)
        ));
    }
}
