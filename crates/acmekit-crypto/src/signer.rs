use p256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use pkcs8::{spki::SubjectPublicKeyInfoRef, DecodePrivateKey, DecodePublicKey};
use sha2::{Digest, Sha256};

use crate::{
    curve::EcCurve,
    error::{Error, Result},
    keypair::curve_of_pkcs8_der,
};

/// A curve-bound ECDSA signer imported from a PKCS#8 blob.
///
/// Signatures are computed over the SHA-256 digest of the message for
/// every curve, matching the `ecdsa-with-SHA256` algorithm the CSR
/// declares, and are emitted DER-encoded.
pub enum EcSigner {
    P256(p256::ecdsa::SigningKey),
    P384(p384::ecdsa::SigningKey),
}

impl EcSigner {
    /// Import a signer from PKCS#8 DER bytes.
    pub fn from_pkcs8_der(der: &[u8]) -> Result<Self> {
        match curve_of_pkcs8_der(der)? {
            EcCurve::Secp256r1 => Ok(Self::P256(p256::ecdsa::SigningKey::from_pkcs8_der(der)?)),
            EcCurve::Secp384r1 => Ok(Self::P384(p384::ecdsa::SigningKey::from_pkcs8_der(der)?)),
        }
    }

    /// The curve this signer is bound to.
    pub fn curve(&self) -> EcCurve {
        match self {
            Self::P256(_) => EcCurve::Secp256r1,
            Self::P384(_) => EcCurve::Secp384r1,
        }
    }

    /// Sign the SHA-256 digest of `message`, returning a DER signature.
    pub fn sign_sha256(&self, message: &[u8]) -> Result<Vec<u8>> {
        let digest: [u8; 32] = Sha256::digest(message).into();
        match self {
            Self::P256(key) => {
                let signature: p256::ecdsa::Signature = key
                    .sign_prehash(&digest)
                    .map_err(|e| Error::SignatureError(e.to_string()))?;
                Ok(signature.to_der().as_bytes().to_vec())
            }
            Self::P384(key) => {
                let signature: p384::ecdsa::Signature = key
                    .sign_prehash(&digest)
                    .map_err(|e| Error::SignatureError(e.to_string()))?;
                Ok(signature.to_der().as_bytes().to_vec())
            }
        }
    }
}

/// Verify an ECDSA/SHA-256 DER signature against an SPKI DER public key.
///
/// Returns `Ok(false)` for a well-formed key with a bad or malformed
/// signature; errors only when the public key itself cannot be read.
pub fn verify_sha256(spki_der: &[u8], message: &[u8], signature_der: &[u8]) -> Result<bool> {
    let spki = SubjectPublicKeyInfoRef::try_from(spki_der)?;
    let params = spki.algorithm.parameters_oid()?;
    let curve = EcCurve::from_oid(&params)
        .ok_or_else(|| Error::UnsupportedCurve(params.to_string()))?;

    let digest: [u8; 32] = Sha256::digest(message).into();
    match curve {
        EcCurve::Secp256r1 => {
            let public_key = p256::PublicKey::from_public_key_der(spki_der)?;
            let verifying_key = p256::ecdsa::VerifyingKey::from(&public_key);
            let signature = match p256::ecdsa::Signature::from_der(signature_der) {
                Ok(signature) => signature,
                Err(_) => return Ok(false),
            };
            Ok(verifying_key.verify_prehash(&digest, &signature).is_ok())
        }
        EcCurve::Secp384r1 => {
            let public_key = p384::PublicKey::from_public_key_der(spki_der)?;
            let verifying_key = p384::ecdsa::VerifyingKey::from(&public_key);
            let signature = match p384::ecdsa::Signature::from_der(signature_der) {
                Ok(signature) => signature,
                Err(_) => return Ok(false),
            };
            Ok(verifying_key.verify_prehash(&digest, &signature).is_ok())
        }
    }
}
