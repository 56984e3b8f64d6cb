//! Certificate request construction.
//!
//! Builds the unsigned PKCS#10 request binding a subject name to the
//! provider's EC public key, and assembles the signed form once the
//! signing handle has produced a signature.

use const_oid::db::rfc5912;
use der::{
    asn1::{BitString, ObjectIdentifier, SetOfVec, Utf8StringRef},
    Any, Decode, Encode,
};
use pkcs8::spki::{AlgorithmIdentifierOwned, SubjectPublicKeyInfoOwned};
use serde::{Deserialize, Serialize};
use x509_cert::{
    attr::AttributeTypeAndValue,
    name::{RdnSequence, RelativeDistinguishedName},
    request::{CertReq, CertReqInfo, Version},
};

use crate::error::{Error, Result};

const OID_CN: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.3");
const OID_C: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.6");
const OID_L: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.7");
const OID_ST: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.8");
const OID_O: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.10");
const OID_OU: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.11");

/// Subject information for a certificate request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CsrSubject {
    /// Common Name (CN)
    pub common_name: String,
    /// Organization (O)
    pub organization: Option<String>,
    /// Organizational Unit (OU)
    pub organizational_unit: Option<String>,
    /// Country (C)
    pub country: Option<String>,
    /// State or Province (ST)
    pub state: Option<String>,
    /// Locality (L)
    pub locality: Option<String>,
}

impl CsrSubject {
    /// Subject carrying only a common name.
    pub fn common_name(name: &str) -> Self {
        Self {
            common_name: name.to_string(),
            organization: None,
            organizational_unit: None,
            country: None,
            state: None,
            locality: None,
        }
    }
}

/// An unsigned certificate request.
///
/// Binds a subject name to an EC public key and the declared signature
/// algorithm `ecdsa-with-SHA256`. Immutable once built; signing happens
/// through [`CsrRequest::assemble`] with a detached signature.
#[derive(Debug, Clone)]
pub struct CsrRequest {
    info: CertReqInfo,
    algorithm: AlgorithmIdentifierOwned,
}

impl CsrRequest {
    /// Build an unsigned request from a subject and an SPKI DER public key.
    ///
    /// The public key must be an EC key; anything else is rejected here
    /// rather than at signing time.
    pub fn new(subject: &CsrSubject, spki_der: &[u8]) -> Result<Self> {
        let subject_dn = build_distinguished_name(subject)?;

        let spki = SubjectPublicKeyInfoOwned::from_der(spki_der)
            .map_err(|e| Error::CsrError(format!("failed to parse SPKI: {}", e)))?;
        if spki.algorithm.oid != rfc5912::ID_EC_PUBLIC_KEY {
            return Err(Error::CsrError(format!(
                "public key is not an EC key (algorithm {})",
                spki.algorithm.oid
            )));
        }

        let info = CertReqInfo {
            version: Version::V1,
            subject: subject_dn,
            public_key: spki,
            attributes: Default::default(),
        };

        Ok(Self {
            info,
            algorithm: AlgorithmIdentifierOwned {
                oid: rfc5912::ECDSA_WITH_SHA_256,
                parameters: None,
            },
        })
    }

    /// The subject this request is bound to.
    pub fn subject(&self) -> Result<CsrSubject> {
        parse_distinguished_name(&self.info.subject)
    }

    /// SPKI DER of the bound public key.
    pub fn public_key_der(&self) -> Result<Vec<u8>> {
        self.info
            .public_key
            .to_der()
            .map_err(|e| Error::CsrError(format!("failed to encode SPKI: {}", e)))
    }

    /// The declared signature algorithm (`ecdsa-with-SHA256`).
    pub fn signature_algorithm(&self) -> &AlgorithmIdentifierOwned {
        &self.algorithm
    }

    /// DER encoding of the inner `CertReqInfo`: the exact bytes to sign.
    pub fn signing_input(&self) -> Result<Vec<u8>> {
        self.info
            .to_der()
            .map_err(|e| Error::CsrError(format!("failed to encode CertReqInfo: {}", e)))
    }

    /// Combine the request with an ECDSA DER signature into a complete
    /// PKCS#10 certification request.
    pub fn assemble(&self, signature_der: &[u8]) -> Result<SignedCsr> {
        let signature = BitString::from_bytes(signature_der)
            .map_err(|e| Error::CsrError(format!("failed to wrap signature: {}", e)))?;
        Ok(SignedCsr {
            inner: CertReq {
                info: self.info.clone(),
                algorithm: self.algorithm.clone(),
                signature,
            },
        })
    }
}

/// A complete, signed PKCS#10 certification request.
#[derive(Debug, Clone)]
pub struct SignedCsr {
    inner: CertReq,
}

impl SignedCsr {
    /// Parse from PEM text.
    pub fn from_pem(pem_text: &str) -> Result<Self> {
        let block = pem::parse(pem_text)
            .map_err(|e| Error::CsrError(format!("failed to parse PEM: {}", e)))?;
        if block.tag() != "CERTIFICATE REQUEST" && block.tag() != "NEW CERTIFICATE REQUEST" {
            return Err(Error::CsrError(format!(
                "unexpected PEM tag {:?}",
                block.tag()
            )));
        }
        Self::from_der(block.contents())
    }

    /// Parse from DER bytes.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let inner = CertReq::from_der(der)
            .map_err(|e| Error::CsrError(format!("failed to parse DER: {}", e)))?;
        Ok(Self { inner })
    }

    /// Export to PEM text.
    pub fn to_pem(&self) -> Result<String> {
        let der = self.to_der()?;
        Ok(pem::encode(&pem::Pem::new("CERTIFICATE REQUEST", der)))
    }

    /// Export to DER bytes.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        self.inner
            .to_der()
            .map_err(|e| Error::CsrError(format!("failed to encode DER: {}", e)))
    }

    /// The subject of the request.
    pub fn subject(&self) -> Result<CsrSubject> {
        parse_distinguished_name(&self.inner.info.subject)
    }

    /// Check the embedded signature against the embedded public key.
    pub fn verify_signature(&self) -> Result<()> {
        let info_der = self
            .inner
            .info
            .to_der()
            .map_err(|e| Error::CsrError(format!("failed to encode CertReqInfo: {}", e)))?;
        let spki_der = self
            .inner
            .info
            .public_key
            .to_der()
            .map_err(|e| Error::CsrError(format!("failed to encode SPKI: {}", e)))?;

        let signature = self.inner.signature.raw_bytes();
        if acmekit_crypto::verify_sha256(&spki_der, &info_der, signature)? {
            Ok(())
        } else {
            Err(Error::CsrError("signature verification failed".to_string()))
        }
    }
}

fn push_rdn(
    rdns: &mut Vec<RelativeDistinguishedName>,
    oid: ObjectIdentifier,
    value: &str,
) -> Result<()> {
    let value = Utf8StringRef::new(value)
        .map_err(|e| Error::CsrError(format!("invalid attribute value: {}", e)))?;
    let mut set = SetOfVec::new();
    set.insert(AttributeTypeAndValue {
        oid,
        value: Any::from(value),
    })
    .map_err(|e| Error::CsrError(format!("failed to add attribute: {}", e)))?;
    rdns.push(RelativeDistinguishedName(set));
    Ok(())
}

/// Build an X.501 distinguished name from a subject.
///
/// CN is required; the rest of the attributes are appended when present.
/// Semantic checks on the values belong to the consuming CA, not here.
pub(crate) fn build_distinguished_name(subject: &CsrSubject) -> Result<x509_cert::name::Name> {
    if subject.common_name.is_empty() {
        return Err(Error::CsrError("Common Name (CN) is required".to_string()));
    }

    let mut rdns = Vec::new();
    push_rdn(&mut rdns, OID_CN, &subject.common_name)?;
    if let Some(ref organization) = subject.organization {
        push_rdn(&mut rdns, OID_O, organization)?;
    }
    if let Some(ref organizational_unit) = subject.organizational_unit {
        push_rdn(&mut rdns, OID_OU, organizational_unit)?;
    }
    if let Some(ref country) = subject.country {
        push_rdn(&mut rdns, OID_C, country)?;
    }
    if let Some(ref state) = subject.state {
        push_rdn(&mut rdns, OID_ST, state)?;
    }
    if let Some(ref locality) = subject.locality {
        push_rdn(&mut rdns, OID_L, locality)?;
    }

    Ok(x509_cert::name::Name::from(RdnSequence::from(rdns)))
}

/// Read a subject back out of an X.501 distinguished name.
pub(crate) fn parse_distinguished_name(name: &x509_cert::name::Name) -> Result<CsrSubject> {
    let mut subject = CsrSubject {
        common_name: String::new(),
        organization: None,
        organizational_unit: None,
        country: None,
        state: None,
        locality: None,
    };

    for rdn in name.0.iter() {
        for attr in rdn.0.iter() {
            let value = match Utf8StringRef::try_from(&attr.value) {
                Ok(utf8) => utf8.as_str().to_string(),
                // Non-UTF8 string encodings are not produced by this core
                Err(_) => continue,
            };

            if attr.oid == OID_CN {
                subject.common_name = value;
            } else if attr.oid == OID_O {
                subject.organization = Some(value);
            } else if attr.oid == OID_OU {
                subject.organizational_unit = Some(value);
            } else if attr.oid == OID_C {
                subject.country = Some(value);
            } else if attr.oid == OID_ST {
                subject.state = Some(value);
            } else if attr.oid == OID_L {
                subject.locality = Some(value);
            }
        }
    }

    if subject.common_name.is_empty() {
        return Err(Error::CsrError(
            "distinguished name missing required CN".to_string(),
        ));
    }

    Ok(subject)
}

#[cfg(test)]
mod tests {
    use acmekit_crypto::{EcCurve, EcKeyPair, EcSigner};

    use super::*;

    fn test_subject() -> CsrSubject {
        CsrSubject {
            common_name: "test.example.com".to_string(),
            organization: Some("Test Org".to_string()),
            organizational_unit: None,
            country: Some("US".to_string()),
            state: Some("CA".to_string()),
            locality: Some("San Francisco".to_string()),
        }
    }

    fn signed_request(curve: EcCurve, subject: &CsrSubject) -> (EcKeyPair, SignedCsr) {
        let key = EcKeyPair::generate(curve).unwrap();
        let spki = key.public_key_spki_der().unwrap();
        let request = CsrRequest::new(subject, &spki).unwrap();

        let der = key.to_pkcs8_der().unwrap();
        let signer = EcSigner::from_pkcs8_der(&der).unwrap();
        let signature = signer.sign_sha256(&request.signing_input().unwrap()).unwrap();
        (key, request.assemble(&signature).unwrap())
    }

    #[test]
    fn test_subject_roundtrip() {
        let subject = test_subject();
        let key = EcKeyPair::generate(EcCurve::Secp256r1).unwrap();
        let spki = key.public_key_spki_der().unwrap();

        let request = CsrRequest::new(&subject, &spki).unwrap();
        let parsed = request.subject().unwrap();
        assert_eq!(parsed, subject);
    }

    #[test]
    fn test_public_key_preserved() {
        let key = EcKeyPair::generate(EcCurve::Secp384r1).unwrap();
        let spki = key.public_key_spki_der().unwrap();

        let request = CsrRequest::new(&CsrSubject::common_name("a.example.com"), &spki).unwrap();
        assert_eq!(request.public_key_der().unwrap(), spki);
    }

    #[test]
    fn test_declared_algorithm_is_ecdsa_sha256() {
        let key = EcKeyPair::generate(EcCurve::Secp256r1).unwrap();
        let spki = key.public_key_spki_der().unwrap();

        let request = CsrRequest::new(&CsrSubject::common_name("a.example.com"), &spki).unwrap();
        assert_eq!(
            request.signature_algorithm().oid,
            rfc5912::ECDSA_WITH_SHA_256
        );
        assert!(request.signature_algorithm().parameters.is_none());
    }

    #[test]
    fn test_empty_common_name_rejected() {
        let key = EcKeyPair::generate(EcCurve::Secp256r1).unwrap();
        let spki = key.public_key_spki_der().unwrap();
        assert!(CsrRequest::new(&CsrSubject::common_name(""), &spki).is_err());
    }

    #[test]
    fn test_invalid_spki_rejected() {
        let subject = CsrSubject::common_name("a.example.com");
        assert!(CsrRequest::new(&subject, &[0u8; 32]).is_err());
    }

    #[test]
    fn test_assemble_and_verify() {
        let (_, csr) = signed_request(EcCurve::Secp384r1, &test_subject());
        csr.verify_signature().unwrap();
        assert_eq!(csr.subject().unwrap(), test_subject());
    }

    #[test]
    fn test_pem_roundtrip() {
        let (_, csr) = signed_request(EcCurve::Secp256r1, &test_subject());
        let pem_text = csr.to_pem().unwrap();
        assert!(pem_text.starts_with("-----BEGIN CERTIFICATE REQUEST-----"));

        let parsed = SignedCsr::from_pem(&pem_text).unwrap();
        assert_eq!(parsed.to_der().unwrap(), csr.to_der().unwrap());
    }

    #[test]
    fn test_from_pem_accepts_legacy_tag() {
        let (_, csr) = signed_request(EcCurve::Secp256r1, &test_subject());
        let der = csr.to_der().unwrap();

        let legacy = pem::encode(&pem::Pem::new("NEW CERTIFICATE REQUEST", der.clone()));
        assert_eq!(SignedCsr::from_pem(&legacy).unwrap().to_der().unwrap(), der);

        let wrong = pem::encode(&pem::Pem::new("CERTIFICATE", der));
        assert!(SignedCsr::from_pem(&wrong).is_err());
    }

    #[test]
    fn test_tampered_signature_fails_verification() {
        let (_, csr) = signed_request(EcCurve::Secp256r1, &test_subject());
        let mut der = csr.to_der().unwrap();
        let last = der.len() - 1;
        der[last] ^= 0xff;

        // Either the DER no longer parses or the signature check fails
        if let Ok(parsed) = SignedCsr::from_der(&der) {
            assert!(parsed.verify_signature().is_err());
        }
    }
}
