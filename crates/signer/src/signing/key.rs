use std::fmt;
use std::fs;
use std::path::Path;

use rsa::RsaPrivateKey;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;

use crate::error::SigningError;

/// The `keyId` the gateway uses to find the matching public key.
///
/// Built from `tenant/user/fingerprint`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyIdentifier(String);

impl KeyIdentifier {
    pub fn new(tenant: &str, user: &str, fingerprint: &str) -> Self {
        Self(format!("{tenant}/{user}/{fingerprint}"))
    }

    pub fn from_raw(key_id: impl Into<String>) -> Self {
        Self(key_id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reads a PEM private key from disk.
pub fn load_private_key(path: impl AsRef<Path>) -> Result<RsaPrivateKey, SigningError> {
    let path = path.as_ref();
    let pem = fs::read_to_string(path)
        .map_err(|e| SigningError::KeyLoad(format!("reading {}: {e}", path.display())))?;
    parse_private_key_pem(&pem)
}

/// Parses a PKCS#8 (`PRIVATE KEY`) or PKCS#1 (`RSA PRIVATE KEY`) PEM document.
pub fn parse_private_key_pem(pem: &str) -> Result<RsaPrivateKey, SigningError> {
    RsaPrivateKey::from_pkcs8_pem(pem).or_else(|pkcs8_error| {
        RsaPrivateKey::from_pkcs1_pem(pem).map_err(|pkcs1_error| {
            SigningError::KeyLoad(format!(
                "invalid format for private key (pkcs8: {pkcs8_error}; pkcs1: {pkcs1_error})"
            ))
        })
    })
}
