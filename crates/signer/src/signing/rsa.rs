use std::fmt;
use std::path::Path;

use rsa::RsaPrivateKey;
use rsa::pkcs1v15::{SigningKey, VerifyingKey};
use rsa::signature::{Keypair, SignatureEncoding, Signer};
use sha2::Sha256;

use super::key::{load_private_key, parse_private_key_pem};
use super::signer::MessageSigner;
use crate::error::SigningError;

pub const RSA_SHA256: &str = "rsa-sha256";

/// RSA PKCS#1 v1.5 signer with SHA-256 digest (`rsa-sha256`).
pub struct RsaSha256Signer {
    signing_key: SigningKey<Sha256>,
}

impl RsaSha256Signer {
    pub fn new(private_key: RsaPrivateKey) -> Self {
        Self {
            signing_key: SigningKey::<Sha256>::new(private_key),
        }
    }

    pub fn from_pem(pem: &str) -> Result<Self, SigningError> {
        parse_private_key_pem(pem).map(Self::new)
    }

    pub fn from_pem_file(path: impl AsRef<Path>) -> Result<Self, SigningError> {
        load_private_key(path).map(Self::new)
    }

    /// Public half, for callers that want to check their own signatures.
    pub fn verifying_key(&self) -> VerifyingKey<Sha256> {
        self.signing_key.verifying_key()
    }
}

impl MessageSigner for RsaSha256Signer {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, SigningError> {
        let signature = self.signing_key.try_sign(data)?;
        Ok(signature.to_vec())
    }

    fn algorithm(&self) -> &str {
        RSA_SHA256
    }
}

impl fmt::Debug for RsaSha256Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaSha256Signer").finish_non_exhaustive()
    }
}
