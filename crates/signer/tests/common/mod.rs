#![allow(dead_code)]

use std::io::Write;
use std::sync::LazyLock;

use chrono::{DateTime, TimeZone, Utc};
use rand_chacha::ChaCha20Rng;
use rand_chacha::rand_core::SeedableRng;
use rsa::RsaPrivateKey;
use rsa::pkcs8::{EncodePrivateKey, LineEnding};
use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

static KEY: LazyLock<RsaPrivateKey> = LazyLock::new(|| {
    let hash = Sha256::digest(b"fn-request-signer integration tests");
    let mut rng = ChaCha20Rng::from_seed(hash.into());
    RsaPrivateKey::new(&mut rng, 2048).unwrap()
});

pub fn private_key() -> RsaPrivateKey {
    KEY.clone()
}

pub fn private_key_pem() -> String {
    KEY.to_pkcs8_pem(LineEnding::LF).unwrap().to_string()
}

/// Writes the test key to a temporary `.pem` file.
pub fn private_key_file() -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".pem").tempfile().unwrap();
    file.write_all(private_key_pem().as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2019, 10, 24, 9, 30, 15).unwrap()
}
