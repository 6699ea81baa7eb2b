use base64::{Engine as _, engine::general_purpose::STANDARD};
use sha2::{Digest, Sha256};

/// Base64 SHA-256 of a request body together with its length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDigest {
    pub sha256: String,
    pub length: usize,
}

impl ContentDigest {
    /// Value for the `content-length` header.
    pub fn content_length(&self) -> String {
        self.length.to_string()
    }
}

/// Digests `body`. An absent body is passed as an empty slice.
pub fn content_digest(body: &[u8]) -> ContentDigest {
    ContentDigest {
        sha256: STANDARD.encode(Sha256::digest(body)),
        length: body.len(),
    }
}
