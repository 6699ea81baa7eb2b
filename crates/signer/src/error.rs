use std::io;
use std::path::PathBuf;

/// Errors produced while materialising or signing a request.
///
/// Every variant is terminal for a single signing attempt; the caller decides
/// whether the enclosing operation is retried.
#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    #[error("Don't know how to sign method {method}")]
    UnsupportedMethod { method: String },
    #[error("Cannot derive host header: URI {uri} has no host")]
    MissingHost { uri: String },
    #[error("Missing required header: {0}")]
    MissingRequiredHeader(String),
    #[error("Expected one value for header {0}")]
    AmbiguousHeader(String),
    #[error("Failed to load private key: {0}")]
    KeyLoad(String),
    #[error("Failed to generate signature: {0}")]
    SigningFailure(#[from] rsa::signature::Error),
    #[error("Invalid request URI {uri}: {reason}")]
    InvalidUri { uri: String, reason: String },
    #[error("Failed to copy request body: {0}")]
    BodyRead(#[source] io::Error),
}

/// Errors raised while validating connector configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Private key should be of type PEM with a .pem extension: {}", .0.display())]
    PrivateKeyNotPem(PathBuf),
    #[error("Invalid function URL {url}: {reason}")]
    InvalidFunctionUrl { url: String, reason: String },
    #[error(transparent)]
    Signing(#[from] SigningError),
}
