//! Signs outbound HTTP requests for a gateway that verifies
//! `Signature`-scheme `Authorization` headers (`rsa-sha256`).
//!
//! ```no_run
//! use fn_request_signer::{HttpRequestDescriptor, KeyIdentifier, RequestSigner};
//!
//! # fn main() -> Result<(), fn_request_signer::SigningError> {
//! let key_id = KeyIdentifier::new("tenancy", "user", "fingerprint");
//! let signer = RequestSigner::from_pem_file(key_id, "key.pem")?;
//! let request = HttpRequestDescriptor::new("POST", "https://api.example.com/v1/func")?
//!     .with_body(r#"{"x":1}"#);
//! let outcome = signer.sign(request)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod signing;

pub use config::SignerConfig;
pub use error::{ConfigError, SigningError};
pub use signing::{
    Body, Headers, HttpRequestDescriptor, KeyIdentifier, RequestSigner, SignedRequest,
    SigningOutcome,
};
