use std::path::PathBuf;

use http::Uri;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::signing::{Body, HttpRequestDescriptor, KeyIdentifier, RequestSigner};

/// Connection settings for invoking a function endpoint.
///
/// Usable as clap flags (each backed by an env var) or deserialised from a
/// connector property map keyed by the same snake_case names.
#[derive(Debug, Clone, clap::Args, Deserialize)]
pub struct SignerConfig {
    /// Root tenancy OCID
    #[clap(long, env = "TENANT_OCID")]
    pub tenant_ocid: String,
    /// User OCID
    #[clap(long, env = "USER_OCID")]
    pub user_ocid: String,
    /// Public key fingerprint
    #[clap(long, env = "PUBLIC_FINGERPRINT")]
    pub public_fingerprint: String,
    /// Private key (.pem) location
    #[clap(long, env = "PRIVATE_KEY_LOCATION")]
    pub private_key_location: PathBuf,
    /// Function endpoint URL
    #[clap(long, env = "FUNCTION_URL")]
    pub function_url: String,
}

impl SignerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let is_pem = self
            .private_key_location
            .extension()
            .is_some_and(|extension| extension == "pem");
        if !is_pem {
            return Err(ConfigError::PrivateKeyNotPem(
                self.private_key_location.clone(),
            ));
        }
        self.function_uri()?;
        Ok(())
    }

    pub fn key_id(&self) -> KeyIdentifier {
        KeyIdentifier::new(&self.tenant_ocid, &self.user_ocid, &self.public_fingerprint)
    }

    /// Loads the private key and builds a signer for this identity.
    pub fn request_signer(&self) -> Result<RequestSigner, ConfigError> {
        self.validate()?;
        Ok(RequestSigner::from_pem_file(
            self.key_id(),
            &self.private_key_location,
        )?)
    }

    /// A request to the function endpoint, e.g. the `POST` forwarding one
    /// message payload.
    pub fn function_request(
        &self,
        method: &str,
        body: impl Into<Body>,
    ) -> Result<HttpRequestDescriptor, ConfigError> {
        Ok(HttpRequestDescriptor::from_uri(method, self.function_uri()?).with_body(body))
    }

    fn function_uri(&self) -> Result<Uri, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidFunctionUrl {
            url: self.function_url.clone(),
            reason: reason.to_string(),
        };
        let uri = self
            .function_url
            .parse::<Uri>()
            .map_err(|e| invalid(&e.to_string()))?;
        if uri.scheme().is_none() || uri.host().is_none() {
            return Err(invalid("expected an absolute URL with a host"));
        }
        Ok(uri)
    }
}
