use base64::{Engine as _, engine::general_purpose::STANDARD};
use tracing::trace;

use super::canonical::signing_string;
use super::key::KeyIdentifier;
use super::policy::SigningMethod;
use super::request::Headers;
use super::rsa::RsaSha256Signer;
use super::signer::MessageSigner;
use crate::error::SigningError;

/// Per-method data that does not change between requests.
#[derive(Debug, Clone)]
struct SigningContext {
    required: &'static [&'static str],
    headers_param: String,
}

impl SigningContext {
    fn new(method: SigningMethod) -> Self {
        let required = method.required_headers();
        Self {
            required,
            headers_param: required.join(" "),
        }
    }
}

/// Produces `Authorization: Signature ...` values for one key.
///
/// Holds only immutable state once built, so a single instance can be shared
/// by any number of threads.
#[derive(Debug)]
pub struct AuthorizationSigner<S = RsaSha256Signer> {
    key_id: KeyIdentifier,
    signer: S,
    contexts: [SigningContext; 5],
}

impl<S: MessageSigner> AuthorizationSigner<S> {
    pub fn new(key_id: KeyIdentifier, signer: S) -> Self {
        Self {
            key_id,
            signer,
            contexts: SigningMethod::ALL.map(SigningContext::new),
        }
    }

    pub fn key_id(&self) -> &KeyIdentifier {
        &self.key_id
    }

    /// Signs the canonical string for `method` and renders the header value.
    pub fn sign(
        &self,
        method: &str,
        path_and_query: &str,
        headers: &Headers,
    ) -> Result<String, SigningError> {
        let signing_method = SigningMethod::from_name(method)?;
        let context = &self.contexts[signing_method.index()];

        let canonical = signing_string(method, path_and_query, headers, context.required)?;
        trace!(method = %signing_method, %canonical, "built signing string");

        let signature = STANDARD.encode(self.signer.sign(canonical.as_bytes())?);

        Ok(format!(
            r#"Signature headers="{}",keyId="{}",algorithm="{}",signature="{}""#,
            context.headers_param,
            self.key_id,
            self.signer.algorithm(),
            signature,
        ))
    }
}
