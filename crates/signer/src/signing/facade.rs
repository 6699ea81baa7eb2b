use std::path::Path;

use chrono::{DateTime, Utc};
use rsa::RsaPrivateKey;
use tracing::debug;

use super::authorization::AuthorizationSigner;
use super::key::KeyIdentifier;
use super::materialize::materialize;
use super::policy::SigningMethod;
use super::request::{HttpRequestDescriptor, SignedRequest};
use super::rsa::RsaSha256Signer;
use super::signer::MessageSigner;
use crate::error::SigningError;

/// Result of handing a request to [`RequestSigner`].
#[derive(Debug)]
pub enum SigningOutcome {
    /// Every required header is present and `Authorization` is attached.
    Signed(SignedRequest),
    /// The verb is not signed (e.g. `OPTIONS`); the request is untouched.
    Unsigned(HttpRequestDescriptor),
}

impl SigningOutcome {
    pub fn is_signed(&self) -> bool {
        matches!(self, SigningOutcome::Signed(_))
    }

    pub fn signed(self) -> Option<SignedRequest> {
        match self {
            SigningOutcome::Signed(request) => Some(request),
            SigningOutcome::Unsigned(_) => None,
        }
    }
}

/// Entry point for signing outbound requests.
///
/// Fills in missing headers, then attaches the signature. Any failure aborts
/// the whole operation; callers never see a half-materialised request.
#[derive(Debug)]
pub struct RequestSigner<S = RsaSha256Signer> {
    signer: AuthorizationSigner<S>,
}

impl RequestSigner<RsaSha256Signer> {
    pub fn from_private_key(key_id: KeyIdentifier, private_key: RsaPrivateKey) -> Self {
        Self::new(key_id, RsaSha256Signer::new(private_key))
    }

    pub fn from_pem_file(
        key_id: KeyIdentifier,
        path: impl AsRef<Path>,
    ) -> Result<Self, SigningError> {
        Ok(Self::new(key_id, RsaSha256Signer::from_pem_file(path)?))
    }
}

impl<S: MessageSigner> RequestSigner<S> {
    pub fn new(key_id: KeyIdentifier, signer: S) -> Self {
        Self {
            signer: AuthorizationSigner::new(key_id, signer),
        }
    }

    pub fn key_id(&self) -> &KeyIdentifier {
        self.signer.key_id()
    }

    /// Signs `request`, stamping a missing `date` with the current time.
    pub fn sign(&self, request: HttpRequestDescriptor) -> Result<SigningOutcome, SigningError> {
        self.sign_at(request, Utc::now())
    }

    /// Signs `request` as if it were sent at `now`.
    pub fn sign_at(
        &self,
        request: HttpRequestDescriptor,
        now: DateTime<Utc>,
    ) -> Result<SigningOutcome, SigningError> {
        let method = match SigningMethod::from_name(request.method()) {
            Ok(method) => method,
            Err(_) => {
                debug!(method = request.method(), "method is not signed, passing through");
                return Ok(SigningOutcome::Unsigned(request));
            }
        };

        let materialized = materialize(request, method, now)?;
        let authorization = self.signer.sign(
            materialized.request().method(),
            &materialized.path_and_query(),
            materialized.headers(),
        )?;

        debug!(method = %method, key_id = %self.key_id(), "signed request");
        Ok(SigningOutcome::Signed(materialized.into_signed(authorization)))
    }
}
