use chrono::{DateTime, Utc};
use tracing::debug;

use super::digest::content_digest;
use super::policy::SigningMethod;
use super::request::{Headers, HttpRequestDescriptor, SignedRequest};
use crate::error::SigningError;

const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Formats `now` as an RFC 2822 date in GMT, e.g. `Tue, 07 Jun 2014 20:51:35 GMT`.
pub fn http_date(now: DateTime<Utc>) -> String {
    now.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// A request whose signed headers are all present.
#[derive(Debug)]
pub struct MaterializedRequest {
    request: HttpRequestDescriptor,
}

impl MaterializedRequest {
    pub fn request(&self) -> &HttpRequestDescriptor {
        &self.request
    }

    pub fn headers(&self) -> &Headers {
        self.request.headers()
    }

    pub fn path_and_query(&self) -> String {
        self.request.path_and_query()
    }

    pub fn into_signed(self, authorization: String) -> SignedRequest {
        SignedRequest::new(self.request, authorization)
    }
}

/// Adds whichever of `date`, `host`, `content-type`, `content-length` and
/// `x-content-sha256` the caller left out. Existing headers are never touched.
///
/// The body is buffered only when a length or digest header has to be
/// computed; a one-shot stream is left behind as replayable bytes.
pub fn materialize(
    mut request: HttpRequestDescriptor,
    method: SigningMethod,
    now: DateTime<Utc>,
) -> Result<MaterializedRequest, SigningError> {
    let mut added = Headers::new();

    if !request.headers.contains("date") {
        added.append("date", http_date(now));
    }

    if !request.headers.contains("host") {
        let host = request
            .uri
            .host()
            .ok_or_else(|| SigningError::MissingHost {
                uri: request.uri.to_string(),
            })?;
        added.append("host", host);
    }

    if method.has_body() {
        if !request.headers.contains("content-type") {
            added.append("content-type", DEFAULT_CONTENT_TYPE);
        }

        let has_length = request.headers.contains("content-length");
        let has_digest = request.headers.contains("x-content-sha256");
        if !has_length || !has_digest {
            let body = request.body.buffer()?;
            let digest = content_digest(&body);
            if !has_length {
                added.append("content-length", digest.content_length());
            }
            if !has_digest {
                added.append("x-content-sha256", digest.sha256);
            }
        }
    }

    if !added.is_empty() {
        debug!(
            method = %method,
            added = ?added.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            "filled in missing headers"
        );
    }
    request.headers.extend(added);

    Ok(MaterializedRequest { request })
}
