use std::fmt;

use crate::error::SigningError;

/// Pseudo-header standing for `<method> <path?query>` in the signing string.
pub const REQUEST_TARGET: &str = "(request-target)";

const BODYLESS_HEADERS: &[&str] = &["date", REQUEST_TARGET, "host"];
const BODY_HEADERS: &[&str] = &[
    "date",
    REQUEST_TARGET,
    "host",
    "content-length",
    "content-type",
    "x-content-sha256",
];

/// HTTP verbs the gateway accepts signatures for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SigningMethod {
    Get,
    Head,
    Delete,
    Put,
    Post,
}

impl SigningMethod {
    pub const ALL: [SigningMethod; 5] = [
        SigningMethod::Get,
        SigningMethod::Head,
        SigningMethod::Delete,
        SigningMethod::Put,
        SigningMethod::Post,
    ];

    /// Case-insensitive lookup. Anything outside [`Self::ALL`] is an error.
    pub fn from_name(method: &str) -> Result<Self, SigningError> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(method))
            .ok_or_else(|| SigningError::UnsupportedMethod {
                method: method.to_string(),
            })
    }

    /// Lower-case name, as it appears in the `(request-target)` line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SigningMethod::Get => "get",
            SigningMethod::Head => "head",
            SigningMethod::Delete => "delete",
            SigningMethod::Put => "put",
            SigningMethod::Post => "post",
        }
    }

    /// Ordered header names covered by the signature for this verb.
    pub fn required_headers(&self) -> &'static [&'static str] {
        if self.has_body() {
            BODY_HEADERS
        } else {
            BODYLESS_HEADERS
        }
    }

    /// Only PUT and POST bind the payload into the signature.
    pub fn has_body(&self) -> bool {
        matches!(self, SigningMethod::Put | SigningMethod::Post)
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for SigningMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header set that must be signed for `method`.
pub fn headers_for(method: &str) -> Result<&'static [&'static str], SigningError> {
    SigningMethod::from_name(method).map(|method| method.required_headers())
}
