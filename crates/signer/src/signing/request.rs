use http::Uri;
use serde::Serialize;

use super::body::Body;
use crate::error::SigningError;

/// Ordered header list with ASCII case-insensitive lookups.
///
/// Names keep the casing they were inserted with. Repeated names are kept as
/// separate entries so ambiguity can be detected at signing time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Headers(Vec<(String, String)>);

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// Replaces every entry matching `name` with a single new one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.remove(&name);
        self.0.push((name, value.into()));
    }

    pub fn remove(&mut self, name: &str) {
        self.0.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get_all(name).next().is_some()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn get_all<'a, 'n>(
        &'a self,
        name: &'n str,
    ) -> impl Iterator<Item = &'a str> + use<'a, 'n> {
        self.0
            .iter()
            .filter(move |(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Headers(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

impl<N: Into<String>, V: Into<String>> Extend<(N, V)> for Headers {
    fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.append(name, value);
        }
    }
}

impl IntoIterator for Headers {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// An outbound request before it has been signed.
#[derive(Debug)]
pub struct HttpRequestDescriptor {
    pub(crate) method: String,
    pub(crate) uri: Uri,
    pub(crate) headers: Headers,
    pub(crate) body: Body,
}

impl HttpRequestDescriptor {
    pub fn new(method: impl Into<String>, uri: &str) -> Result<Self, SigningError> {
        let parsed = uri.parse::<Uri>().map_err(|e| SigningError::InvalidUri {
            uri: uri.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_uri(method, parsed))
    }

    pub fn from_uri(method: impl Into<String>, uri: Uri) -> Self {
        Self {
            method: method.into(),
            uri,
            headers: Headers::new(),
            body: Body::Empty,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<Body>) -> Self {
        self.body = body.into();
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Raw path, followed by `?query` only when the query is non-blank.
    ///
    /// `https://host/somePath?example=path` yields `/somePath?example=path`.
    pub fn path_and_query(&self) -> String {
        let path = match self.uri.path() {
            "" => "/",
            path => path,
        };
        match self.uri.query() {
            Some(query) if !query.trim().is_empty() => format!("{path}?{query}"),
            _ => path.to_string(),
        }
    }
}

/// A request carrying every signed header plus `Authorization`.
///
/// Produced once per request and handed straight to the transport.
#[derive(Debug)]
pub struct SignedRequest {
    method: String,
    uri: Uri,
    headers: Headers,
    body: Body,
}

impl SignedRequest {
    pub(crate) fn new(request: HttpRequestDescriptor, authorization: String) -> Self {
        let HttpRequestDescriptor {
            method,
            uri,
            mut headers,
            body,
        } = request;
        headers.set("Authorization", authorization);
        Self {
            method,
            uri,
            headers,
            body,
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn authorization(&self) -> Option<&str> {
        self.headers.get("authorization")
    }

    pub fn into_parts(self) -> (String, Uri, Headers, Body) {
        (self.method, self.uri, self.headers, self.body)
    }

    /// Converts into an [`http::Request`] for any `http`-based client.
    pub fn into_http_request(self) -> Result<http::Request<Body>, http::Error> {
        let mut builder = http::Request::builder()
            .method(self.method.as_str())
            .uri(self.uri);
        for (name, value) in self.headers.iter() {
            builder = builder.header(name, value);
        }
        builder.body(self.body)
    }
}
