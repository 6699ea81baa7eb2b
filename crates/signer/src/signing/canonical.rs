use super::policy::REQUEST_TARGET;
use super::request::Headers;
use crate::error::SigningError;

/// Builds the string that is hashed and signed.
///
/// One `name: value` line per entry of `required`, in that order, joined by
/// `\n` without a trailing newline. The remote verifier rebuilds the same
/// string from the headers it receives, so it must match byte for byte.
pub fn signing_string(
    method: &str,
    path_and_query: &str,
    headers: &Headers,
    required: &[&str],
) -> Result<String, SigningError> {
    let lines = required
        .iter()
        .map(|name| signing_line(method, path_and_query, headers, name))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}

fn signing_line(
    method: &str,
    path_and_query: &str,
    headers: &Headers,
    name: &str,
) -> Result<String, SigningError> {
    if name == REQUEST_TARGET {
        return Ok(format!(
            "{REQUEST_TARGET}: {} {path_and_query}",
            method.to_lowercase()
        ));
    }

    let mut values = headers.get_all(name);
    let value = values
        .next()
        .ok_or_else(|| SigningError::MissingRequiredHeader(name.to_string()))?;
    if values.next().is_some() {
        return Err(SigningError::AmbiguousHeader(name.to_string()));
    }
    Ok(format!("{name}: {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signing::policy::headers_for;

    fn get_headers() -> Headers {
        [
            ("Date", "Sat, 07 Jun 2014 20:51:35 GMT"),
            ("Host", "example.com"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn get_signing_string() {
        let required = headers_for("GET").unwrap();
        let signing = signing_string("GET", "/foo?param=value", &get_headers(), required).unwrap();
        assert_eq!(
            signing,
            "date: Sat, 07 Jun 2014 20:51:35 GMT\n\
             (request-target): get /foo?param=value\n\
             host: example.com"
        );
    }

    #[test]
    fn no_trailing_newline() {
        let required = headers_for("DELETE").unwrap();
        let signing = signing_string("DELETE", "/x", &get_headers(), required).unwrap();
        assert!(!signing.ends_with('\n'));
        assert_eq!(signing.lines().count(), 3);
    }

    #[test]
    fn post_signing_string_follows_policy_order() {
        let headers: Headers = [
            ("x-content-sha256", "digest"),
            ("content-type", "application/json"),
            ("content-length", "7"),
            ("host", "api.example.com"),
            ("date", "Sat, 07 Jun 2014 20:51:35 GMT"),
        ]
        .into_iter()
        .collect();
        let required = headers_for("post").unwrap();
        let signing = signing_string("post", "/v1/func", &headers, required).unwrap();
        assert_eq!(
            signing,
            "date: Sat, 07 Jun 2014 20:51:35 GMT\n\
             (request-target): post /v1/func\n\
             host: api.example.com\n\
             content-length: 7\n\
             content-type: application/json\n\
             x-content-sha256: digest"
        );
    }

    #[test]
    fn missing_header_is_named() {
        let headers: Headers = [("date", "now")].into_iter().collect();
        let required = headers_for("GET").unwrap();
        match signing_string("GET", "/", &headers, required) {
            Err(SigningError::MissingRequiredHeader(name)) => assert_eq!(name, "host"),
            other => panic!("expected MissingRequiredHeader, got {other:?}"),
        }
    }

    #[test]
    fn repeated_header_is_ambiguous() {
        let mut headers = get_headers();
        headers.append("host", "other.example.com");
        let required = headers_for("GET").unwrap();
        match signing_string("GET", "/", &headers, required) {
            Err(SigningError::AmbiguousHeader(name)) => assert_eq!(name, "host"),
            other => panic!("expected AmbiguousHeader, got {other:?}"),
        }
    }
}
