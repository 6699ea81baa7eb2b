use std::fmt;
use std::io::Read;

use bytes::Bytes;

use crate::error::SigningError;

/// Request payload.
///
/// A `Stream` can only be read once; [`Body::buffer`] turns it into `Bytes`
/// so the same payload can be both digested and transmitted.
#[derive(Default)]
pub enum Body {
    #[default]
    Empty,
    Bytes(Bytes),
    Stream(Box<dyn Read + Send>),
}

impl Body {
    pub fn stream<R: Read + Send + 'static>(reader: R) -> Self {
        Body::Stream(Box::new(reader))
    }

    /// Reads the whole payload, leaving a replayable copy in place.
    pub fn buffer(&mut self) -> Result<Bytes, SigningError> {
        match self {
            Body::Empty => Ok(Bytes::new()),
            Body::Bytes(bytes) => Ok(bytes.clone()),
            Body::Stream(reader) => {
                let mut content = Vec::new();
                reader
                    .read_to_end(&mut content)
                    .map_err(SigningError::BodyRead)?;
                let bytes = Bytes::from(content);
                *self = Body::Bytes(bytes.clone());
                Ok(bytes)
            }
        }
    }

    pub fn is_replayable(&self) -> bool {
        !matches!(self, Body::Stream(_))
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Empty => f.write_str("Empty"),
            Body::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Body::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

impl From<Bytes> for Body {
    fn from(bytes: Bytes) -> Self {
        Body::Bytes(bytes)
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Body::Bytes(Bytes::from(bytes))
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Bytes(Bytes::from(text))
    }
}

impl From<&'static str> for Body {
    fn from(text: &'static str) -> Self {
        Body::Bytes(Bytes::from_static(text.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
        }
    }

    #[test]
    fn empty_body_buffers_to_nothing() {
        let mut body = Body::Empty;
        assert!(body.buffer().unwrap().is_empty());
    }

    #[test]
    fn stream_is_replaced_by_its_bytes() {
        let mut body = Body::stream(Cursor::new(b"one-shot".to_vec()));
        assert!(!body.is_replayable());

        let first = body.buffer().unwrap();
        assert!(body.is_replayable());
        let second = body.buffer().unwrap();

        assert_eq!(&first[..], b"one-shot");
        assert_eq!(first, second);
    }

    #[test]
    fn failing_stream_reports_body_read() {
        let mut body = Body::stream(FailingReader);
        assert!(matches!(body.buffer(), Err(SigningError::BodyRead(_))));
    }
}
