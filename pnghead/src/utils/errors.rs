use std::io;

/// Failure modes of header parsing.
///
/// Parsing is all-or-nothing: every variant is returned as soon as it is
/// detected and no partial [`ImageSize`](crate::structs::image_size::ImageSize)
/// is ever produced.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("Not a PNG file: {0}")]
    NotPng(&'static str),

    #[error("Input ended before the IHDR dimensions could be read")]
    Truncated,

    #[error("IO error")]
    Io(#[source] io::Error),
}

impl From<io::Error> for ParseError {
    fn from(error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::UnexpectedEof => ParseError::Truncated,
            _ => ParseError::Io(error),
        }
    }
}

impl ParseError {
    pub fn is_not_png(&self) -> bool {
        matches!(self, ParseError::NotPng(_))
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, ParseError::Truncated)
    }

    pub fn is_io(&self) -> bool {
        matches!(self, ParseError::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eof_maps_to_truncated() {
        let err: ParseError = io::Error::new(io::ErrorKind::UnexpectedEof, "short read").into();
        assert!(err.is_truncated());
    }

    #[test]
    fn other_io_errors_are_kept() {
        let err: ParseError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        match err {
            ParseError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn io_cause_is_reported_once() {
        let err = ParseError::Io(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        let chain = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chain, "IO error: no such file");
        assert_eq!(chain.matches("no such file").count(), 1);
    }

    #[test]
    fn not_png_display_includes_reason() {
        let err = ParseError::NotPng("no IHDR");
        assert_eq!(err.to_string(), "Not a PNG file: no IHDR");
    }
}
