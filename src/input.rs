use std::io;
use std::path::{Path, PathBuf};

use pnghead::{ImageSize, ParseError};

/// Where a PNG header is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Use "-" for stdin pipe input
    pub fn new<P: AsRef<Path>>(input_path: P) -> Self {
        let path = input_path.as_ref();
        if path.as_os_str() == "-" {
            Input::Stdin
        } else {
            Input::File(path.to_path_buf())
        }
    }

    pub fn is_pipe(&self) -> bool {
        matches!(self, Input::Stdin)
    }

    /// Reads just enough of the input to decode the IHDR dimensions.
    pub fn read_size(&self) -> Result<ImageSize, ParseError> {
        match self {
            Input::Stdin => pnghead::parse_reader(io::stdin().lock()),
            Input::File(path) => pnghead::parse_path(path),
        }
    }

    /// Name used in reports and error messages.
    pub fn display_name(&self) -> String {
        match self {
            Input::Stdin => "-".to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_means_stdin() {
        assert!(Input::new("-").is_pipe());
        assert_eq!(Input::new("-").display_name(), "-");

        let input = Input::new("dir/a.png");
        assert!(!input.is_pipe());
        assert_eq!(input, Input::File(PathBuf::from("dir/a.png")));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Input::new("no/such/file.png").read_size().unwrap_err();
        assert!(err.is_io());
    }
}
