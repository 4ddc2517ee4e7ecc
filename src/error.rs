// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Content(String),
    Catalogue(CatalogueError),
}

/// Reasons a catalogue entry's image list can be rejected.
///
/// The modal is never opened for an entry that fails validation; the error
/// only travels to the operator log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    /// The embedded image list is not valid JSON.
    MalformedImageList(String),

    /// The image list parsed, but is not an array of strings.
    NotAStringArray,

    /// An entry of the image list is blank.
    EmptyImageReference { position: usize },
}

impl fmt::Display for CatalogueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogueError::MalformedImageList(msg) => {
                write!(f, "Malformed image list: {}", msg)
            }
            CatalogueError::NotAStringArray => {
                write!(f, "Image list must be an array of strings")
            }
            CatalogueError::EmptyImageReference { position } => {
                write!(f, "Image reference at position {} is empty", position)
            }
        }
    }
}

impl std::error::Error for CatalogueError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Content(e) => write!(f, "Content Error: {}", e),
            Error::Catalogue(e) => write!(f, "Catalogue Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogueError> for Error {
    fn from(err: CatalogueError) -> Self {
        Error::Catalogue(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogueError {
    fn from(err: serde_json::Error) -> Self {
        CatalogueError::MalformedImageList(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Catalogue(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn json_error_becomes_malformed_image_list() {
        let json_err = serde_json::from_str::<serde_json::Value>("[\"a.jpg\"").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(
            err,
            Error::Catalogue(CatalogueError::MalformedImageList(_))
        ));
    }

    #[test]
    fn catalogue_error_display_names_position() {
        let err = CatalogueError::EmptyImageReference { position: 2 };
        assert!(format!("{}", err).contains("position 2"));
    }

    #[test]
    fn catalogue_error_wraps_into_crate_error() {
        let err: Error = CatalogueError::NotAStringArray.into();
        assert_eq!(
            format!("{}", err),
            "Catalogue Error: Image list must be an array of strings"
        );
    }
}
