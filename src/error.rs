// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Decode(String),
    Upload(UploadError),
}

/// Failures of the processing service round trip.
/// Each variant maps to a localized message key; the panel still shows a
/// single generic message and keeps the classification for details and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// The request never produced a response (connection refused, timeout, TLS).
    Transport(String),

    /// The service answered with a non-success status.
    /// `detail` carries the `error` field of the JSON body when present.
    Status { status: u16, detail: Option<String> },

    /// A success response whose body is not the expected JSON document.
    InvalidResponse(String),

    /// The selected file could not be read.
    Io(String),
}

impl UploadError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            UploadError::Transport(_) => "error-upload-transport",
            UploadError::Status { .. } => "error-upload-status",
            UploadError::InvalidResponse(_) => "error-upload-invalid-response",
            UploadError::Io(_) => "error-upload-io",
        }
    }
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::Transport(msg) => write!(f, "Request failed: {}", msg),
            UploadError::Status {
                status,
                detail: Some(detail),
            } => write!(f, "HTTP status {}: {}", status, detail),
            UploadError::Status {
                status,
                detail: None,
            } => write!(f, "HTTP status {}", status),
            UploadError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            UploadError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Upload(e) => write!(f, "Upload Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<UploadError> for Error {
    fn from(err: UploadError) -> Self {
        Error::Upload(err)
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

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error::Decode(err.to_string())
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
    fn status_error_includes_service_detail() {
        let err = UploadError::Status {
            status: 500,
            detail: Some("Could not read the image".into()),
        };
        assert_eq!(
            format!("{}", err),
            "HTTP status 500: Could not read the image"
        );

        let bare = UploadError::Status {
            status: 502,
            detail: None,
        };
        assert_eq!(format!("{}", bare), "HTTP status 502");
    }

    #[test]
    fn upload_error_i18n_keys() {
        assert_eq!(
            UploadError::Transport("refused".into()).i18n_key(),
            "error-upload-transport"
        );
        assert_eq!(
            UploadError::Status {
                status: 400,
                detail: None
            }
            .i18n_key(),
            "error-upload-status"
        );
        assert_eq!(
            UploadError::InvalidResponse("eof".into()).i18n_key(),
            "error-upload-invalid-response"
        );
    }

    #[test]
    fn upload_error_converts_into_crate_error() {
        let err: Error = UploadError::Io("missing".into()).into();
        assert!(matches!(err, Error::Upload(UploadError::Io(_))));
        assert_eq!(format!("{}", err), "Upload Error: I/O error: missing");
    }

    #[test]
    fn base64_error_becomes_decode_error() {
        use base64::Engine;
        let decode = base64::engine::general_purpose::STANDARD
            .decode("!!not base64!!")
            .unwrap_err();
        let err: Error = decode.into();
        assert!(matches!(err, Error::Decode(_)));
    }
}
