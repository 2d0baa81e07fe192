// SPDX-License-Identifier: MPL-2.0
//! Image references and decoding.
//!
//! A viewer is handed an [`ImageReference`], an opaque string that is either
//! a `data:` URI, an `http(s)://` URL, a `file://` URL or a plain filesystem
//! path. [`load_reference`] resolves it to decoded [`ImageData`].

use crate::error::{Error, Result};
use base64::Engine;
use iced::widget::image;
use std::fmt;
use std::path::PathBuf;

const DATA_URI_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64";

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Opaque locator of an image to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference(String);

/// How an [`ImageReference`] is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceKind<'a> {
    /// `data:` URI carrying the encoded image inline.
    Inline(&'a str),
    /// `http://` or `https://` URL fetched over the network.
    Remote(&'a str),
    /// File on the local filesystem.
    Local(PathBuf),
}

impl ImageReference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Wraps a base64 PNG payload returned by the processing service.
    #[must_use]
    pub fn from_png_base64(payload: &str) -> Self {
        Self(format!("data:image/png;base64,{payload}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn kind(&self) -> ReferenceKind<'_> {
        let reference = self.0.trim();
        if starts_with_ignore_case(reference, DATA_URI_PREFIX) {
            ReferenceKind::Inline(reference)
        } else if starts_with_ignore_case(reference, "http://")
            || starts_with_ignore_case(reference, "https://")
        {
            ReferenceKind::Remote(reference)
        } else if starts_with_ignore_case(reference, "file://") {
            ReferenceKind::Local(file_url_to_path(&reference["file://".len()..]))
        } else {
            ReferenceKind::Local(PathBuf::from(reference))
        }
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Inline payloads can be megabytes long.
        match self.kind() {
            ReferenceKind::Inline(uri) => {
                let header = uri.split(',').next().unwrap_or(uri);
                write!(f, "{header},<{} bytes>", uri.len())
            }
            _ => f.write_str(&self.0),
        }
    }
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

fn file_url_to_path(rest: &str) -> PathBuf {
    // file:///C:/dir/img.png -> C:/dir/img.png
    let bytes = rest.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'/' && bytes[2] == b':' && bytes[1].is_ascii_alphabetic() {
        return PathBuf::from(&rest[1..]);
    }
    // file://localhost/tmp/img.png -> /tmp/img.png
    if let Some(stripped) = rest.strip_prefix("localhost") {
        return PathBuf::from(stripped);
    }
    PathBuf::from(rest)
}

/// Extracts the encoded bytes from a base64 `data:` URI.
///
/// # Errors
///
/// Returns [`Error::Decode`] when the URI is malformed, is not base64 encoded
/// or carries an invalid payload.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>> {
    let uri = uri.trim();
    if !starts_with_ignore_case(uri, DATA_URI_PREFIX) {
        return Err(Error::Decode("not a data URI".to_string()));
    }
    let (header, payload) = uri[DATA_URI_PREFIX.len()..]
        .split_once(',')
        .ok_or_else(|| Error::Decode("data URI has no payload".to_string()))?;
    if !header.to_ascii_lowercase().ends_with(BASE64_MARKER) {
        return Err(Error::Decode(format!(
            "unsupported data URI encoding: {header}"
        )));
    }

    let payload: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(base64::engine::general_purpose::STANDARD.decode(payload)?)
}

/// Decodes encoded image bytes (PNG, JPEG, ...) into RGBA image data.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the format is unknown or the data is corrupt.
pub fn decode_bytes(bytes: &[u8]) -> Result<ImageData> {
    let decoded = image_rs::load_from_memory(bytes)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageData::from_rgba(width, height, rgba.into_raw()))
}

/// Resolves a reference to decoded image data.
///
/// Remote references are fetched with `client`.
///
/// # Errors
///
/// Returns [`Error::Io`] when the bytes cannot be obtained and
/// [`Error::Decode`] when they do not form a supported image.
pub async fn load_reference(
    reference: &ImageReference,
    client: &reqwest::Client,
) -> Result<ImageData> {
    let bytes = match reference.kind() {
        ReferenceKind::Inline(uri) => decode_data_uri(uri)?,
        ReferenceKind::Remote(url) => fetch(client, url).await?,
        ReferenceKind::Local(path) => tokio::fs::read(&path).await?,
    };
    decode_bytes(&bytes)
}

async fn fetch(client: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::Io(e.to_string()))?;

    if !response.status().is_success() {
        return Err(Error::Io(format!("HTTP status: {}", response.status())));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::Io(e.to_string()))?;
    Ok(bytes.to_vec())
}
