// SPDX-License-Identifier: MPL-2.0
//! Client for the remote image processing service.
//!
//! The service receives one image as a multipart upload and answers with two
//! base64 encoded PNG variants:
//!
//! ```text
//! POST {endpoint}            part "image" = <file bytes>
//! 200 { "enhancedImage": "<base64>", "denoisedImage": "<base64>" }
//! 4xx/5xx { "error": "<text>" }   (body optional)
//! ```

use crate::error::UploadError;
use crate::media::image::{load_reference, ImageData, ImageReference};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("iced_compare/", env!("CARGO_PKG_VERSION"));

/// Multipart field carrying the uploaded file.
pub const IMAGE_FIELD: &str = "image";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProcessResponse {
    enhanced_image: String,
    denoised_image: String,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: Option<String>,
}

/// References to the two variants returned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedImages {
    pub enhanced: ImageReference,
    pub denoised: ImageReference,
}

/// A reference paired with its decoded image, `None` when it could not be
/// resolved.
#[derive(Debug, Clone)]
pub struct ResolvedImage {
    pub reference: ImageReference,
    pub image: Option<ImageData>,
}

/// Both variants, ready to be shown.
#[derive(Debug, Clone)]
pub struct ProcessingOutcome {
    pub enhanced: ResolvedImage,
    pub denoised: ResolvedImage,
}

/// HTTP client bound to one processing endpoint.
#[derive(Debug, Clone)]
pub struct ProcessingClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ProcessingClient {
    /// Builds a client posting to `endpoint` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::Transport`] if the TLS backend cannot be
    /// initialized.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, UploadError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Uploads the file at `path` and returns the two variant references.
    ///
    /// # Errors
    ///
    /// - [`UploadError::Io`] if the file cannot be read
    /// - [`UploadError::Transport`] if no response arrives
    /// - [`UploadError::Status`] for a non-success status
    /// - [`UploadError::InvalidResponse`] if the body is not the expected JSON
    pub async fn process(&self, path: &Path) -> Result<ProcessedImages, UploadError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| UploadError::Io(e.to_string()))?;
        let file_name = path
            .file_name()
            .map_or_else(|| "image".to_string(), |n| n.to_string_lossy().into_owned());
        let size = bytes.len();

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(guess_mime(path))
            .map_err(|e| UploadError::Transport(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part(IMAGE_FIELD, part);

        tracing::info!(endpoint = %self.endpoint, size, "uploading image for processing");

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.error)
                .filter(|text| !text.trim().is_empty());
            return Err(UploadError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let body = response
            .json::<ProcessResponse>()
            .await
            .map_err(|e| UploadError::InvalidResponse(e.to_string()))?;

        Ok(ProcessedImages {
            enhanced: ImageReference::from_png_base64(&body.enhanced_image),
            denoised: ImageReference::from_png_base64(&body.denoised_image),
        })
    }

    /// Uploads the file and decodes both returned images.
    ///
    /// A variant that fails to decode is still returned, without image data,
    /// so the viewer can show its placeholder.
    ///
    /// # Errors
    ///
    /// Same as [`ProcessingClient::process`].
    pub async fn process_and_resolve(
        &self,
        path: &Path,
    ) -> Result<ProcessingOutcome, UploadError> {
        let images = self.process(path).await?;
        let enhanced = self.resolve(images.enhanced).await;
        let denoised = self.resolve(images.denoised).await;
        Ok(ProcessingOutcome { enhanced, denoised })
    }

    async fn resolve(&self, reference: ImageReference) -> ResolvedImage {
        let image = match load_reference(&reference, &self.client).await {
            Ok(image) => Some(image),
            Err(err) => {
                tracing::warn!(%reference, error = %err, "could not resolve returned image");
                None
            }
        };
        ResolvedImage { reference, image }
    }
}

/// MIME type for an upload, guessed from the file extension.
#[must_use]
pub fn guess_mime(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}
