// SPDX-License-Identifier: MPL-2.0
//! Image resolution and the processing service client.

pub mod image;
pub mod processing;

pub use extensions::IMAGE_EXTENSIONS;
pub use image::{load_reference, ImageData, ImageReference, ReferenceKind};
pub use processing::{ProcessedImages, ProcessingClient, ProcessingOutcome, ResolvedImage};

/// Supported media extensions
pub mod extensions {
    /// Image file extensions offered by the file dialog and accepted on drop.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
    ];
}

/// Returns whether `path` has one of the supported image extensions.
pub fn is_supported_image(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}
