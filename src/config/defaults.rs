// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Scale**: View transform scale bounds
//! - **Wheel**: Zoom sensitivity and wheel delta normalization
//! - **Service**: Processing endpoint and request timeout

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Scale of a freshly created viewer (1.0 = natural image size).
pub const DEFAULT_SCALE: f32 = 1.0;

/// Minimum allowed view scale.
pub const MIN_SCALE: f32 = 0.5;

/// Maximum allowed view scale.
pub const MAX_SCALE: f32 = 20.0;

// ==========================================================================
// Wheel Defaults
// ==========================================================================

/// Scale change per pixel of vertical wheel delta.
pub const DEFAULT_ZOOM_SENSITIVITY: f32 = 0.01;

/// Lowest sensitivity accepted from the config file.
pub const MIN_ZOOM_SENSITIVITY: f32 = 0.001;

/// Highest sensitivity accepted from the config file.
pub const MAX_ZOOM_SENSITIVITY: f32 = 0.1;

/// Pixels represented by one line of a line-based wheel delta.
pub const WHEEL_LINE_PIXELS: f32 = 100.0;

// ==========================================================================
// Service Defaults
// ==========================================================================

/// Processing endpoint used when neither config nor CLI provide one.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/process-image";

/// Default request timeout for the processing round trip (in seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Minimum request timeout (in seconds).
pub const MIN_TIMEOUT_SECS: u64 = 5;

/// Maximum request timeout (in seconds).
pub const MAX_TIMEOUT_SECS: u64 = 600;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SCALE > 0.0);
    assert!(MIN_SCALE <= DEFAULT_SCALE);
    assert!(MAX_SCALE >= DEFAULT_SCALE);

    assert!(MIN_ZOOM_SENSITIVITY > 0.0);
    assert!(MAX_ZOOM_SENSITIVITY >= MIN_ZOOM_SENSITIVITY);
    assert!(DEFAULT_ZOOM_SENSITIVITY >= MIN_ZOOM_SENSITIVITY);
    assert!(DEFAULT_ZOOM_SENSITIVITY <= MAX_ZOOM_SENSITIVITY);
    assert!(WHEEL_LINE_PIXELS > 0.0);

    assert!(MIN_TIMEOUT_SECS > 0);
    assert!(MAX_TIMEOUT_SECS >= MIN_TIMEOUT_SECS);
    assert!(DEFAULT_TIMEOUT_SECS >= MIN_TIMEOUT_SECS);
    assert!(DEFAULT_TIMEOUT_SECS <= MAX_TIMEOUT_SECS);
};
