//! Image processing backend trait and shared error type.
//!
//! The [`ImageBackend`] trait defines the three operations a backend must
//! support — resize, crop, and thumbnail — one per derived variant. The
//! production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend); tests use the recording
//! [`MockBackend`](tests::MockBackend).

use super::params::{CropParams, ResizeParams, ThumbnailParams};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Trait for image processing backends.
///
/// Implementations must be `Sync`: the build fans out across projects with
/// rayon and shares one backend between all workers.
pub trait ImageBackend: Sync {
    /// Fit-within resize, preserving aspect ratio.
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError>;

    /// Fill-resize plus center crop to exact dimensions.
    fn crop(&self, params: &CropParams) -> Result<(), BackendError>;

    /// Fit-within resize followed by a gaussian blur.
    fn thumbnail(&self, params: &ThumbnailParams) -> Result<(), BackendError>;
}
