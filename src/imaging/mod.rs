//! Image processing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode (JPEG, PNG, TIFF, WebP)** | `image` crate (pure Rust decoders) |
//! | **Fit-within resize** | `image::DynamicImage::resize` with `Lanczos3` |
//! | **Center crop** | `image::DynamicImage::resize_to_fill` |
//! | **Thumbnail blur** | `image::DynamicImage::blur` (gaussian) |
//! | **Encode → JPEG** | `image::codecs::jpeg::JpegEncoder` |
//!
//! The module is split into:
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: The fixed variant table and the per-project fan-out

pub mod backend;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use operations::{Variant, asset_url, derive_assets};
pub use params::{CropParams, Quality, ResizeParams, ThumbnailParams};
pub use rust_backend::RustBackend;
