//! The derived-asset variant table and the per-project fan-out.
//!
//! Every non-compact project gets exactly three JPEG variants, written under
//! `output/images/` with the project slug in the filename:
//!
//! | Variant | File | Target | Transform | Quality |
//! |---|---|---|---|---|
//! | `main` | `<slug>-main.jpg` | 1920×1080 fit-within | plain resize | 90 |
//! | `side` | `<slug>-side.jpg` | 960×640 exact | fill + center crop | 90 |
//! | `thumb` | `<slug>-thumb.jpg` | 192×108 fit-within | gaussian blur σ=5 | 80 |
//!
//! The table is fixed: the page layout depends on these exact names and
//! dimensions, so they are not configurable.

use super::backend::{BackendError, ImageBackend};
use super::params::{CropParams, Quality, ResizeParams, ThumbnailParams};
use rayon::prelude::*;
use std::path::Path;

/// One of the three derived image variants.
///
/// `Main` is the default tag: an asset URL requested without naming a variant
/// refers to the full-size image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Main,
    Side,
    Thumb,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Main, Variant::Side, Variant::Thumb];

    /// The tag used in output filenames.
    pub fn tag(self) -> &'static str {
        match self {
            Variant::Main => "main",
            Variant::Side => "side",
            Variant::Thumb => "thumb",
        }
    }
}

/// Output path for a variant, relative to the build root.
///
/// Deterministic: the slug alone decides the filenames, so colliding slugs
/// overwrite each other's assets.
pub fn asset_url(slug: &str, variant: Variant) -> String {
    format!("output/images/{}-{}.jpg", slug, variant.tag())
}

/// Derive all three variants for one source image.
///
/// Variants are independent and run in parallel; the call returns only once
/// all three output files are written, or with the first error if any
/// variant fails. Files already written by sibling variants are left behind
/// on failure.
pub fn derive_assets(
    backend: &impl ImageBackend,
    source: &Path,
    root: &Path,
    slug: &str,
) -> Result<(), BackendError> {
    Variant::ALL.par_iter().try_for_each(|&variant| {
        let output = root.join(asset_url(slug, variant));
        match variant {
            Variant::Main => backend.resize(&ResizeParams {
                source: source.to_path_buf(),
                output,
                width: 1920,
                height: 1080,
                quality: Quality::new(90),
            }),
            Variant::Side => backend.crop(&CropParams {
                source: source.to_path_buf(),
                output,
                width: 960,
                height: 640,
                quality: Quality::new(90),
            }),
            Variant::Thumb => backend.thumbnail(&ThumbnailParams {
                source: source.to_path_buf(),
                output,
                width: 192,
                height: 108,
                quality: Quality::new(80),
                blur_sigma: 5.0,
            }),
        }
    })
}
