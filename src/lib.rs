//! # Folio
//!
//! A minimal static site builder for project portfolio pages. A single
//! `projects.json` manifest is the data source: each record describes one
//! project (name, blurb, link, source image, tags, tools), and one build run
//! turns the manifest into derived image assets plus a rendered `index.html`.
//!
//! # Architecture: Four-Phase Pipeline
//!
//! A build runs four strictly sequential phases; no phase starts before the
//! prior one has fully settled, and any failure aborts the whole run:
//!
//! ```text
//! 1. Compile   template/{home,project}.html  →  compiled templates
//! 2. Load      projects.json                 →  ordered Project entities
//! 3. Generate  projects                      →  image variants + rendered pages
//! 4. Write     pages                         →  index.html
//! ```
//!
//! Phase 3 fans out across projects with rayon: each project derives its
//! fixed set of JPEG variants (full, cropped side, blurred thumbnail)
//! independently, since every project owns a disjoint set of output paths.
//! Derivation is memoized per project, so repeated triggers are free.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`text`] | Slug derivation and display-casing helpers |
//! | [`manifest`] | `projects.json` data model and loading |
//! | [`imaging`] | Backend trait, pure-Rust backend, and the variant table |
//! | [`project`] | One manifest record as an entity: urls, memoized processing, view data |
//! | [`templates`] | Compiles the two Tera templates consumed by rendering |
//! | [`build`] | The four-phase pipeline and its entry point [`build::run_build`] |
//!
//! # Design Decisions
//!
//! ## Tera Over Compile-Time HTML
//!
//! Templates are user-editable files shipped next to the manifest, so HTML is
//! rendered with [Tera](https://keats.github.io/tera/) rather than a
//! compile-time macro system. Both templates are read and compiled once at
//! build start; a broken template aborts the run before any image work
//! happens.
//!
//! ## Pure-Rust Imaging
//!
//! The [`imaging`] module uses the `image` crate (Lanczos3 resampling, JPEG
//! encoding) — no ImageMagick, no system dependencies. The binary is fully
//! self-contained. All derived assets are baseline JPEG; the three variants
//! per project are fixed (see [`imaging::operations`]).
//!
//! ## Fatal Error Model
//!
//! This is a build-time tool with a human operator: every error — unreadable
//! manifest, broken template, undecodable source image, failed write — is
//! fatal and surfaced as-is. There is no retry, no partial-page fallback, and
//! no rollback of asset files already written by a partially failed fan-out.

pub mod build;
pub mod imaging;
pub mod manifest;
pub mod project;
pub mod templates;
pub mod text;

#[cfg(test)]
pub(crate) mod test_helpers;
