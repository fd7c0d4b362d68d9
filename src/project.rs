//! The project entity.
//!
//! A [`Project`] wraps one non-ignored manifest record for the duration of a
//! build run. It owns the slug derived from the record's name, the memoized
//! asset-derivation outcome, and the view-data projection consumed by the
//! `project` template.
//!
//! ## Memoized processing
//!
//! [`Project::process`] must trigger asset derivation at most once per
//! instance, even when called concurrently from rayon workers. The outcome is
//! stored in a [`OnceLock`]: the first caller runs the derivation, every
//! later caller gets the stored result. Failures are stored too — retrying a
//! broken source image within one run would only fail again.

use crate::imaging::{BackendError, ImageBackend, Variant, asset_url, derive_assets};
use crate::manifest::ProjectRecord;
use crate::templates::{TemplateError, Templates};
use crate::text::{capitalize, to_slug};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tera::Context;

/// One buildable project, created from a manifest record.
///
/// Never mutated after construction except for the one-shot processing cell.
pub struct Project {
    pub name: String,
    pub url: String,
    pub blurb: String,
    pub image: String,
    pub tags: Vec<String>,
    pub roles: Vec<String>,
    pub tools: Vec<String>,
    pub featured: bool,
    pub compact: bool,
    /// Derived once from `name`; determines all asset filenames.
    pub slug: String,
    processed: OnceLock<Result<(), Arc<BackendError>>>,
}

/// The shape the `project` template renders against.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    pub name: String,
    pub blurb: String,
    pub url: String,
    pub featured: bool,
    /// Space-joined CSS class tokens: `featured` and/or `compact`.
    pub classes: String,
    pub compact: bool,
    pub tags: Vec<TagView>,
    pub tools: Vec<ToolView>,
    pub image: ImageUrls,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagView {
    pub tag: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolView {
    pub tool: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageUrls {
    pub url: String,
    pub side_url: String,
    pub tiny_url: String,
}

impl Project {
    pub fn new(record: ProjectRecord) -> Self {
        let slug = to_slug(&record.name);
        Self {
            name: record.name,
            url: record.url,
            blurb: record.blurb,
            image: record.image,
            tags: record.tags,
            roles: record.roles,
            tools: record.tools,
            featured: record.featured,
            compact: record.compact,
            slug,
            processed: OnceLock::new(),
        }
    }

    /// Path of the source image, under `<root>/projects/`.
    pub fn source_image(&self, root: &Path) -> PathBuf {
        root.join("projects").join(&self.image)
    }

    /// Output URL of a derived variant, relative to the build root.
    pub fn image_url(&self, variant: Variant) -> String {
        asset_url(&self.slug, variant)
    }

    /// Derive this project's image assets, at most once per instance.
    ///
    /// Compact projects resolve immediately without touching the backend.
    /// Repeated and concurrent calls observe the first call's outcome; a
    /// stored failure is returned as the same shared error.
    pub fn process(
        &self,
        backend: &impl ImageBackend,
        root: &Path,
    ) -> Result<(), Arc<BackendError>> {
        self.processed
            .get_or_init(|| {
                if self.compact {
                    return Ok(());
                }
                derive_assets(backend, &self.source_image(root), root, &self.slug)
                    .map_err(Arc::new)
            })
            .clone()
    }

    /// Project this entity into the shape the `project` template consumes.
    pub fn view_data(&self) -> ProjectView {
        let mut classes = Vec::new();
        if self.featured {
            classes.push("featured");
        }
        if self.compact {
            classes.push("compact");
        }

        ProjectView {
            name: self.name.clone(),
            blurb: self.blurb.clone(),
            url: self.url.clone(),
            featured: self.featured,
            classes: classes.join(" "),
            compact: self.compact,
            tags: self
                .tags
                .iter()
                .map(|t| TagView { tag: t.clone() })
                .collect(),
            tools: self
                .tools
                .iter()
                .map(|t| ToolView {
                    tool: capitalize(t),
                })
                .collect(),
            image: ImageUrls {
                url: self.image_url(Variant::Main),
                side_url: self.image_url(Variant::Side),
                tiny_url: self.image_url(Variant::Thumb),
            },
        }
    }

    /// Render the `project` template against this entity's view data.
    pub fn render(&self, templates: &Templates) -> Result<String, TemplateError> {
        let context = Context::from_serialize(self.view_data()).map_err(TemplateError::Tera)?;
        templates.render("project", &context)
    }
}
