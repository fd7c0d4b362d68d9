//! The four-phase build pipeline.
//!
//! [`run_build`] is the single entry point: compile templates, load the
//! manifest, derive image assets for every project, render the home page, and
//! write the output. Each phase is an explicit function taking the prior
//! phase's output; any failure anywhere aborts the run.
//!
//! ```text
//! Compile   template/{home,project}.html  →  Templates
//! Load      projects.json                 →  (Vec<Project>, featured index)
//! Generate  projects                      →  pages (filename → html)
//! Write     pages                         →  files on disk
//! ```
//!
//! The generate phase fans out `process()` across projects with rayon and
//! fails fast: one broken source image aborts the whole build. Assets already
//! written by other projects are left on disk — there is no rollback.

use crate::imaging::{BackendError, ImageBackend, RustBackend};
use crate::manifest::{self, ManifestError};
use crate::project::Project;
use crate::templates::{TemplateError, Templates};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tera::Context;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("asset derivation for `{slug}` failed: {source}")]
    Derive {
        slug: String,
        #[source]
        source: Arc<BackendError>,
    },
    #[error("manifest contains no buildable projects")]
    EmptyManifest,
}

/// Where a build reads from and writes to.
///
/// Everything is anchored at one root directory: `projects.json`,
/// `template/`, and `projects/` (source images) are read from it, and
/// `index.html` plus `output/images/` are written back into it.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub root: PathBuf,
}

impl BuildConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join("projects.json")
    }

    pub fn template_dir(&self) -> PathBuf {
        self.root.join("template")
    }

    pub fn images_dir(&self) -> PathBuf {
        self.root.join("output").join("images")
    }
}

/// Pages produced by the generate phase, keyed by output filename.
///
/// Nothing is written to disk until every page has rendered.
pub type Pages = BTreeMap<String, String>;

/// Run the full pipeline with the production image backend.
pub fn run_build(config: &BuildConfig) -> Result<(), BuildError> {
    run_build_with_backend(&RustBackend::new(), config)
}

/// Run the full pipeline with a specific backend (allows testing with mock).
pub fn run_build_with_backend(
    backend: &impl ImageBackend,
    config: &BuildConfig,
) -> Result<(), BuildError> {
    println!("==> Compiling templates");
    let templates = Templates::compile(&config.template_dir())?;

    println!("==> Loading {}", config.manifest_path().display());
    let (projects, featured) = load_projects(&config.manifest_path())?;

    println!("==> Generating ({} projects)", projects.len());
    let pages = generate(backend, config, &templates, &projects, featured)?;

    println!("==> Writing output");
    write_out(config, &pages)?;

    Ok(())
}

/// Load phase: manifest records become `Project` entities.
///
/// Ignored records are dropped; order is preserved. When several records are
/// flagged featured, the last one in manifest order wins.
pub fn load_projects(
    manifest_path: &Path,
) -> Result<(Vec<Project>, Option<usize>), ManifestError> {
    let records = manifest::load_manifest(manifest_path)?;

    let mut projects = Vec::new();
    let mut featured = None;
    for record in records {
        if record.ignore {
            continue;
        }
        if record.featured {
            featured = Some(projects.len());
        }
        projects.push(Project::new(record));
    }

    Ok((projects, featured))
}

/// Generate phase: derive assets for all projects, then render the pages.
///
/// Asset derivation fans out across projects; rendering happens only after
/// every derivation has finished. The featured project is the explicitly
/// flagged one, or the first in manifest order when none is flagged.
pub fn generate(
    backend: &impl ImageBackend,
    config: &BuildConfig,
    templates: &Templates,
    projects: &[Project],
    featured: Option<usize>,
) -> Result<Pages, BuildError> {
    if projects.is_empty() {
        return Err(BuildError::EmptyManifest);
    }

    std::fs::create_dir_all(config.images_dir())?;

    projects.par_iter().try_for_each(|project| {
        println!("  {}", project.slug);
        project
            .process(backend, &config.root)
            .map_err(|source| BuildError::Derive {
                slug: project.slug.clone(),
                source,
            })
    })?;

    let featured_view = projects[featured.unwrap_or(0)].view_data();

    let fragments: Vec<String> = projects
        .iter()
        .map(|p| p.render(templates))
        .collect::<Result<_, _>>()?;

    let mut context = Context::new();
    context.insert(
        "projects",
        &serde_json::json!({
            "html": fragments.join("\n"),
            "featured": featured_view,
        }),
    );

    let mut pages = Pages::new();
    pages.insert("index.html".to_string(), templates.render("home", &context)?);
    Ok(pages)
}

/// Write phase: flush every rendered page to disk, overwriting existing
/// files. Synchronous and sequential.
pub fn write_out(config: &BuildConfig, pages: &Pages) -> Result<(), BuildError> {
    for (filename, content) in pages {
        std::fs::write(config.root.join(filename), content)?;
        println!("  {filename}");
    }
    Ok(())
}
