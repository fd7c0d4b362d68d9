//! Template compilation.
//!
//! Two templates drive the whole site, read from the `template/` directory at
//! build start and compiled once into a single Tera instance:
//!
//! - `home.html` — the index page; receives `projects.html` (the concatenated
//!   project fragments, insert with `| safe`) and `projects.featured` (the
//!   featured project's view data).
//! - `project.html` — one project fragment; receives the fields of
//!   [`ProjectView`](crate::project::ProjectView).
//!
//! A missing or unparsable template file aborts the build before any other
//! work happens.

use std::path::Path;
use tera::{Context, Tera};
use thiserror::Error;

/// Template names, each mapping to `template/<name>.html`.
pub const TEMPLATE_NAMES: [&str; 2] = ["home", "project"];

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),
}

/// The compiled template set.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Read and compile every template in [`TEMPLATE_NAMES`] from `dir`.
    pub fn compile(dir: &Path) -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        for name in TEMPLATE_NAMES {
            let path = dir.join(format!("{name}.html"));
            let text = std::fs::read_to_string(&path)?;
            tera.add_raw_template(name, &text)?;
        }
        Ok(Self { tera })
    }

    /// Render a compiled template by name.
    pub fn render(&self, name: &str, context: &Context) -> Result<String, TemplateError> {
        Ok(self.tera.render(name, context)?)
    }
}
