//! Shared test utilities for the folio test suite.

use crate::manifest::ProjectRecord;
use crate::text::to_slug;
use std::fs;
use std::path::Path;

/// A minimal valid record; `image` is `<slug>.jpg` so tests can predict
/// source paths.
pub fn sample_record(name: &str) -> ProjectRecord {
    ProjectRecord {
        name: name.to_string(),
        url: format!("https://example.com/{}", to_slug(name)),
        blurb: format!("{name} blurb"),
        image: format!("{}.jpg", to_slug(name)),
        tags: Vec::new(),
        roles: Vec::new(),
        tools: Vec::new(),
        featured: false,
        compact: false,
        ignore: false,
    }
}

/// Write minimal `home` and `project` templates under `<root>/template/`.
///
/// The project fragment wraps the name in a marker so tests can assert on
/// the rendered output; the home template splices the fragment block and
/// references the featured project distinctly.
pub fn write_templates(root: &Path) {
    let dir = root.join("template");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("home.html"),
        "<html><body>\
         <h1>featured: {{ projects.featured.name }}</h1>\
         {{ projects.html | safe }}\
         </body></html>",
    )
    .unwrap();
    fs::write(
        dir.join("project.html"),
        "<article class=\"{{ classes }}\">[{{ name }}]</article>",
    )
    .unwrap();
}

/// Write a `projects.json` with the given body under `root`.
pub fn write_manifest(root: &Path, json: &str) {
    fs::write(root.join("projects.json"), json).unwrap();
}
