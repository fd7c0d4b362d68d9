//! End-to-end build against the real image backend.
//!
//! Exercises the whole pipeline on a temp directory: a two-project manifest,
//! real (tiny) source JPEGs, file templates, and the pure-Rust backend.

use folio::build::{BuildConfig, run_build};
use image::ImageEncoder;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

fn write_site_fixture(root: &Path) {
    fs::create_dir_all(root.join("template")).unwrap();
    fs::write(
        root.join("template/home.html"),
        "<html><body>\
         <section id=\"featured\">{{ projects.featured.name }} \
         ({{ projects.featured.image.tiny_url }})</section>\
         {{ projects.html | safe }}\
         </body></html>",
    )
    .unwrap();
    fs::write(
        root.join("template/project.html"),
        "<article class=\"{{ classes }}\">\
         <a href=\"{{ url }}\">{{ name }}</a>\
         <img src=\"{{ image.side_url }}\">\
         {% for t in tools %}<span>{{ t.tool }}</span>{% endfor %}\
         </article>",
    )
    .unwrap();

    fs::write(
        root.join("projects.json"),
        r#"[
            {
                "name": "Orbital",
                "url": "https://example.com/orbital",
                "blurb": "A tiny orrery",
                "image": "orbital.jpg",
                "tags": ["webgl"],
                "roles": ["code"],
                "tools": ["rust"],
                "featured": true
            },
            {
                "name": "Paper Maps",
                "url": "https://example.com/maps",
                "blurb": "Hand-drawn maps",
                "image": "maps.jpg",
                "tags": [],
                "roles": [],
                "tools": ["ink"]
            }
        ]"#,
    )
    .unwrap();

    create_test_jpeg(&root.join("projects/orbital.jpg"), 320, 200);
    create_test_jpeg(&root.join("projects/maps.jpg"), 200, 320);
}

#[test]
fn build_produces_index_and_all_image_variants() {
    let tmp = TempDir::new().unwrap();
    write_site_fixture(tmp.path());

    run_build(&BuildConfig::new(tmp.path())).unwrap();

    // All three variants exist for both projects.
    for slug in ["orbital", "paper-maps"] {
        for tag in ["main", "side", "thumb"] {
            let path = tmp.path().join(format!("output/images/{slug}-{tag}.jpg"));
            assert!(path.exists(), "missing {}", path.display());
            assert!(fs::metadata(&path).unwrap().len() > 0);
        }
        // The side variant is cropped to exact dimensions.
        let side = tmp.path().join(format!("output/images/{slug}-side.jpg"));
        assert_eq!(image::image_dimensions(&side).unwrap(), (960, 640));
    }

    let index = fs::read_to_string(tmp.path().join("index.html")).unwrap();

    // Both fragments rendered, in manifest order.
    let orbital = index.find(">Orbital</a>").unwrap();
    let maps = index.find(">Paper Maps</a>").unwrap();
    assert!(orbital < maps);

    // The featured project is referenced distinctly from its fragment.
    assert!(index.contains("<section id=\"featured\">Orbital (output/images/orbital-thumb.jpg)"));
    assert!(index.contains("class=\"featured\""));

    // Tool names are display-cased by the view projection.
    assert!(index.contains("<span>Rust</span>"));
    assert!(index.contains("<span>Ink</span>"));
}

#[test]
fn compact_project_is_rendered_without_assets() {
    let tmp = TempDir::new().unwrap();
    write_site_fixture(tmp.path());

    // Make the second project compact; its source image may even be absent.
    fs::write(
        tmp.path().join("projects.json"),
        r#"[
            {
                "name": "Orbital",
                "url": "https://example.com/orbital",
                "blurb": "A tiny orrery",
                "image": "orbital.jpg",
                "tools": ["rust"]
            },
            {
                "name": "Side Notes",
                "url": "https://example.com/notes",
                "blurb": "Short writeups",
                "image": "missing.jpg",
                "compact": true
            }
        ]"#,
    )
    .unwrap();

    run_build(&BuildConfig::new(tmp.path())).unwrap();

    let index = fs::read_to_string(tmp.path().join("index.html")).unwrap();
    assert!(index.contains(">Side Notes</a>"));
    assert!(index.contains("class=\"compact\""));
    assert!(!tmp.path().join("output/images/side-notes-main.jpg").exists());
}

#[test]
fn broken_source_image_aborts_the_build() {
    let tmp = TempDir::new().unwrap();
    write_site_fixture(tmp.path());
    fs::write(tmp.path().join("projects/orbital.jpg"), b"not an image").unwrap();

    let result = run_build(&BuildConfig::new(tmp.path()));
    assert!(result.is_err());
    // No page is written when generation fails.
    assert!(!tmp.path().join("index.html").exists());
}
