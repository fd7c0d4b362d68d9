use clap::Parser;
use folio::build::{BuildConfig, run_build};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Static site builder for project portfolio pages")]
#[command(long_about = "\
Static site builder for project portfolio pages

A single projects.json manifest drives the build. Each record describes one
project; one run derives the image variants and renders index.html.

Build root layout:

  projects.json            # Project manifest (an array of records)
  template/
  ├── home.html            # Index page template
  └── project.html         # Per-project fragment template
  projects/
  └── orbital.png          # Source images, referenced by record `image`
  output/images/           # Derived variants (written by the build)
  index.html               # Rendered page (written by the build)

Record flags:
  featured   Highlighted at the top of the page (last flagged record wins)
  compact    Rendered without image assets
  ignore     Excluded from the build entirely")]
#[command(version)]
struct Cli {
    /// Build root: directory holding projects.json, template/ and projects/
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    run_build(&BuildConfig::new(cli.root))?;
    println!("==> Build complete");

    Ok(())
}
