use std::path::PathBuf;

use anyhow::Context;
use svgkit::{demo, init_logging, Config, BUILD_DATE, VERSION};

fn load_config(explicit: Option<PathBuf>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        return Config::load_from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    match Config::default_path().filter(|p| p.exists()) {
        Some(path) => Config::load_from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => {
            tracing::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;
    tracing::info!(version = VERSION, build_date = BUILD_DATE, "Starting svgkit");

    let config = load_config(std::env::args_os().nth(1).map(PathBuf::from))?;

    let mut doc = config.document();
    demo::draw(&mut doc);

    let region = doc.region();
    tracing::info!(
        shapes = doc.shape_count(),
        width = region.width(),
        height = region.height(),
        "Scene assembled"
    );

    doc.save()
        .with_context(|| format!("Failed to write {}", doc.file_name().display()))?;

    Ok(())
}
