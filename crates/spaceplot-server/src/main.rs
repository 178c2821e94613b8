//! Serve a scene on a self-refreshing preview page.
//!
//! Usage: `spaceplot [scene.json]`
//!
//! Without an argument a small demo scene is served. Set `RUST_LOG=debug`
//! to see each request.

use spaceplot_scene::{Color, DataPoint, DataSpace};
use spaceplot_server::{serve, shared, Result, ServerConfig};
use std::path::Path;

fn demo_space() -> DataSpace {
    let mut space = DataSpace::new();
    space.push(
        DataPoint::new(0.0, 0.0, 0.0, Color::rgb(255, 0, 0))
            .with_label("origin")
            .with_class("reference"),
    );
    space.push(
        DataPoint::new(1.0, 2.0, 3.0, Color::rgb(0, 0, 255))
            .with_label("sample")
            .with_class("measured"),
    );
    space
}

fn load_space(path: &Path) -> Result<DataSpace> {
    let text = std::fs::read_to_string(path)?;
    let space: DataSpace = serde_json::from_str(&text)?;
    log::info!(
        "loaded {} data points from {}",
        space.data.len(),
        path.display()
    );
    Ok(space)
}

fn run() -> Result<()> {
    let space = match std::env::args_os().nth(1) {
        Some(path) => load_space(Path::new(&path))?,
        None => demo_space(),
    };
    serve(ServerConfig::default(), shared(space))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
