//! Interactive fractal viewer.
//!
//! Opens a window showing one fractal at a time. The arrow keys change the
//! depth and the number keys switch between fractals; see `--help` for the
//! full list. With `--snapshot` the viewer renders a single frame to a PNG
//! file instead of opening a window.

use std::{path::Path, process::ExitCode};

use fractals::Scene;
use log::{error, info};
use raster::Canvas;
use shell::{WindowDesc, WindowFlags};

mod app;
mod args;
mod config;
mod error;
mod input;
mod view;

use config::Config;
use error::Error;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Error> {
    let options = args::parse(std::env::args().skip(1))?;

    if options.help {
        println!("{}", args::USAGE);
        return Ok(());
    }

    if let Some(path) = &options.snapshot {
        return snapshot(&options.config, path);
    }

    let config = options.config;
    let desc = WindowDesc {
        title: &config.title,
        size: config.size,
        flags: WindowFlags::default(),
    };

    info!("opening {}x{} window", config.size.width, config.size.height);
    shell::run(&desc, |window| app::App::new(window, config.clone()))?;
    Ok(())
}

/// Renders the configured request once, without a window.
fn snapshot(config: &Config, path: &Path) -> Result<(), Error> {
    let mut rng = config.rng();
    let scene = Scene::build(&config.request, &config.coloring, &mut rng);

    info!(
        "rendering {} at depth {}: {} vertices",
        config.request.kind(),
        config.request.depth(),
        scene.vertex_count()
    );

    let mut canvas = Canvas::new(config.size, config.color_space);
    app::paint(&mut canvas, config.background, &scene);
    raster::save_png(&canvas, path)?;
    Ok(())
}
