//! Command-line front-end: scene description in, PNG out.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glint_core::{SceneConfig, TextureCache};
use glint_renderer::{render, RenderSettings};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "glint")]
#[command(about = "A small offline path tracer for sphere scenes")]
struct Args {
    /// Scene description (JSON)
    scene: PathBuf,

    /// Output image path
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Override the scene's image width
    #[arg(long)]
    width: Option<u32>,

    /// Override the scene's image height
    #[arg(long)]
    height: Option<u32>,

    /// Override the scene's samples per pixel
    #[arg(short, long)]
    samples: Option<u32>,

    /// Override the scene's render seed
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    let json = std::fs::read_to_string(&args.scene)
        .with_context(|| format!("reading scene {}", args.scene.display()))?;
    let config: SceneConfig = serde_json::from_str(&json)
        .with_context(|| format!("parsing scene {}", args.scene.display()))?;

    // Texture paths resolve relative to the scene file
    let mut textures = match args.scene.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => TextureCache::with_base_dir(dir),
        _ => TextureCache::new(),
    };
    let scene = config
        .build(&mut textures)
        .context("building scene from description")?;

    let mut settings = RenderSettings::from(&config.render);
    if let Some(width) = args.width {
        settings.width = width;
    }
    if let Some(height) = args.height {
        settings.height = height;
    }
    if let Some(samples) = args.samples {
        settings.samples_per_pixel = samples;
    }
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }

    let frame = render(&scene, &settings);

    image::save_buffer(
        &args.output,
        &frame.to_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
    )
    .with_context(|| format!("writing {}", args.output.display()))?;

    log::info!("Wrote {}", args.output.display());
    Ok(())
}
