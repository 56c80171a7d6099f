use std::{error::Error, path::PathBuf};

use clap::Parser;
use cornell::{render, Camera, LightPreset, Scene};

#[derive(Parser, Debug)]
#[command(version, about = "Ray traces a small box room")]
struct Args {
    #[arg(long, default_value_t = 640)]
    width: usize,

    #[arg(long, default_value_t = 480)]
    height: usize,

    #[arg(short, long, default_value = "cornell.png")]
    output: PathBuf,

    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    yaw: f64,

    /// Clamped to [-1.2, 1.2].
    #[arg(long, default_value_t = -0.2, allow_hyphen_values = true)]
    pitch: f64,

    /// Vertical field of view in degrees.
    #[arg(long, default_value_t = 70.0)]
    fov: f64,

    /// Surface to turn into a mirror, e.g. wall-back or sphere1.
    #[arg(long = "mirror", value_name = "NAME")]
    mirrors: Vec<String>,

    /// NAME=VALUE, value clamped to [0, 1].
    #[arg(long = "transparency", value_name = "NAME=VALUE", value_parser = parse_transparency)]
    transparencies: Vec<(String, f64)>,

    /// Enables the second light at the given position.
    #[arg(long, value_enum)]
    light2: Option<LightPreset>,

    /// Open an interactive window instead of writing a file.
    #[cfg(feature = "viewer")]
    #[arg(long)]
    window: bool,
}

fn parse_transparency(s: &str) -> Result<(String, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got {s:?}"))?;
    let value = value
        .parse::<f64>()
        .map_err(|e| format!("bad transparency {value:?}: {e}"))?;
    Ok((name.to_owned(), value))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let mut scene = Scene::cornell_box();
    for name in &args.mirrors {
        scene.set_mirror(name, true)?;
    }
    for (name, value) in &args.transparencies {
        scene.set_transparency(name, *value)?;
    }
    if let Some(preset) = args.light2 {
        scene.set_second_light(true, preset);
    }

    let mut camera = Camera {
        yaw: args.yaw,
        fov: args.fov.to_radians(),
        ..Camera::default()
    };
    camera.set_pitch(args.pitch);

    let mut frame = render::frame(args.width, args.height)?;

    #[cfg(feature = "viewer")]
    if args.window {
        return cornell::viewer::run(scene, camera, frame);
    }

    render(&scene, &camera, &mut frame, |percent| {
        log::info!("rendering {}%", percent)
    });
    frame.save_png(&args.output)?;
    log::info!("saved {}", args.output.display());

    Ok(())
}
