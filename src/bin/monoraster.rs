//! monoraster - render the demo scenes to PBM (and optionally PNG) files.

use clap::{Parser, ValueEnum};
use monoraster::prelude::*;
use std::path::PathBuf;

/// Directions on the unit circle at 20° steps, scaled by 1000.
const STAR: [(i32, i32); 18] = [
    (1000, 0),
    (940, 342),
    (766, 643),
    (500, 866),
    (174, 985),
    (-174, 985),
    (-500, 866),
    (-766, 643),
    (-940, 342),
    (-1000, 0),
    (-940, -342),
    (-766, -643),
    (-500, -866),
    (-174, -985),
    (174, -985),
    (500, -866),
    (766, -643),
    (940, -342),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Accumulating-error Bresenham stepping.
    Bresenham,
    /// Midpoint decision-variable stepping.
    Midpoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Shape borders only.
    Contour,
    /// Interiors swept with horizontal spans.
    Fill,
}

impl From<Mode> for DrawMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Contour => DrawMode::Contour,
            Mode::Fill => DrawMode::Fill,
        }
    }
}

/// Rasterize three demo scenes with the chosen algorithm family.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Image width in pixels.
    #[arg(long, default_value_t = 300)]
    width: u32,

    /// Image height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Algorithm family used for every shape.
    #[arg(long, value_enum, default_value = "bresenham")]
    algorithm: Algorithm,

    /// Contour or filled rendering of circles and ellipses.
    #[arg(long, value_enum, default_value = "contour")]
    mode: Mode,

    /// Directory the scene files are written into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Also write a PNG next to each PBM.
    #[arg(long)]
    png: bool,

    /// Print each scene to the terminal.
    #[arg(long)]
    preview: bool,
}

fn draw<D: Drawable, S: PixelSink>(
    shape: &D,
    marker: &mut Marker<S>,
    algorithm: Algorithm,
) -> monoraster::Result<()> {
    match algorithm {
        Algorithm::Bresenham => shape.draw(marker),
        Algorithm::Midpoint => shape.draw_midpoint(marker),
    }
}

/// Concentric circles around the center plus a few short segments.
fn scene_shapes(args: &Args) -> monoraster::Result<Bitmap> {
    let xc = args.width as i32 / 2;
    let yc = args.height as i32 / 2;

    let mut bitmap = Bitmap::new(args.width, args.height)?;
    let mut marker = Marker::with_mode(&mut bitmap, args.mode.into());

    marker.point(xc, yc);
    for radius in [54, 100, 200] {
        draw(&Circle::from_coords(xc, yc, radius), &mut marker, args.algorithm)?;
    }
    draw(&Line::from_coords(10, 20, 5, 35), &mut marker, args.algorithm)?;
    draw(&Line::from_coords(15, 20, 2, 23), &mut marker, args.algorithm)?;

    drop(marker);
    Ok(bitmap)
}

/// Segments from the center in 18 directions, a line-octant exercise.
fn scene_star(args: &Args) -> monoraster::Result<Bitmap> {
    let xc = args.width as i32 / 2;
    let yc = args.height as i32 / 2;
    let radius = (xc.min(yc) * 9 / 10).max(1);

    let mut bitmap = Bitmap::new(args.width, args.height)?;
    let mut marker = Marker::with_mode(&mut bitmap, args.mode.into());

    for (dx, dy) in STAR {
        let line = Line::from_coords(xc, yc, xc + dx * radius / 1000, yc + dy * radius / 1000);
        draw(&line, &mut marker, args.algorithm)?;
    }

    drop(marker);
    Ok(bitmap)
}

/// A single tall ellipse around the center.
fn scene_ellipse(args: &Args) -> monoraster::Result<Bitmap> {
    let xc = args.width as i32 / 2;
    let yc = args.height as i32 / 2;
    let rx = (args.width as i32 * 4 / 15).max(1);
    let ry = (args.height as i32 * 7 / 30).max(1);

    let mut bitmap = Bitmap::new(args.width, args.height)?;
    let mut marker = Marker::with_mode(&mut bitmap, args.mode.into());

    draw(&Ellipse::from_coords(xc, yc, rx, ry), &mut marker, args.algorithm)?;

    drop(marker);
    Ok(bitmap)
}

fn write_scene(args: &Args, name: &str, bitmap: &Bitmap) -> monoraster::Result<()> {
    let pbm_path = args.out_dir.join(format!("{name}.pbm"));
    PbmEncoder::write_to_file(bitmap, &pbm_path)?;
    log::info!("wrote {}", pbm_path.display());

    if args.png {
        let png_path = args.out_dir.join(format!("{name}.png"));
        PngEncoder::write_to_file(bitmap, &png_path)?;
        log::info!("wrote {}", png_path.display());
    }

    if args.preview {
        println!("{name}:");
        print!("{}", TerminalEncoder::new().render(bitmap));
    }

    Ok(())
}

fn main() -> monoraster::Result<()> {
    env_logger::init();
    let args = Args::parse();

    log::debug!(
        "rendering {}x{} scenes with {:?}/{:?}",
        args.width,
        args.height,
        args.algorithm,
        args.mode
    );

    write_scene(&args, "shapes", &scene_shapes(&args)?)?;
    write_scene(&args, "star", &scene_star(&args)?)?;
    write_scene(&args, "ellipse", &scene_ellipse(&args)?)?;

    Ok(())
}
