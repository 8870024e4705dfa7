mod svg;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use elfelli::{xml, FieldLine, Generator, Scene, TraceConfig};

use svg::Tag;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

const BODY_RADIUS: f32 = 10.0;
const PLATE_WIDTH: f32 = 6.0;
const POSITIVE: &str = "#ff0000";
const NEGATIVE: &str = "#0000ff";
const NEUTRAL: &str = "#808080";
const LINE_COLOUR: &str = "#000000";

const HELP: &str = "\
Draws the field lines of an elfelli scene.

USAGE:
  trace-svg <scene.xml> [OPTIONS]

OPTIONS:
  -o, --output <file>    SVG to write [default: scene with .svg extension]
  --config <file>        TOML file overriding the trace parameters
  --width <px>           Picture width [default: 800]
  --height <px>          Picture height [default: 600]
  --vertices <file>      Also dump the line vertices as raw f32 data
  -h, --help             Prints this message
";

struct Args {
    scene: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
    width: u32,
    height: u32,
    vertices: Option<PathBuf>,
}

fn parse_args() -> Result<Option<Args>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return Ok(None);
    }

    let output: Option<PathBuf> = args.opt_value_from_str(["-o", "--output"])?;
    let config = args.opt_value_from_str("--config")?;
    let width = args.opt_value_from_str("--width")?.unwrap_or(WIDTH);
    let height = args.opt_value_from_str("--height")?.unwrap_or(HEIGHT);
    let vertices = args.opt_value_from_str("--vertices")?;
    let scene: PathBuf = args.free_from_str()?;

    let rest = args.finish();
    if !rest.is_empty() {
        bail!("unexpected arguments: {:?}", rest);
    }

    Ok(Some(Args {
        output: output.unwrap_or_else(|| scene.with_extension("svg")),
        scene,
        config,
        width,
        height,
        vertices,
    }))
}

fn colour(charge: f32) -> &'static str {
    if charge > 0.0 {
        POSITIVE
    } else if charge < 0.0 {
        NEGATIVE
    } else {
        NEUTRAL
    }
}

fn draw(scene: &Scene, lines: &[FieldLine], width: u32, height: u32) -> String {
    let mut root = Tag::svg(width, height);
    root.add_child(
        Tag::new("rect")
            .attr("width", "100%")
            .attr("height", "100%")
            .attr("fill", "#ffffff"),
    );

    let mut field = Tag::group(LINE_COLOUR, 1.0);
    for line in lines.iter().filter(|l| l.len() > 1) {
        field.add_child(Tag::polyline(line.points()));
    }
    root.add_child(field);

    // bodies go on top of the lines ending in them
    for p in scene.plates() {
        root.add_child(Tag::line(p.a(), p.b(), colour(p.charge), PLATE_WIDTH));
    }
    for c in scene.charges() {
        root.add_child(Tag::circle(c.position, BODY_RADIUS, colour(c.charge)));
    }

    svg::render(&root)
}

/// Line count, then each line as its point count followed by `x, y` pairs.
/// All values are native-endian `u32`/`f32`.
fn vertex_dump(lines: &[FieldLine]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(bytemuck::bytes_of(&(lines.len() as u32)));
    for line in lines {
        out.extend_from_slice(bytemuck::bytes_of(&(line.len() as u32)));
        out.extend_from_slice(bytemuck::cast_slice(line.as_vertices()));
    }
    out
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()?;

    let args = match parse_args()? {
        Some(args) => args,
        None => return Ok(()),
    };

    let scene = xml::load(&args.scene)
        .with_context(|| format!("failed to load scene {}", args.scene.display()))?;
    let config = match &args.config {
        Some(path) => TraceConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => TraceConfig::default(),
    };

    let start = Instant::now();
    let lines = Generator::with_config(&scene, config).trace_all();
    log::info!(
        "traced {} lines from {} charges and {} plates in {:?}",
        lines.len(),
        scene.charges().len(),
        scene.plates().len(),
        start.elapsed()
    );

    std::fs::write(&args.output, draw(&scene, &lines, args.width, args.height))
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    log::info!("wrote {}", args.output.display());

    if let Some(path) = &args.vertices {
        std::fs::write(path, vertex_dump(&lines))
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }

    Ok(())
}
