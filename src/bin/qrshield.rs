use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "qrshield", version, about = "Render styled QR codes as SVG")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a QR code as an SVG document.
    Render(RenderArgs),
    /// Render a sticker frame and print its geometry.
    Sticker(StickerArgs),
    /// List the built-in shape catalogue.
    Shapes,
    /// List the built-in color presets.
    Presets,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct GridSource {
    /// Text grid file: one row per line, `#` or `1` for dark modules.
    #[arg(long)]
    grid: Option<PathBuf>,

    /// Data to encode.
    #[arg(long)]
    text: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Ecc {
    L,
    M,
    Q,
    H,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    source: GridSource,

    /// Error correction level used with `--text`.
    #[arg(long, value_enum, default_value_t = Ecc::M)]
    ecc: Ecc,

    /// Design configuration JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Write a base64 data URI instead of raw SVG.
    #[arg(long, default_value_t = false)]
    data_uri: bool,
}

#[derive(Parser, Debug)]
struct StickerArgs {
    /// Sticker configuration JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output SVG path for the frame.
    #[arg(long)]
    out: PathBuf,

    /// Print the computed geometry as JSON on stdout.
    #[arg(long, default_value_t = false)]
    geometry: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Sticker(args) => cmd_sticker(args),
        Command::Shapes => cmd_shapes(),
        Command::Presets => cmd_presets(),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => qrshield::DesignConfig::from_path(path)?,
        None => qrshield::DesignConfig::default(),
    };
    let grid = load_grid(&args.source, args.ecc)?;
    let registry = qrshield::ShapeRegistry::with_builtins();
    let doc = qrshield::render_svg(&grid, &config, &registry)?;

    let body = if args.data_uri {
        doc.to_data_uri()
    } else {
        doc.into_string()
    };
    write_output(&args.out, body.as_bytes())
}

fn cmd_sticker(args: StickerArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => qrshield::StickerConfig::from_path(path)?,
        None => qrshield::StickerConfig::default(),
    };
    let registry = qrshield::ShapeRegistry::with_builtins();
    let frame = qrshield::frame_svg(&config, &registry)?;
    write_output(&args.out, &frame.to_bytes())?;

    if args.geometry {
        let geometry = qrshield::StickerGeometry::compute(&config, &registry)?;
        let json = serde_json::to_string_pretty(&geometry).context("serialize geometry")?;
        println!("{json}");
    }
    Ok(())
}

fn cmd_shapes() -> anyhow::Result<()> {
    let registry = qrshield::ShapeRegistry::with_builtins();
    for (key, category) in registry.categories() {
        println!("{} {key} ({})", category.icon, category.label);
        for (vkey, v) in &category.variations {
            println!("  {key}/{vkey}  {}x{}  {}", v.width, v.height, v.label);
        }
    }
    Ok(())
}

fn cmd_presets() -> anyhow::Result<()> {
    for name in qrshield::preset_names() {
        if let Some(p) = qrshield::preset(name) {
            println!("{name}  bg={} fg={} outline={}", p.background, p.foreground, p.outline);
        }
    }
    Ok(())
}

fn load_grid(source: &GridSource, ecc: Ecc) -> anyhow::Result<qrshield::ModuleGrid> {
    if let Some(path) = &source.grid {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read grid '{}'", path.display()))?;
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        return Ok(qrshield::ModuleGrid::from_rows(&rows)?);
    }
    match &source.text {
        Some(data) => encode(data, ecc),
        None => anyhow::bail!("either --grid or --text is required"),
    }
}

#[cfg(feature = "encode")]
fn encode(data: &str, ecc: Ecc) -> anyhow::Result<qrshield::ModuleGrid> {
    let level = match ecc {
        Ecc::L => qrshield::EccLevel::Low,
        Ecc::M => qrshield::EccLevel::Medium,
        Ecc::Q => qrshield::EccLevel::Quartile,
        Ecc::H => qrshield::EccLevel::High,
    };
    Ok(qrshield::encode_text(data, level)?)
}

#[cfg(not(feature = "encode"))]
fn encode(_data: &str, _ecc: Ecc) -> anyhow::Result<qrshield::ModuleGrid> {
    anyhow::bail!("--text requires the `encode` feature")
}

fn write_output(out: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(out, bytes).with_context(|| format!("write '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}
