//! Pillbox studio: renders caption documents to SVG and PNG.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use pillbox_engine::coords::Vec2;
use pillbox_engine::logging::{init_logging, LoggingConfig};
use pillbox_engine::render::raster::rasterize_png;
use pillbox_engine::render::SvgRenderer;
use pillbox_mkml::DslDocument;
use pillbox_ui::dsl::{DslBindings, DslLoader};
use pillbox_ui::scene::UiScene;

const DEMO: &str = include_str!("../ui/demo.mkml");

#[derive(Parser)]
#[command(name = "pillbox-studio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render pill-shaped caption backgrounds", long_about = None)]
struct Cli {
    /// Caption document (.mkml). Renders the built-in demo when omitted
    input: Option<PathBuf>,

    /// SVG output path (stdout when omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Also rasterize to this PNG path
    #[arg(long)]
    png: Option<PathBuf>,

    /// PNG scale factor
    #[arg(long, default_value_t = 1.0)]
    scale: f32,

    /// Fixed canvas width; natural size when omitted
    #[arg(long)]
    width: Option<f32>,

    /// Fixed canvas height; natural size when omitted
    #[arg(long)]
    height: Option<f32>,

    /// TrueType / OpenType font used to measure line widths
    #[arg(long)]
    font: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `pillbox_ui=trace`
    #[arg(long)]
    log: Option<String>,

    /// Print each caption's corner decisions instead of rendering
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut log_config = LoggingConfig::default();
    if let Some(filter) = &cli.log {
        log_config = log_config.with_filter(filter.clone());
    }
    init_logging(log_config);

    let mut scene = UiScene::new();
    let mut bindings = DslBindings::new();
    if let Some(bytes) = load_font(cli.font.as_ref())? {
        let id = scene.load_font(&bytes).context("parsing font")?;
        bindings = bindings.with_default_font(id);
    } else {
        log::warn!("no font found, line widths use the per-character approximation");
    }

    check_extent("width", cli.width)?;
    check_extent("height", cli.height)?;

    let (src, base) = match &cli.input {
        Some(path) => (
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
            path.parent().map(Path::to_path_buf).unwrap_or_default(),
        ),
        None => (DEMO.to_string(), PathBuf::new()),
    };

    let mut loader = DslLoader::new();
    let doc = load_document(&mut loader, &src, &base)?;

    if cli.dump {
        return dump(&loader, &doc, &bindings);
    }

    let root = loader.build(&doc, &bindings).context("building caption document")?;
    let (size, draw_list) = match (cli.width, cli.height) {
        (None, None) => scene.frame_fit(root),
        (w, h) => {
            let natural = natural_size(&loader, &doc, &bindings, &mut scene)?;
            let viewport = Vec2::new(w.unwrap_or(natural.x), h.unwrap_or(natural.y));
            (viewport, scene.frame(root, viewport))
        }
    };
    log::info!("laid out {}x{} ({} draw items)", size.x, size.y, draw_list.len());

    let mut renderer = SvgRenderer::new();
    let svg = renderer.render(draw_list, size, None).to_string();

    match &cli.out {
        Some(path) => {
            fs::write(path, &svg).with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => std::io::stdout().write_all(svg.as_bytes()).context("writing svg to stdout")?,
    }

    if let Some(path) = &cli.png {
        let png = rasterize_png(&svg, cli.scale).context("rasterizing svg")?;
        fs::write(path, png).with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }

    Ok(())
}

/// Parses `src` and registers its imports. Import paths resolve against `base`.
fn load_document(loader: &mut DslLoader, src: &str, base: &Path) -> Result<DslDocument> {
    let doc = loader.parse(src).context("parsing caption document")?;
    loader
        .load_imports(&doc, |path: &str| fs::read_to_string(base.join(path)))
        .context("loading imports")?;
    Ok(doc)
}

fn check_extent(flag: &str, value: Option<f32>) -> Result<()> {
    match value {
        Some(v) if !(v.is_finite() && v > 0.0) => {
            bail!("--{flag} must be a positive finite number, got {v}")
        }
        _ => Ok(()),
    }
}

/// Size the document wants when unconstrained.
fn natural_size(
    loader: &DslLoader,
    doc: &DslDocument,
    bindings: &DslBindings,
    scene: &mut UiScene,
) -> Result<Vec2> {
    let root = loader.build(doc, bindings)?;
    Ok(scene.frame_fit(root).0)
}

fn dump(loader: &DslLoader, doc: &DslDocument, bindings: &DslBindings) -> Result<()> {
    let captions = loader.captions(doc, bindings).context("building caption document")?;
    let mut out = std::io::stdout().lock();
    for (i, caption) in captions.iter().enumerate() {
        let align = caption.alignment().map_or("none", |a| a.as_str());
        writeln!(out, "caption {} (align: {align})", i + 1)?;
        for (line, rounding) in caption.lines().iter().zip(caption.roundings()) {
            let c = rounding.corners;
            let flag = |on: bool| if on { "round" } else { "square" };
            let accents: Vec<&str> = rounding.accents.iter().map(|a| a.class_name()).collect();
            writeln!(
                out,
                "  {line:?}: tl={} tr={} br={} bl={} accents=[{}]",
                flag(c.top_left),
                flag(c.top_right),
                flag(c.bottom_right),
                flag(c.bottom_left),
                accents.join(", "),
            )?;
        }
    }
    Ok(())
}

/// Reads `--font`, or the first common system sans-serif found.
fn load_font(explicit: Option<&PathBuf>) -> Result<Option<Vec<u8>>> {
    if let Some(path) = explicit {
        let bytes = fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
        return Ok(Some(bytes));
    }
    Ok([
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| fs::read(p).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn demo_document_builds() {
        let loader = DslLoader::new();
        let doc = loader.parse(DEMO).unwrap();
        let captions = loader.captions(&doc, &DslBindings::new()).unwrap();
        assert_eq!(captions.len(), 4);
        assert!(loader.build(&doc, &DslBindings::new()).is_ok());
    }

    #[test]
    fn demo_renders_svg() {
        let loader = DslLoader::new();
        let root = loader.build_str(DEMO, &DslBindings::new()).unwrap();
        let mut scene = UiScene::new();
        let (size, list) = scene.frame_fit(root);
        assert!(size.x > 0.0 && size.y > 0.0);
        let svg = SvgRenderer::new().render(list, size, None).to_string();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Align Left"));
        assert!(svg.contains("Proxima Nova Semibold"));
    }

    #[test]
    fn imports_resolve_next_to_the_input() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("parts")).unwrap();
        fs::write(
            dir.path().join("parts/intro.mkml"),
            r#"Caption { align: right  Line "from" Line "an import" }"#,
        )
        .unwrap();
        let src = r#"import "parts/intro.mkml" as Intro
            Column { Intro Caption { Line "local" } }"#;

        let mut loader = DslLoader::new();
        let doc = load_document(&mut loader, src, dir.path()).unwrap();
        let captions = loader.captions(&doc, &DslBindings::new()).unwrap();
        assert_eq!(captions.len(), 2);
        assert_eq!(captions[0].lines(), ["from", "an import"]);
    }

    #[test]
    fn missing_import_fails_with_path() {
        let dir = tempdir().unwrap();
        let mut loader = DslLoader::new();
        let err = load_document(&mut loader, r#"import "nope.mkml" as Nope  Nope"#, dir.path())
            .unwrap_err();
        assert!(format!("{err:#}").contains("nope.mkml"));
    }

    #[test]
    fn extents_must_be_positive_and_finite() {
        assert!(check_extent("width", None).is_ok());
        assert!(check_extent("width", Some(320.0)).is_ok());
        for bad in [0.0, -5.0, f32::NAN, f32::INFINITY] {
            assert!(check_extent("width", Some(bad)).is_err(), "{bad} accepted");
        }
        let cli = Cli::try_parse_from(["pillbox-studio", "--width", "NaN"]).unwrap();
        assert!(check_extent("width", cli.width).is_err());
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "pillbox-studio", "captions.mkml", "--out", "a.svg", "--png", "a.png",
            "--scale", "2", "--dump",
        ])
        .unwrap();
        assert_eq!(cli.input.as_deref(), Some(std::path::Path::new("captions.mkml")));
        assert_eq!(cli.scale, 2.0);
        assert!(cli.dump);
        assert!(cli.width.is_none());
    }
}
