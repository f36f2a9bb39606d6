// File: crates/demo/src/main.rs
// Summary: Demo renders a data binding through the registered line chart widget to PNG and SVG.

mod input;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use linechart_core::types::{HEIGHT, WIDTH};
use linechart_core::{paint, theme, SvgBackend};
use linechart_render_skia::SkiaBackend;
use linechart_widget::{register_widgets, LifecycleHooks, Registry, RenderOutcome, ELEMENT_NAME};
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Render a line chart data binding to PNG and SVG.
#[derive(Parser, Debug)]
#[command(name = "linechart-demo", version)]
struct Args {
    /// Data binding document (.json) or headed table (.csv)
    input: PathBuf,

    /// Viewport width in pixels
    #[arg(long, default_value_t = WIDTH)]
    width: f64,

    /// Viewport height in pixels
    #[arg(long, default_value_t = HEIGHT)]
    height: f64,

    /// Theme preset name (light, dark)
    #[arg(long, default_value = "light")]
    theme: String,

    /// CSV columns to treat as dimensions; others become measures
    #[arg(long, value_delimiter = ',')]
    dims: Option<Vec<String>>,

    /// Output directory
    #[arg(long, default_value = "target/out")]
    out: PathBuf,
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(true);
    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}

fn main() -> Result<()> {
    init_tracing("info");
    let args = Args::parse();
    if !args.input.exists() {
        anyhow::bail!("file not found: {}", args.input.display());
    }

    let binding = input::load_binding(&args.input, args.dims.as_deref())
        .with_context(|| format!("failed to load '{}'", args.input.display()))?;
    info!(input = %args.input.display(), state = %binding.state, rows = binding.data.len(), "loaded data binding");

    let theme = theme::find(&args.theme);
    let mut registry = Registry::new();
    register_widgets(&mut registry, || || Ok::<_, anyhow::Error>(SkiaBackend::new()))?;
    let mut widget = registry.create(ELEMENT_NAME)?.with_theme(theme);
    widget.set_data_binding(binding);

    let geometry = match widget.on_resize(args.width, args.height)? {
        RenderOutcome::Painted(g) => g,
        RenderOutcome::Skipped(reason) => anyhow::bail!("nothing rendered: {reason:?}"),
    };

    let png = out_path(&args.out, &args.input, "png")?;
    widget.backend_mut().context("widget has no backend after painting")?.write_png(&png)?;
    println!("Wrote {}", png.display());

    let mut svg = SvgBackend::new();
    paint(&geometry, &mut svg, &theme)?;
    let svg_path = out_path(&args.out, &args.input, "svg")?;
    std::fs::write(&svg_path, svg.document()).with_context(|| format!("writing {}", svg_path.display()))?;
    println!("Wrote {}", svg_path.display());

    info!(series = geometry.paths.len(), categories = geometry.categories.len(), "done");
    Ok(())
}

/// `<dir>/<input stem>.<ext>`, creating `dir`.
fn out_path(dir: &Path, input: &Path, ext: &str) -> Result<PathBuf> {
    let stem = input.file_stem().and_then(|s| s.to_str()).filter(|s| !s.is_empty()).unwrap_or("chart");
    std::fs::create_dir_all(dir).with_context(|| format!("creating output directory {}", dir.display()))?;
    Ok(dir.join(format!("{stem}.{ext}")))
}
