//! Command line front plotter
//!
//! Reads a front file and writes its scatter plot as SVG.

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};
use paretoscatter::io::read_front;
use paretoscatter::plot::{render, PlottersEngine};
use paretoscatter::{camera_angle_for_dim, Bound, FontSize, Rgba, ScatterConfig, ViewAngle};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "paretoscatter", version, about = "Scatter-plot a Pareto front")]
struct Args {
    /// Front file, one point per line (csv, out, txt, ...)
    input: PathBuf,

    /// Output SVG file
    #[arg(short, long)]
    output: PathBuf,

    /// Columns shown on the x, y and z axes, 0-based (z only for 3+ columns)
    #[arg(long, value_parser = parse_axes)]
    axes: Option<AxisColumns>,

    /// Camera azimuth and elevation in degrees
    #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
    euler: Option<(f64, f64)>,

    /// Benchmark problem whose recommended camera angle to use
    #[arg(long)]
    problem: Option<String>,

    /// Figure title
    #[arg(long)]
    title: Option<String>,

    /// Axis label template with one `{}` slot
    #[arg(long)]
    label_prefix: Option<String>,

    /// Label font size (`large`, `small`, ... or points)
    #[arg(long, value_parser = parse_fontsize)]
    label_fontsize: Option<FontSize>,

    #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
    xbound: Option<(f64, f64)>,

    #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
    ybound: Option<(f64, f64)>,

    #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
    zbound: Option<(f64, f64)>,

    /// Marker area in points squared
    #[arg(long, default_value_t = 1.0)]
    size: f64,

    /// Marker color, hex or Tableau name
    #[arg(long, default_value = "tab:blue", value_parser = parse_color)]
    color: Rgba,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 480)]
    height: u32,
}

fn parse_pair(s: &str) -> std::result::Result<(f64, f64), String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [a, b] => {
            let a = a.parse::<f64>().map_err(|e| format!("'{}': {}", a, e))?;
            let b = b.parse::<f64>().map_err(|e| format!("'{}': {}", b, e))?;
            Ok((a, b))
        }
        _ => Err(format!("expected two comma separated numbers, got '{}'", s)),
    }
}

/// Columns named by `--axes`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AxisColumns {
    columns: [usize; 3],
    has_z: bool,
}

fn parse_axes(s: &str) -> std::result::Result<AxisColumns, String> {
    let axes = s
        .split(',')
        .map(|p| p.trim().parse::<usize>().map_err(|e| format!("'{}': {}", p, e)))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    match axes.as_slice() {
        [x, y] => Ok(AxisColumns {
            columns: [*x, *y, 2],
            has_z: false,
        }),
        [x, y, z] => Ok(AxisColumns {
            columns: [*x, *y, *z],
            has_z: true,
        }),
        _ => Err(format!("expected 2 or 3 column indices, got '{}'", s)),
    }
}

fn parse_fontsize(s: &str) -> std::result::Result<FontSize, String> {
    s.parse().map_err(|e: paretoscatter::Error| e.to_string())
}

fn parse_color(s: &str) -> std::result::Result<Rgba, String> {
    s.parse().map_err(|e: paretoscatter::Error| e.to_string())
}

fn build_config(args: &Args, dims: usize) -> Result<ScatterConfig> {
    let mut config = ScatterConfig::default();
    if let Some(axes) = args.axes {
        if !axes.has_z && dims >= 3 {
            bail!(
                "--axes names 2 columns but the input has {}, give x,y,z for a 3-D plot",
                dims
            );
        }
        config.axes = axes.columns;
    }
    if let Some(prefix) = &args.label_prefix {
        config = config.with_label_prefix(prefix.clone());
    }
    if let Some(size) = args.label_fontsize {
        config.label_fontsize = size;
    }
    config.euler = match (args.euler, &args.problem) {
        (Some(euler), _) => ViewAngle::from(euler),
        (None, Some(problem)) => camera_angle_for_dim(problem, dims).unwrap_or_else(|| {
            warn!("no camera angle for {} at {}d, using the default", problem, dims);
            ViewAngle::default()
        }),
        (None, None) => ViewAngle::default(),
    };
    config.xbound = args.xbound.map(Bound::from);
    config.ybound = args.ybound.map(Bound::from);
    config.zbound = args.zbound.map(Bound::from);
    config.title = args.title.clone();
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let points = read_front(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    if points.ncols() < 2 {
        bail!(
            "{} has {} column(s), at least 2 are needed",
            args.input.display(),
            points.ncols()
        );
    }
    info!(
        "loaded {} points with {} objectives from {}",
        points.nrows(),
        points.ncols(),
        args.input.display()
    );

    let config = build_config(&args, points.ncols())?;
    let mut engine = PlottersEngine::new().with_size(args.width, args.height);
    let (figure, axes) = render(&points, Some(&mut engine), args.size, args.color, &config)?;
    engine
        .save(&figure, &axes, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    info!("wrote {}", args.output.display());
    Ok(())
}
