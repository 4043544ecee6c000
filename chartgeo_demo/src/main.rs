// Copyright 2025 the Chartgeo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders one SVG sample of every chart kind.

mod samples;
mod svg;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chartgeo_charts::{ChartConfig, ChartKind};
use clap::Parser;
use tracing::info;

/// Render sample charts as SVG files.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Directory the SVG files are written to.
    #[arg(long, short, default_value = "chartgeo_out")]
    out_dir: PathBuf,
    /// Render only this kind (bar, line, area, pie, heatmap, geomap, treemap).
    #[arg(long)]
    chart: Option<String>,
    /// Chart width in pixels.
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    /// Chart height in pixels.
    #[arg(long, default_value_t = 500.0)]
    height: f64,
    /// Smooth line and area boundaries.
    #[arg(long)]
    smooth: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chartgeo_demo=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let kinds = match args.chart.as_deref() {
        None => ChartKind::ALL.to_vec(),
        Some(name) => match ChartKind::from_name(name) {
            Some(kind) => vec![kind],
            None => bail!("unknown chart kind `{name}`"),
        },
    };

    let config = ChartConfig::default().with_size(args.width, args.height);
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    for kind in kinds {
        let chart = samples::chart(kind, args.smooth)?;
        let geometry = chart
            .geometry(&config)
            .with_context(|| format!("laying out the {} chart", kind.name()))?;
        let path = args.out_dir.join(format!("{}.svg", kind.name()));
        fs::write(&path, svg::render(&geometry, &config))
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "wrote chart");
    }
    Ok(())
}
