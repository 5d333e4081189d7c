// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders an energy rhythm scenario to an SVG file.
//!
//! Without `--scenario` the bundled example day is used. Set `RUST_LOG=debug` to
//! see render summaries and label placement fallbacks.

mod scenario;
mod svg;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use rhythm_timeline::{HeuristicTextMeasurer, TextMeasurer, TimelineRenderer};
use tracing_subscriber::EnvFilter;

use crate::scenario::Scenario;

pub(crate) const DEFAULT_SCENARIO: &str = include_str!("../scenarios/example_day.json");

#[derive(Debug, Parser)]
#[command(version, about = "Render a single-day energy rhythm timeline to SVG")]
struct Args {
    /// Scenario JSON file.
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Where to write the SVG.
    #[arg(long, default_value = "rhythm_timeline_demo.svg")]
    output: PathBuf,
    /// Text measurer used to size label boxes.
    #[arg(long, value_enum, default_value_t = MeasurerKind::Heuristic)]
    measurer: MeasurerKind,
    /// Page background as a CSS color.
    #[arg(long, default_value = "#1d1a2f")]
    background: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum MeasurerKind {
    /// Fixed 0.6em per character.
    Heuristic,
    /// Shaped with parley (needs the `parley` feature).
    Parley,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let json = match &args.scenario {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?,
        None => DEFAULT_SCENARIO.to_owned(),
    };
    let input = Scenario::from_json(&json)
        .context("parsing scenario JSON")?
        .into_input()
        .context("converting scenario")?;
    let background = scenario::color("--background", &args.background)?;

    let measurer = demo_measurer(args.measurer)?;
    let scene = TimelineRenderer::default()
        .render(&input, measurer.as_ref())
        .context("rendering timeline")?;

    let svg = svg::scene_to_svg(&scene, Some(background));
    std::fs::write(&args.output, svg)
        .with_context(|| format!("writing {}", args.output.display()))?;
    tracing::info!(
        output = %args.output.display(),
        commands = scene.commands.len(),
        "wrote timeline"
    );
    Ok(())
}

fn demo_measurer(kind: MeasurerKind) -> anyhow::Result<Box<dyn TextMeasurer>> {
    match kind {
        MeasurerKind::Heuristic => Ok(Box::new(HeuristicTextMeasurer)),
        #[cfg(feature = "parley")]
        MeasurerKind::Parley => Ok(Box::new(rhythm_text_parley::ParleyTextMeasurer::new())),
        #[cfg(not(feature = "parley"))]
        MeasurerKind::Parley => {
            anyhow::bail!("the parley measurer requires building with `--features parley`")
        }
    }
}
