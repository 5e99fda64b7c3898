use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sofa_box_planner::guillotine::ScoreStrategy;
use sofa_box_planner::render::{AsciiRenderer, PanelRenderer};
use sofa_box_planner::report;
use sofa_box_planner::svg::SvgRenderer;
use sofa_box_planner::{BoxConfig, CutPlan, GuillotinePacker};
use tracing::{Level, info};

#[derive(Parser)]
#[command(
    name = "sofa_box_planner",
    about = "Panel and beam cutting plan for the sofa storage box"
)]
struct Cli {
    /// JSON file overriding any of the build dimensions (cm)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Free-section scoring: bssf, baf, or blsf
    #[arg(long, default_value = "bssf")]
    strategy: ScoreStrategy,

    /// Beam stock on hand in cm; reports surplus or deficit
    #[arg(long)]
    beam_stock: Option<f64>,

    /// Where to write the SVG cut sheet
    #[arg(long, default_value = "cut_plan.svg")]
    svg: PathBuf,

    /// Show ASCII layout of the sheet
    #[arg(long)]
    layout: bool,

    /// Print the plan as JSON instead of the text transcript
    #[arg(long)]
    json: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let mut cfg = match &cli.config {
        Some(path) => BoxConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => BoxConfig::default(),
    };
    if cli.beam_stock.is_some() {
        cfg.beam_stock_length = cli.beam_stock;
    }

    let packer = GuillotinePacker::new(cli.strategy);
    info!(strategy = packer.strategy().name(), "packing panel");
    let plan = CutPlan::build(&cfg, &packer);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", report::transcript(&plan));
    }

    let Some(placements) = plan.outcome.placements() else {
        return Ok(());
    };

    if cli.layout {
        print!("{}", AsciiRenderer.render(plan.bin, placements));
    }

    let svg = SvgRenderer::default().render(plan.bin, placements);
    std::fs::write(&cli.svg, svg)
        .with_context(|| format!("failed to write {}", cli.svg.display()))?;
    info!(path = %cli.svg.display(), "cut sheet written");

    Ok(())
}
