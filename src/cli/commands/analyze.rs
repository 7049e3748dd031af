//! Analyze command - tree statistics and opening values

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    board::Coord,
    cli::output::{format_number, print_kv, print_section},
    engine::Engine,
    tree::TreeStats,
};

#[derive(Parser, Debug)]
#[command(about = "Build and evaluate the game tree, then report its shape")]
pub struct AnalyzeArgs {
    /// Emit the report as JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct OpeningValue {
    coord: Coord,
    value: i32,
}

#[derive(Debug, Serialize)]
struct AnalyzeReport {
    stats: TreeStats,
    root_value: i32,
    openings: Vec<OpeningValue>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let engine = Engine::initialize();
    let report = build_report(&engine);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Game Tree");
    print_kv("nodes", format_number(report.stats.nodes));
    print_kv("leaves", format_number(report.stats.leaves));
    print_kv("X-win leaves", format_number(report.stats.x_wins));
    print_kv("O-win leaves", format_number(report.stats.o_wins));
    print_kv("draw leaves", format_number(report.stats.draws));
    print_kv("max depth", report.stats.max_depth);

    print_section("Minimax");
    print_kv("root value", report.root_value);
    println!("\n  opening values (X's first move):");
    for opening in &report.openings {
        print_kv(&opening.coord.to_string(), opening.value);
    }

    Ok(())
}

fn build_report(engine: &Engine) -> AnalyzeReport {
    let root = engine.root();
    let openings = root
        .children
        .iter()
        .filter_map(|child| {
            child.id.coord().map(|coord| OpeningValue {
                coord,
                value: child.value,
            })
        })
        .collect();

    AnalyzeReport {
        stats: engine.stats(),
        root_value: root.value,
        openings,
    }
}
