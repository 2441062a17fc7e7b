use std::path::PathBuf;

use seqdag_core::GraphStats;
use serde::Serialize;

use super::input::load_graph;

pub struct StatsArgs {
    pub graph_path: PathBuf,
    pub json: bool,
}

/// JSON shape of `seqdag stats --json`.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub graph: String,
    pub values: usize,
    #[serde(flatten)]
    pub stats: GraphStats,
}

pub fn run(args: StatsArgs) {
    let graph = match load_graph(&args.graph_path) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if !args.json {
        print!("{}", format_stats(&graph.stats()));
        return;
    }

    let report = StatsReport {
        graph: args.graph_path.display().to_string(),
        values: graph.values().count(),
        stats: graph.stats(),
    };
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn format_stats(stats: &GraphStats) -> String {
    format!(
        "nodes: {}\nedges: {}\nsequences: {}\n",
        stats.nodes, stats.edges, stats.sequences
    )
}
