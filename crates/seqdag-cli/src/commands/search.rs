//! Pattern search over a stored graph.

use std::path::PathBuf;

use seqdag_core::Colors;
use seqdag_search::{MatchResult, NoopTracer, Pattern, PrintTracer, Searcher, Tracer, Verbosity};

use super::input::load_graph;

pub struct SearchArgs {
    pub graph_path: PathBuf,
    pub pattern: String,
    pub pool: String,
    pub wildcards: usize,
    pub index: Option<usize>,
    pub limit: Option<usize>,
    pub json: bool,
    /// `None` runs untraced.
    pub trace: Option<Verbosity>,
    pub color: bool,
}

/// Exits 1 when nothing matches.
pub fn run(args: SearchArgs) {
    let pattern: Pattern<char> = match args.pattern.parse() {
        Ok(pattern) => pattern,
        Err(e) => {
            eprintln!("error: invalid pattern '{}': {}", args.pattern, e);
            std::process::exit(1);
        }
    };

    let graph = match load_graph(&args.graph_path) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    let searcher = Searcher::new(&graph);

    let results = match args.trace {
        Some(verbosity) => {
            let mut tracer = PrintTracer::new(&graph, verbosity, Colors::new(args.color));
            let results = collect(&searcher, &pattern, &args, &mut tracer);
            tracer.print();
            results
        }
        None => collect(&searcher, &pattern, &args, NoopTracer),
    };

    if args.json {
        match serde_json::to_string_pretty(&results) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        for result in &results {
            println!("{}", format_match(result));
        }
    }

    if results.is_empty() {
        std::process::exit(1);
    }
}

fn collect<Tr: Tracer<char>>(
    searcher: &Searcher<'_, char>,
    pattern: &Pattern<char>,
    args: &SearchArgs,
    tracer: Tr,
) -> Vec<MatchResult<char>> {
    let pool = args.pool.chars();
    let limit = args.limit.unwrap_or(usize::MAX);
    match args.index {
        Some(index) => searcher
            .find_matches_containing_with(pool, pattern, args.wildcards, index, tracer)
            .take(limit)
            .collect(),
        None => searcher
            .find_matches_with(pool, pattern, args.wildcards, tracer)
            .take(limit)
            .collect(),
    }
}

/// `care @0..3`, followed by ` *1,4` when wildcards filled positions 1 and 4.
pub fn format_match(result: &MatchResult<char>) -> String {
    let word: String = result.sequence.iter().collect();
    let mut line = format!("{} @{}..{}", word, result.start, result.end);
    if !result.wildcard_positions.is_empty() {
        let positions: Vec<String> = result
            .wildcard_positions
            .iter()
            .map(ToString::to_string)
            .collect();
        line.push_str(" *");
        line.push_str(&positions.join(","));
    }
    line
}
