use std::path::PathBuf;

use seqdag_core::SequenceGraph;
use tracing::debug;

use super::input::load_words;
use super::stats::format_stats;

pub struct BuildArgs {
    pub words_path: PathBuf,
    pub output: PathBuf,
}

pub fn run(args: BuildArgs) {
    let words = match load_words(&args.words_path) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    debug!(path = %args.words_path.display(), words = words.len(), "word list read");
    let graph: SequenceGraph<char> = SequenceGraph::from_sorted(&words);

    if let Err(e) = graph.save(&args.output) {
        eprintln!("error: failed to write '{}': {}", args.output.display(), e);
        std::process::exit(1);
    }

    print!("{}", format_stats(&graph.stats()));
}
