use std::path::PathBuf;

use super::input::load_graph;

pub struct ContainsArgs {
    pub graph_path: PathBuf,
    pub words: Vec<String>,
}

/// Prints `<word>: yes|no` per word; exits 1 when any word is missing.
pub fn run(args: ContainsArgs) {
    let graph = match load_graph(&args.graph_path) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let mut missing = false;
    for word in &args.words {
        let found = graph.contains(word.chars());
        missing |= !found;
        println!("{}: {}", word, if found { "yes" } else { "no" });
    }

    if missing {
        std::process::exit(1);
    }
}
