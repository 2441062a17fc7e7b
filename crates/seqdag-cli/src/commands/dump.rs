use std::path::PathBuf;

use seqdag_core::{Colors, GraphPrinter};

use super::input::load_graph;

pub struct DumpArgs {
    pub graph_path: PathBuf,
    pub parents: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let graph = match load_graph(&args.graph_path) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let printer = GraphPrinter::new(&graph)
        .with_colors(Colors::new(args.color))
        .show_parents(args.parents);
    print!("{}", printer.dump());
}
