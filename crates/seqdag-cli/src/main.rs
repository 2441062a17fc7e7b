mod cli;
mod commands;

use cli::{BuildParams, ContainsParams, DumpParams, SearchParams, StatsParams, build_cli};
use tracing_subscriber::EnvFilter;

fn main() {
    // Library events (graph saved/loaded, search started) go to stderr,
    // filtered by RUST_LOG; nothing is printed by default.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("build", m)) => {
            let params = BuildParams::from_matches(m);
            commands::build::run(params.into());
        }
        Some(("contains", m)) => {
            let params = ContainsParams::from_matches(m);
            commands::contains::run(params.into());
        }
        Some(("search", m)) => {
            let params = SearchParams::from_matches(m);
            commands::search::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("stats", m)) => {
            let params = StatsParams::from_matches(m);
            commands::stats::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
