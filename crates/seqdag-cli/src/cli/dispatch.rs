//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` mirror the command `*Args` but keep clap's view of the flags
//! (raw verbosity count, unresolved color choice); the `From` impls resolve
//! them for the handlers.

use std::path::PathBuf;

use clap::ArgMatches;
use seqdag_search::Verbosity;

use super::ColorChoice;
use crate::commands::build::BuildArgs;
use crate::commands::contains::ContainsArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::search::SearchArgs;
use crate::commands::stats::StatsArgs;

pub struct BuildParams {
    pub words_path: PathBuf,
    pub output: PathBuf,
}

impl BuildParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            words_path: required_path(m, "words"),
            output: required_path(m, "output"),
        }
    }
}

impl From<BuildParams> for BuildArgs {
    fn from(p: BuildParams) -> Self {
        Self {
            words_path: p.words_path,
            output: p.output,
        }
    }
}

pub struct ContainsParams {
    pub graph_path: PathBuf,
    pub words: Vec<String>,
}

impl ContainsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            graph_path: required_path(m, "graph"),
            words: m
                .get_many::<String>("lookup")
                .map(|words| words.cloned().collect())
                .unwrap_or_default(),
        }
    }
}

impl From<ContainsParams> for ContainsArgs {
    fn from(p: ContainsParams) -> Self {
        Self {
            graph_path: p.graph_path,
            words: p.words,
        }
    }
}

pub struct SearchParams {
    pub graph_path: PathBuf,
    pub pattern: String,
    pub pool: String,
    pub wildcards: usize,
    pub index: Option<usize>,
    pub limit: Option<usize>,
    pub json: bool,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl SearchParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            graph_path: required_path(m, "graph"),
            pattern: m.get_one::<String>("pattern").cloned().unwrap_or_default(),
            pool: m.get_one::<String>("pool").cloned().unwrap_or_default(),
            wildcards: m.get_one::<usize>("wildcards").copied().unwrap_or(0),
            index: m.get_one::<usize>("index").copied(),
            limit: m.get_one::<usize>("limit").copied(),
            json: m.get_flag("json"),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<SearchParams> for SearchArgs {
    fn from(p: SearchParams) -> Self {
        // No -v means no trace at all; each extra v adds a level.
        let trace = match p.verbose {
            0 => None,
            1 => Some(Verbosity::Default),
            2 => Some(Verbosity::Verbose),
            _ => Some(Verbosity::VeryVerbose),
        };

        Self {
            graph_path: p.graph_path,
            pattern: p.pattern,
            pool: p.pool,
            wildcards: p.wildcards,
            index: p.index,
            limit: p.limit,
            json: p.json,
            trace,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub graph_path: PathBuf,
    pub parents: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            graph_path: required_path(m, "graph"),
            parents: m.get_flag("parents"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            graph_path: p.graph_path,
            parents: p.parents,
            color: p.color.should_colorize(),
        }
    }
}

pub struct StatsParams {
    pub graph_path: PathBuf,
    pub json: bool,
}

impl StatsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            graph_path: required_path(m, "graph"),
            json: m.get_flag("json"),
        }
    }
}

impl From<StatsParams> for StatsArgs {
    fn from(p: StatsParams) -> Self {
        Self {
            graph_path: p.graph_path,
            json: p.json,
        }
    }
}

/// Clap enforces `.required(true)` before dispatch, so the default is never
/// observed outside of hand-built matches.
fn required_path(m: &ArgMatches, id: &str) -> PathBuf {
    m.get_one::<PathBuf>(id).cloned().unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
