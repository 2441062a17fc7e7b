//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg`; commands compose them in
//! `commands.rs`.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Stored graph file (positional). `.json` selects the JSON encoding.
pub fn graph_path_arg() -> Arg {
    Arg::new("graph")
        .value_name("GRAPH")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Graph file (.json for JSON, anything else binary)")
}

/// Word list, one entry per line (positional, `-` for stdin).
pub fn words_path_arg() -> Arg {
    Arg::new("words")
        .value_name("WORDS")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Word list, one per line ('-' reads stdin)")
}

/// Where to write the built graph (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("GRAPH")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Write the graph to file (.json for JSON)")
}

/// Words to look up (trailing positionals).
pub fn lookup_words_arg() -> Arg {
    Arg::new("lookup")
        .value_name("WORD")
        .required(true)
        .num_args(1..)
        .help("Words to look up")
}

/// Search pattern (-p/--pattern).
pub fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .short('p')
        .long("pattern")
        .value_name("PATTERN")
        .required(true)
        .help("Pattern: letters fixed, '.' open, '_' empty, '[ab_]' choice")
}

/// Letters available for open positions (--pool).
pub fn pool_arg() -> Arg {
    Arg::new("pool")
        .long("pool")
        .value_name("LETTERS")
        .default_value("")
        .help("Letters that may fill open positions, each used once")
}

/// Wildcard budget (-w/--wildcards).
pub fn wildcards_arg() -> Arg {
    Arg::new("wildcards")
        .short('w')
        .long("wildcards")
        .value_name("N")
        .default_value("0")
        .value_parser(value_parser!(usize))
        .help("Open positions that may take any letter")
}

/// Position every match must cover (--index).
pub fn index_arg() -> Arg {
    Arg::new("index")
        .long("index")
        .value_name("I")
        .value_parser(value_parser!(usize))
        .help("Only report matches covering this position")
}

/// Stop after N matches (--limit).
pub fn limit_arg() -> Arg {
    Arg::new("limit")
        .long("limit")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Stop after N matches")
}

/// Machine-readable output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output JSON")
}

/// Search trace level (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Trace the search on stderr (-v, -vv steps, -vvv resources)")
}

/// Incoming edges in dumps (--parents).
pub fn parents_arg() -> Arg {
    Arg::new("parents")
        .long("parents")
        .action(ArgAction::SetTrue)
        .help("Also list incoming edges")
}

/// Colorize output (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
