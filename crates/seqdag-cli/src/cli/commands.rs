//! Command builders for the CLI.
//!
//! Each command is composed from the shared arg builders in `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("seqdag")
        .about("Build, inspect and search minimal sequence graphs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(build_command())
        .subcommand(contains_command())
        .subcommand(search_command())
        .subcommand(dump_command())
        .subcommand(stats_command())
}

/// Build a graph from a word list.
pub fn build_command() -> Command {
    Command::new("build")
        .about("Build a graph from a word list")
        .override_usage("  seqdag build <WORDS> -o <GRAPH>")
        .after_help(
            r#"EXAMPLES:
  seqdag build words.txt -o words.dag        # postcard binary
  seqdag build words.txt -o words.json       # JSON image
  cat words.txt | seqdag build - -o w.dag    # read stdin"#,
        )
        .arg(words_path_arg())
        .arg(output_file_arg())
}

/// Check stored words.
pub fn contains_command() -> Command {
    Command::new("contains")
        .about("Check whether words are stored in a graph")
        .override_usage("  seqdag contains <GRAPH> <WORD>...")
        .after_help(
            r#"EXAMPLES:
  seqdag contains words.dag care             # yes/no
  seqdag contains words.dag car cars cart    # exit 1 if any is missing"#,
        )
        .arg(graph_path_arg())
        .arg(lookup_words_arg())
}

/// Search a graph with a positional pattern.
pub fn search_command() -> Command {
    Command::new("search")
        .about("Find stored words that fit a pattern")
        .override_usage(
            "\
  seqdag search <GRAPH> -p <PATTERN> [--pool LETTERS] [-w N]
  seqdag search <GRAPH> -p <PATTERN> --index <I>",
        )
        .after_help(
            r#"EXAMPLES:
  seqdag search words.dag -p 'car.' --pool es           # car, care, cars
  seqdag search words.dag -p '..[lg_]izzar...' -w 6     # any izzard word
  seqdag search words.dag -p '....a....' --index 4 -w 4 # words through 'a'
  seqdag search words.dag -p 'c.t' --pool a --json      # JSON results
  seqdag search words.dag -p 'car.' --pool es -vv       # trace every step"#,
        )
        .arg(graph_path_arg())
        .arg(pattern_arg())
        .arg(pool_arg())
        .arg(wildcards_arg())
        .arg(index_arg())
        .arg(limit_arg())
        .arg(json_arg())
        .arg(verbose_arg())
        .arg(color_arg())
}

/// Dump graph nodes and edges.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show every node with its edges")
        .override_usage("  seqdag dump <GRAPH> [--parents]")
        .after_help(
            r#"EXAMPLES:
  seqdag dump words.dag              # node, value, outgoing edges
  seqdag dump words.dag --parents    # also incoming edges"#,
        )
        .arg(graph_path_arg())
        .arg(parents_arg())
        .arg(color_arg())
}

/// Show graph size.
pub fn stats_command() -> Command {
    Command::new("stats")
        .about("Show node, edge and word counts")
        .override_usage("  seqdag stats <GRAPH> [--json]")
        .after_help(
            r#"EXAMPLES:
  seqdag stats words.dag
  seqdag stats words.dag --json"#,
        )
        .arg(graph_path_arg())
        .arg(json_arg())
}
