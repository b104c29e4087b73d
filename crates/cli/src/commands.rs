//! Clap command tree definition.

use clap::{Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("emosl")
        .about("Emoji-aware sentiment analysis for Arabic tweets")
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .help("Config file (default: emosl.toml)")
                .global(true),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Directory holding lexicons and tweets (overrides config)")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log more (repeat for debug/trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(build_analyze())
        .subcommand(build_normalize())
        .subcommand(build_features())
        .subcommand(build_init())
        .subcommand(build_clear())
}

// =========================================================================
// Batch
// =========================================================================

fn build_analyze() -> Command {
    Command::new("analyze")
        .about("Analyze the corpus and write a JSON report")
        .arg(
            Arg::new("output")
                .long("output")
                .help("Report directory (overrides config)"),
        )
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .help("Analyze tweets on all cores")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("emoji-detection")
                .long("emoji-detection")
                .help("Emoji detection rule")
                .value_parser(["lexicon", "known-list"]),
        )
        .arg(
            Arg::new("keep-corpus-emojis")
                .long("keep-corpus-emojis")
                .help("Keep emojis when preprocessing the corpus for Emo-SL")
                .action(ArgAction::SetTrue),
        )
}

fn build_clear() -> Command {
    Command::new("clear")
        .about("Remove generated reports")
        .arg(
            Arg::new("output")
                .long("output")
                .help("Report directory (overrides config)"),
        )
}

// =========================================================================
// Single text
// =========================================================================

fn build_normalize() -> Command {
    Command::new("normalize")
        .about("Print the normalized form of a text")
        .arg(Arg::new("text").required(true).help("Text to normalize"))
}

fn build_features() -> Command {
    Command::new("features")
        .about("Normalize a text and print its feature vector")
        .arg(Arg::new("text").required(true).help("Text to analyze"))
}

// =========================================================================
// Setup
// =========================================================================

fn build_init() -> Command {
    Command::new("init").about("Write a default emosl.toml if none exists")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn parses_analyze_flags() {
        let m = build_cli()
            .try_get_matches_from([
                "emosl",
                "analyze",
                "--parallel",
                "--emoji-detection",
                "known-list",
                "--output",
                "out",
            ])
            .unwrap();
        let (name, sub) = m.subcommand().unwrap();
        assert_eq!(name, "analyze");
        assert!(sub.get_flag("parallel"));
        assert!(!sub.get_flag("keep-corpus-emojis"));
        assert_eq!(sub.get_one::<String>("emoji-detection").unwrap(), "known-list");
        assert_eq!(sub.get_one::<String>("output").unwrap(), "out");
    }

    #[test]
    fn rejects_unknown_detection() {
        assert!(build_cli()
            .try_get_matches_from(["emosl", "analyze", "--emoji-detection", "regex"])
            .is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let m = build_cli()
            .try_get_matches_from(["emosl", "normalize", "نص", "--json", "-vv"])
            .unwrap();
        assert!(m.get_flag("json"));
        assert_eq!(m.get_count("verbose"), 2);
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let m = build_cli().try_get_matches_from(["emosl"]).unwrap();
        assert!(m.subcommand().is_none());
    }
}
