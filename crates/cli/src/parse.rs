//! ArgMatches → CliAction

use clap::ArgMatches;
use emosl_core::{Error, Result};
use std::path::PathBuf;

/// Flags shared by every action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
}

/// Overrides given to `analyze` on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzeOverrides {
    pub output: Option<PathBuf>,
    pub parallel: bool,
    pub emoji_detection: Option<String>,
    pub keep_corpus_emojis: bool,
}

/// What the binary should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Analyze(AnalyzeOverrides),
    Normalize(String),
    Features(String),
    Init,
    Clear { output: Option<PathBuf> },
    Pipe,
}

pub fn global_options(matches: &ArgMatches) -> GlobalOptions {
    GlobalOptions {
        config: matches.get_one::<String>("config").map(PathBuf::from),
        data_dir: matches.get_one::<String>("data-dir").map(PathBuf::from),
    }
}

/// # Errors
///
/// `InvalidInput` when `normalize` or `features` get blank text.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction> {
    let action = match matches.subcommand() {
        Some(("analyze", sub)) => CliAction::Analyze(AnalyzeOverrides {
            output: sub.get_one::<String>("output").map(PathBuf::from),
            parallel: sub.get_flag("parallel"),
            emoji_detection: sub.get_one::<String>("emoji-detection").cloned(),
            keep_corpus_emojis: sub.get_flag("keep-corpus-emojis"),
        }),
        Some(("normalize", sub)) => CliAction::Normalize(text_arg("normalize", sub)?),
        Some(("features", sub)) => CliAction::Features(text_arg("features", sub)?),
        Some(("init", _)) => CliAction::Init,
        Some(("clear", sub)) => CliAction::Clear {
            output: sub.get_one::<String>("output").map(PathBuf::from),
        },
        _ => CliAction::Pipe,
    };
    Ok(action)
}

fn text_arg(command: &str, sub: &ArgMatches) -> Result<String> {
    match sub.get_one::<String>("text") {
        Some(text) if !text.trim().is_empty() => Ok(text.clone()),
        _ => Err(Error::invalid_input(format!("'{}' needs a non-empty text", command))),
    }
}
