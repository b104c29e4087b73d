//! Emo-SL CLI
//!
//! Two modes:
//! - **Shell mode**: `emosl [flags] COMMAND`: single command, exit
//! - **Pipe mode**: `cat tweets.txt | emosl`: one feature vector per stdin line

mod commands;
mod format;
mod parse;

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use emosl_analysis::BatchPipeline;
use emosl_core::Corpus;
use emosl_storage::{
    clear_reports, EmoslConfig, JsonReportSink, LexiconLoader, MemoryReportSink, CONFIG_FILE_NAME,
};
use tracing::Level;

use commands::build_cli;
use format::{
    format_cleared, format_error, format_features, format_normalized, format_summary, OutputMode,
};
use parse::{global_options, matches_to_action, AnalyzeOverrides, CliAction, GlobalOptions};

fn main() {
    let matches = build_cli().get_matches();

    init_tracing(matches.get_count("verbose"));

    let mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let globals = global_options(&matches);
    let outcome = matches_to_action(&matches)
        .map_err(anyhow::Error::from)
        .and_then(|action| run(action, &globals, mode));

    let exit_code = match outcome {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            1
        }
    };
    process::exit(exit_code);
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn config_path(globals: &GlobalOptions) -> PathBuf {
    globals
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

/// Config file (or defaults) with `--data-dir` applied.
fn load_config(globals: &GlobalOptions) -> Result<EmoslConfig> {
    let path = config_path(globals);
    let mut config = match &globals.config {
        // An explicit --config must exist
        Some(_) => EmoslConfig::from_file(&path)?,
        None => EmoslConfig::load_or_default(&path)?,
    };
    if let Some(dir) = &globals.data_dir {
        config.data_dir = dir.clone();
    }
    Ok(config)
}

fn run(action: CliAction, globals: &GlobalOptions, mode: OutputMode) -> Result<i32> {
    match action {
        CliAction::Init => run_init(globals),
        CliAction::Clear { output } => {
            let config = load_config(globals)?;
            let dir = output.unwrap_or(config.output_dir);
            let removed = clear_reports(&dir)
                .with_context(|| format!("Failed to clear reports in '{}'", dir.display()))?;
            println!("{}", format_cleared(removed, &dir, mode));
            Ok(0)
        }
        CliAction::Analyze(overrides) => run_analyze(&load_config(globals)?, overrides, mode),
        CliAction::Normalize(text) => {
            let lexicons = LexiconLoader::from_config(&load_config(globals)?).load_lexicons();
            let processed = BatchPipeline::new(&lexicons).normalizer().normalize(&text);
            println!("{}", format_normalized(&text, &processed, mode));
            Ok(0)
        }
        CliAction::Features(text) => {
            run_in_memory(&load_config(globals)?, Corpus::new(vec![text]), mode)
        }
        CliAction::Pipe => run_pipe(&load_config(globals)?, mode),
    }
}

/// Analyze `corpus` without writing a report; print one feature vector per tweet.
fn run_in_memory(config: &EmoslConfig, corpus: Corpus, mode: OutputMode) -> Result<i32> {
    let lexicons = LexiconLoader::from_config(config).load_lexicons();
    let mut sink = MemoryReportSink::new();
    BatchPipeline::new(&lexicons)
        .with_options(config.analysis.pipeline_options()?)
        .run(&corpus, &mut sink)?;
    for record in &sink.records {
        println!("{}", format_features(&record.features, mode));
    }
    Ok(0)
}

fn run_init(globals: &GlobalOptions) -> Result<i32> {
    let path = config_path(globals);
    if EmoslConfig::write_default_if_missing(&path)? {
        eprintln!("Wrote {}", path.display());
    } else {
        eprintln!("{} already exists, left unchanged", path.display());
    }
    Ok(0)
}

fn run_analyze(config: &EmoslConfig, overrides: AnalyzeOverrides, mode: OutputMode) -> Result<i32> {
    let mut analysis = config.analysis.clone();
    if let Some(rule) = overrides.emoji_detection {
        analysis.emoji_detection = rule;
    }
    analysis.parallel |= overrides.parallel;
    analysis.keep_corpus_emojis |= overrides.keep_corpus_emojis;
    let options = analysis.pipeline_options()?;

    let loader = LexiconLoader::from_config(config);
    let lexicons = loader.load_lexicons();
    let corpus = loader.load_corpus();

    let output_dir = overrides.output.unwrap_or_else(|| config.output_dir.clone());
    let mut sink = JsonReportSink::new(&output_dir);
    let summary = BatchPipeline::new(&lexicons)
        .with_options(options)
        .run(&corpus, &mut sink)
        .with_context(|| format!("Failed to write report into '{}'", output_dir.display()))?;

    println!(
        "{}",
        format_summary(corpus.len(), &summary, sink.written_path(), mode)
    );
    Ok(0)
}

fn run_pipe(config: &EmoslConfig, mode: OutputMode) -> Result<i32> {
    let mut tweets = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            tweets.push(trimmed.to_string());
        }
    }
    run_in_memory(config, Corpus::new(tweets), mode)
}
