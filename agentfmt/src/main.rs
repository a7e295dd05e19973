//! # agentfmt
//!
//! A CLI for rendering raw agent listings as fixed-width operator reports.
//!
//! ## Overview
//!
//! agentfmt is built on top of agentfmtlib. It reads the response chunks of a
//! directory or process listing task, either as files, from stdin, or as a
//! task result JSON document, and prints the rendered report.
//!
//! ## Usage
//!
//! ```bash
//! # Render a directory listing from chunk files (each file is one chunk)
//! agentfmt ls chunk-1.txt chunk-2.txt
//!
//! # Use the positional subject strategy
//! agentfmt ls --strategy positional listing.txt
//!
//! # Render a process listing from stdin
//! cat tasklist.txt | agentfmt ps
//!
//! # Render a task result document and emit {"plaintext": ...}
//! agentfmt ps --task result.json --output json
//!
//! # Pass through output of a failed task
//! agentfmt ls --status error listing.txt
//! ```
//!
//! Logging goes to stderr and is controlled with `AGENTFMT_LOG`
//! (e.g. `AGENTFMT_LOG=debug`) or `--verbose`.

use std::process::ExitCode;

use agentfmtlib::source::{load_chunks, read_chunks};
use agentfmtlib::{render, DisplayOutput, ListingStrategy, RawReport, RenderOptions, ReportKind};
use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "AGENTFMT_LOG";

/// Environment variable holding the default listing strategy
const STRATEGY_ENV: &str = "AGENTFMT_STRATEGY";

/// Add the arguments shared by every report subcommand
fn input_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("chunks")
            .action(ArgAction::Append)
            .help("Response chunk files, in order (reads stdin when omitted)"),
    )
    .arg(
        Arg::new("status")
            .short('s')
            .long("status")
            .default_value("success")
            .conflicts_with("task")
            .help("Task status; any status containing 'error' passes output through"),
    )
    .arg(
        Arg::new("task")
            .short('t')
            .long("task")
            .conflicts_with("chunks")
            .help("Task result JSON file with 'status' and 'responses'"),
    )
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("agentfmt")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Render raw agent directory and process listings as fixed-width reports")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .global(true)
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log parsing decisions to stderr"),
        )
        .subcommand(
            input_args(Command::new("ls").about("Render a directory listing")).arg(
                Arg::new("strategy")
                    .long("strategy")
                    .env(STRATEGY_ENV)
                    .value_parser(["robust", "positional"])
                    .default_value("robust")
                    .help("How to locate the listed path"),
            ),
        )
        .subcommand(input_args(
            Command::new("ps")
                .visible_alias("tasklist")
                .about("Render a process listing"),
        ))
}

/// Install the stderr subscriber
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Read chunk contents from the files named on the command line, or stdin
fn input_chunks(matches: &ArgMatches) -> anyhow::Result<Vec<String>> {
    let paths: Vec<&String> = matches
        .get_many::<String>("chunks")
        .map(|v| v.collect())
        .unwrap_or_default();

    if paths.is_empty() {
        return read_chunks(std::io::stdin().lock()).context("failed to read stdin");
    }

    Ok(load_chunks(&paths)?)
}

/// Assemble the raw report from the subcommand arguments
fn load_report(matches: &ArgMatches) -> anyhow::Result<RawReport> {
    if let Some(task) = matches.get_one::<String>("task") {
        let json = std::fs::read_to_string(task)
            .with_context(|| format!("failed to read task file '{}'", task))?;
        return Ok(RawReport::from_json(&json)?);
    }

    let status = matches
        .get_one::<String>("status")
        .map(|s| s.as_str())
        .unwrap_or("success");
    Ok(RawReport::new(status, input_chunks(matches)?))
}

/// Build render options for a subcommand
fn render_options(kind: ReportKind, matches: &ArgMatches) -> anyhow::Result<RenderOptions> {
    let mut options = RenderOptions::new().kind(kind);
    if kind == ReportKind::Listing {
        if let Some(strategy) = matches.get_one::<String>("strategy") {
            options = options.strategy(strategy.parse::<ListingStrategy>()?);
        }
    }
    Ok(options)
}

/// Handler for the report subcommands
fn report_handler(kind: ReportKind, matches: &ArgMatches, json: bool) -> anyhow::Result<String> {
    let options = render_options(kind, matches)?;
    let report = load_report(matches)?;
    debug!(
        chunks = report.responses.len(),
        error = report.status.is_error(),
        "loaded report"
    );

    let output: DisplayOutput = render(&report, &options);
    if json {
        Ok(serde_json::to_string_pretty(&output)?)
    } else {
        Ok(output.plaintext)
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_flag("verbose"));

    let json = matches
        .get_one::<String>("output")
        .is_some_and(|mode| mode == "json");

    let result = match matches.subcommand() {
        Some(("ls", sub)) => report_handler(ReportKind::Listing, sub, json),
        Some(("ps", sub)) => report_handler(ReportKind::Processes, sub, json),
        _ => Err(anyhow::anyhow!("unknown command")),
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {:#}", style("Error:").red().bold().for_stderr(), e);
            ExitCode::FAILURE
        }
    }
}
