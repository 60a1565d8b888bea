//! CLI entry point for roamtree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use roamtree::file_utils::parse_file_size;
use roamtree::{Converter, ConverterConfig, to_json, write_json};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Logs go to stderr
            std::io::stderr().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "roamtree")]
#[command(about = "Turn a directory tree into a Roam Research JSON import")]
#[command(version)]
struct Args {
    /// Root directory to convert
    #[arg(long = "input-dir", alias = "inputDir", value_name = "PATH")]
    input_dir: PathBuf,

    /// Where to write the table of contents document
    #[arg(long = "output-toc-path", alias = "outputTocPath", value_name = "PATH")]
    output_toc_path: PathBuf,

    /// Where to write the pages document
    #[arg(long = "output-pages-path", alias = "outputPagesPath", value_name = "PATH")]
    output_pages_path: PathBuf,

    /// Ignore files and directories matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Skip page creation for files larger than SIZE (e.g. 500K, 5M)
    #[arg(long = "max-file-size", value_name = "SIZE")]
    max_file_size: Option<String>,

    /// Pretty-print the JSON documents
    #[arg(long = "pretty")]
    pretty: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn init_tracing(args: &Args) {
    let level = match (args.quiet, args.verbose) {
        (true, _) => "roamtree=warn",
        (false, 0) => "roamtree=info",
        (false, 1) => "roamtree=debug",
        (false, _) => "roamtree=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(should_use_color(args.color))
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(&args);

    println!("Using input directory: {}", args.input_dir.display());
    println!(
        "Using output table of contents path: {}",
        args.output_toc_path.display()
    );
    println!("Using output pages path: {}", args.output_pages_path.display());

    let max_file_size = args.max_file_size.as_ref().map(|size_str| {
        parse_file_size(size_str).unwrap_or_else(|e| {
            eprintln!("roamtree: invalid --max-file-size '{}': {}", size_str, e);
            process::exit(1);
        })
    });

    let config = ConverterConfig {
        ignore_patterns: args.ignore.clone(),
        max_file_size,
    };

    if let Err(e) = run(&args, config) {
        eprintln!("roamtree: {}", e);
        process::exit(1);
    }
}

/// Convert, serialize both documents, then write them.
fn run(args: &Args, config: ConverterConfig) -> roamtree::Result<()> {
    let started = Instant::now();

    let output = Converter::new(config)?.convert(&args.input_dir)?;
    let toc_json = to_json(&output.toc, args.pretty)?;
    let pages_json = to_json(&output.pages, args.pretty)?;

    write_json(&args.output_toc_path, &toc_json)?;
    write_json(&args.output_pages_path, &pages_json)?;

    let stats = output.stats;
    // Millisecond precision is enough for a summary line
    let elapsed = std::time::Duration::from_millis(started.elapsed().as_millis() as u64);
    println!(
        "Converted {} directories, {} files into {} pages ({} skipped) in {}",
        stats.directories,
        stats.files,
        stats.pages,
        stats.skipped,
        humantime::format_duration(elapsed)
    );
    Ok(())
}
