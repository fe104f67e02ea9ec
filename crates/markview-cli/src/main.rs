use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use markview_printer::{FormatOptions, Formatter, IndentStyle};
use markview_search::{offset_to_position, search, Match};
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "markview")]
#[command(about = "Markview — reformat and search HTML-like markup")]
#[command(version)]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Reformat a markup file with canonical indentation
    Fmt {
        /// Input markup file
        path: PathBuf,

        /// Indent width in spaces, or "tab"
        #[arg(long, default_value = "2")]
        indent: IndentStyle,

        /// Rewrite the file in place instead of printing
        #[arg(long, conflicts_with = "check")]
        write: bool,

        /// Exit with status 1 if the file is not already formatted
        #[arg(long)]
        check: bool,
    },

    /// List case-insensitive occurrences of a query
    Find {
        /// Input markup file
        path: PathBuf,

        /// Text to search for
        query: String,

        /// Search the formatted markup instead of the file as written
        #[arg(long)]
        formatted: bool,

        /// Indent used with --formatted
        #[arg(long, default_value = "2", requires = "formatted")]
        indent: IndentStyle,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Fmt {
            path,
            indent,
            write,
            check,
        } => cmd_fmt(&path, indent, write, check),
        Command::Find {
            path,
            query,
            formatted,
            indent,
        } => cmd_find(&path, &query, formatted.then_some(indent)),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn read_source(path: &Path) -> anyhow::Result<String> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    debug!(path = %path.display(), bytes = source.len(), "read source");
    Ok(source)
}

fn cmd_fmt(path: &Path, indent: IndentStyle, write: bool, check: bool) -> anyhow::Result<ExitCode> {
    let source = read_source(path)?;
    let formatter = Formatter::new(FormatOptions::with_indent(indent));
    let formatted = formatter.format(&source);

    if check {
        if is_formatted_file(&source, &formatted) {
            info!("{} is formatted", path.display());
            return Ok(ExitCode::SUCCESS);
        }
        eprintln!("Would reformat: {}", path.display());
        return Ok(ExitCode::from(1));
    }

    if write {
        std::fs::write(path, file_contents(&formatted))
            .with_context(|| format!("writing {}", path.display()))?;
        info!("Formatted: {}", path.display());
    } else {
        println!("{formatted}");
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_find(path: &Path, query: &str, formatted: Option<IndentStyle>) -> anyhow::Result<ExitCode> {
    let source = read_source(path)?;
    let text = match formatted {
        Some(indent) => Formatter::new(FormatOptions::with_indent(indent)).format(&source),
        None => source,
    };

    let matches = search(&text, query);
    for m in &matches {
        println!("{}:{}", path.display(), describe_match(&text, *m));
    }

    match matches.len() {
        0 => {
            eprintln!("No results");
            Ok(ExitCode::from(1))
        }
        1 => {
            eprintln!("1 match");
            Ok(ExitCode::SUCCESS)
        }
        n => {
            eprintln!("{n} matches");
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// `line:column: text of the line`, both 1-based.
fn describe_match(text: &str, m: Match) -> String {
    let (line, column) = offset_to_position(text, m.start);
    let line_text = text.lines().nth(line).unwrap_or_default().trim();
    format!("{}:{}: {line_text}", line + 1, column + 1)
}

/// A file counts as formatted with or without one trailing newline.
fn is_formatted_file(source: &str, formatted: &str) -> bool {
    source.strip_suffix('\n').unwrap_or(source) == formatted
}

fn file_contents(formatted: &str) -> String {
    if formatted.is_empty() {
        String::new()
    } else {
        format!("{formatted}\n")
    }
}
