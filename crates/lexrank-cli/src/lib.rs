// lexrank-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use lexrank_engine::{Engine, TableAnalyzer, TableError};

/// Environment variable naming the analyzer table file.
pub const TABLE_PATH_ENV: &str = "LEXRANK_TABLE_PATH";

/// Analyzer table file name looked up in fallback directories.
const TABLE_FILE: &str = "lexrank-table.json";

/// Search for the analyzer table and create an Engine.
///
/// Search order:
/// 1. `table_path` argument (if provided)
/// 2. `LEXRANK_TABLE_PATH` environment variable (a file, or a directory containing `lexrank-table.json`)
/// 3. `~/.lexrank/lexrank-table.json`
/// 4. Current working directory
pub fn load_engine(table_path: Option<&str>) -> Result<Engine, String> {
    let candidates = build_search_paths(table_path);

    for path in &candidates {
        if path.is_file() {
            let table = TableAnalyzer::from_path(path).map_err(|e: TableError| {
                format!("failed to load {}: {e}", path.display())
            })?;
            tracing::info!(path = %path.display(), words = table.len(), "analyzer table loaded");
            return Ok(Engine::from_table(table));
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        TABLE_FILE,
        candidates
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of candidate table files.
fn build_search_paths(table_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = table_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(TABLE_PATH_ENV) {
        paths.push(PathBuf::from(&env_path));
        paths.push(PathBuf::from(&env_path).join(TABLE_FILE));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".lexrank").join(TABLE_FILE));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(TABLE_FILE));
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Install the fmt subscriber. `RUST_LOG` wins; otherwise `-v` selects
/// `debug` and the default is `warn`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse a `--table=PATH` or `-t PATH` argument from command line args.
///
/// Returns `(table_path, remaining_args)`.
pub fn parse_table_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut table_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--table=") {
            table_path = Some(val.to_string());
        } else if arg == "--table" || arg == "-t" {
            if i + 1 < args.len() {
                table_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (table_path, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Check if a flag is present in the args.
pub fn has_flag(args: &[String], long: &str, short: Option<&str>) -> bool {
    args.iter()
        .any(|a| a == long || short.is_some_and(|s| a == s))
}
