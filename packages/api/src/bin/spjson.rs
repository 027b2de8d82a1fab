//! spjson command line
//!
//! Look up values in a JSON file by key or by explicit path.
//!
//! ```text
//! spjson schema.json key properties --under allOf
//! spjson schema.json path properties nc:Vehicle oneOf [0]
//! spjson schema.json raw
//! ```
//!
//! Exit status: 0 when something was found, 1 when nothing matched, 2 on
//! errors (unreadable file, invalid JSON, bad configuration).

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use spjson::{JsonParser, LookupConfig, LookupStatsSnapshot, PathMode, SpJson, Value};

#[derive(Parser)]
#[command(name = "spjson")]
#[command(about = "Find values in a JSON document by key or by path", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON document to search
    file: PathBuf,

    /// Lookup configuration file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Resolve paths leniently: skip unmatched segments
    #[arg(long)]
    lenient: bool,

    /// Print lookup statistics to stderr when done
    #[arg(long)]
    stats: bool,

    /// Log at debug level regardless of RUST_LOG
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Every value bound to KEY, as a JSON array
    Key {
        key: String,

        /// Only values found below a member with this name
        #[arg(long)]
        under: Option<String>,
    },

    /// The value at the end of a path of keys and [n] indices
    Path {
        #[arg(required = true, allow_hyphen_values = true)]
        segments: Vec<String>,
    },

    /// The whole document
    Raw,
}

#[derive(Serialize)]
struct StatsReport {
    lookups: u64,
    matches: u64,
    misses: u64,
    decode_errors: u64,
    bytes_processed: u64,
}

impl From<LookupStatsSnapshot> for StatsReport {
    fn from(s: LookupStatsSnapshot) -> Self {
        Self {
            lookups: s.lookups,
            matches: s.matches,
            misses: s.misses,
            decode_errors: s.decode_errors,
            bytes_processed: s.bytes_processed,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn load_config(cli: &Cli) -> anyhow::Result<LookupConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            LookupConfig::from_json(&text).with_context(|| format!("loading config {}", path.display()))?
        }
        None => LookupConfig::default(),
    };
    if cli.lenient {
        config = config.with_path_mode(PathMode::Lenient);
    }
    Ok(config)
}

/// Returns whether anything was found
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let parser = JsonParser::with_config(load_config(cli)?)?;
    let data = std::fs::read(&cli.file).with_context(|| format!("reading {}", cli.file.display()))?;
    let query = SpJson::with_parser(&data, &parser);

    let found = match &cli.command {
        Commands::Key { key, under } => {
            let values = match under {
                Some(gate) => query.under(gate.as_str()).key(key)?,
                None => query.key(key)?,
            };
            if values.is_empty() {
                log::warn!("NOT found JSON - KEY {key}");
                false
            } else {
                log::info!("found JSON - KEY {key}: {} value(s)", values.len());
                print_json(&Value::Array(values))?;
                true
            }
        }
        Commands::Path { segments } => match query.path(segments.iter().map(String::as_str))? {
            Some(value) => {
                log::info!("found JSON - PATH {}", segments.join(" > "));
                print_json(&value)?;
                true
            }
            None => {
                log::warn!("NOT found JSON - PATH {}", segments.join(" > "));
                false
            }
        },
        Commands::Raw => {
            print_json(&query.raw()?)?;
            true
        }
    };

    if cli.stats {
        let report = StatsReport::from(parser.stats().snapshot());
        eprintln!("{}", serde_json::to_string(&report)?);
    }
    Ok(found)
}

fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
