//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;
use tracing::Level as TraceLevel;

use crate::collection::CollectionFile;

#[derive(Debug, Parser)]
#[command(
    name = "font-shelf",
    version,
    about = "Browse installed fonts and curate favorites and folders"
)]
pub struct Cli {
    /// Collection document to load at startup and save on exit
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// trace, debug, info, warn or error (default: $LOG_LEVEL, then info)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Skip fontconfig enumeration and start with only the --font names
    #[arg(long)]
    pub no_discovery: bool,

    /// Extra font name to list (repeatable)
    #[arg(long = "font", value_name = "NAME")]
    pub extra_fonts: Vec<String>,
}

impl Cli {
    pub fn data_path(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(CollectionFile::default_path)
    }

    /// `--log-level`, else `LOG_LEVEL`, else info
    pub fn trace_level(&self) -> TraceLevel {
        let raw = self
            .log_level
            .clone()
            .or_else(|| std::env::var("LOG_LEVEL").ok())
            .unwrap_or_else(|| "info".to_string());
        parse_trace_level(&raw)
    }
}

/// Unknown names fall back to info
pub fn parse_trace_level(raw: &str) -> TraceLevel {
    match raw.trim().to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    }
}
