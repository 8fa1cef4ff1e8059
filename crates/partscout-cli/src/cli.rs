//! Command-line arguments

use clap::{Parser, ValueEnum};
use partscout_zones::DecodeConfig;
use std::path::PathBuf;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "partscout")]
#[command(about = "Decode the MBR or GPT partition table of a disk image", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Disk image to inspect
    pub image: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Reject GPT headers whose signature is not "EFI PART"
    #[arg(long)]
    pub strict: bool,

    /// Log level (trace, debug, info, warn, error); PARTSCOUT_LOG takes precedence
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Decoder configuration selected by the flags
    pub fn decode_config(&self) -> DecodeConfig {
        if self.strict {
            DecodeConfig::strict()
        } else {
            DecodeConfig::default()
        }
    }
}
