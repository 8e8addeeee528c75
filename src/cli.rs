//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug.
//! - --wipe requires the process to run with root privileges (checked in app).

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_OWNER, LogLevel, Owner};

/// CLI wrapper for the mavica_copy library.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Copy pictures taken with a Sony Mavica camera from the floppy disk to your computer.",
    long_about = "Copy pictures taken with a Sony Mavica camera from the floppy disk to your computer.\n\n\
        Target files are renamed with the timestamp of last modification in the\n\
        format `YYMMDD_hhmmss`. If more files (also in the target directory)\n\
        share the same timestamp a suffix `_i` is added, where `i` is the number\n\
        of the copy.\n\n\
        By default the floppy is left untouched after the files are copied. With\n\
        `--wipe` (`-w`), review the list of files displayed before the removal\n\
        and confirm with 'yes'."
)]
pub struct Args {
    /// Path to the mounted floppy drive.
    #[arg(value_name = "SOURCE", value_hint = ValueHint::DirPath)]
    pub source: PathBuf,

    /// Target directory for the pictures.
    #[arg(value_name = "TARGET", value_hint = ValueHint::DirPath)]
    pub target: PathBuf,

    /// Wipe all data from the floppy after copying the files (requires root).
    #[arg(short = 'w', long)]
    pub wipe: bool,

    /// Ownership applied to copied files, as UID:GID.
    #[arg(long, value_name = "UID:GID", help = "Ownership applied to copied files")]
    pub owner: Option<Owner>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > default (normal).
    pub fn effective_log_level(&self) -> LogLevel {
        if self.debug {
            return LogLevel::Debug;
        }
        self.log_level
            .as_deref()
            .and_then(LogLevel::parse)
            .unwrap_or_default()
    }

    /// Build the runtime Config from parsed arguments.
    pub fn to_config(&self) -> Config {
        Config {
            source_dir: self.source.clone(),
            target_dir: self.target.clone(),
            wipe: self.wipe,
            owner: self.owner.unwrap_or(DEFAULT_OWNER),
            log_level: self.effective_log_level(),
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
