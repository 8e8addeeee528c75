//! Runtime configuration.
//! - Config holds the validated inputs for one run.
//! - LogLevel represents verbosity with simple parsing helpers.
//! - Owner is the uid:gid identity applied to copied files (best-effort).

use anyhow::{Context, Result, bail};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info};

use crate::errors::MavicaCopyError;

/// Ownership applied to copied files when nothing else is requested.
pub const DEFAULT_OWNER: Owner = Owner { uid: 1000, gid: 1000 };

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// uid:gid pair applied to successfully copied files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Owner {
    pub uid: u32,
    pub gid: u32,
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.uid, self.gid)
    }
}

impl FromStr for Owner {
    type Err = MavicaCopyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || MavicaCopyError::InvalidOwner(s.to_string());
        let (uid, gid) = s.split_once(':').ok_or_else(bad)?;
        Ok(Owner {
            uid: uid.trim().parse().map_err(|_| bad())?,
            gid: gid.trim().parse().map_err(|_| bad())?,
        })
    }
}

/// Runtime configuration used by one copy run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Mounted floppy directory the pictures are read from
    pub source_dir: PathBuf,
    /// Destination directory for the renamed copies
    pub target_dir: PathBuf,
    /// Wipe the floppy after a fully successful copy
    pub wipe: bool,
    /// Ownership applied to copied files (best-effort)
    pub owner: Owner,
    /// Console verbosity
    pub log_level: LogLevel,
}

impl Config {
    /// Construct a Config with explicit directories; other fields use defaults.
    pub fn new(source_dir: impl Into<PathBuf>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            target_dir: target_dir.into(),
            wipe: false,
            owner: DEFAULT_OWNER,
            log_level: LogLevel::default(),
        }
    }

    /// Validate the configured paths for sanity and permissions.
    ///
    /// - source_dir must exist, be a directory and be readable.
    /// - target_dir must exist, be a directory and be writable.
    /// - source_dir and target_dir must not resolve to the same path.
    ///
    /// Runs before any work starts so a bad invocation has no side effects.
    pub fn validate(&self) -> Result<()> {
        for dir in [&self.source_dir, &self.target_dir] {
            if !dir.exists() {
                bail!(MavicaCopyError::MissingPath(dir.clone()));
            }
            if !dir.is_dir() {
                bail!(MavicaCopyError::NotADirectory(dir.clone()));
            }
        }

        // readability probe
        fs::read_dir(&self.source_dir).with_context(|| {
            format!(
                "Cannot read source directory '{}'; check permissions",
                self.source_dir.display()
            )
        })?;
        debug!("Source directory readable: {}", self.source_dir.display());

        // writability probe: create & remove a small temp file
        let probe = self
            .target_dir
            .join(format!(".mavica_copy_probe_{}.tmp", std::process::id()));
        match fs::OpenOptions::new().create_new(true).write(true).open(&probe) {
            Ok(_) => {
                let _ = fs::remove_file(&probe);
                debug!("Target directory writable: {}", self.target_dir.display());
            }
            Err(e) => {
                bail!(
                    "Cannot write to target directory '{}': {}. Check directory permissions.",
                    self.target_dir.display(),
                    e
                );
            }
        }

        // ensure the directories are not the same (account for symlinks)
        let src_real = fs::canonicalize(&self.source_dir).unwrap_or_else(|_| self.source_dir.clone());
        let tgt_real = fs::canonicalize(&self.target_dir).unwrap_or_else(|_| self.target_dir.clone());
        if src_real == tgt_real {
            bail!(
                "Source and target must be different directories; both resolve to '{}'",
                src_real.display()
            );
        }

        info!(
            "Config validated: source='{}' target='{}'",
            self.source_dir.display(),
            self.target_dir.display()
        );
        Ok(())
    }
}
