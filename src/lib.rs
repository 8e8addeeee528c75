//! Core library for `mavica_copy`.
//!
//! Copies pictures from a mounted floppy disk to a target directory, renaming
//! each file after its last-modification timestamp (`YYMMDD_HHMMSS`, with a
//! `_i` suffix on collisions), and optionally wipes the floppy afterwards.
//!
//! The whole run is one linear pipeline:
//! scan -> assign names -> copy -> (decide) -> wipe or skip.
//!
//! Keep the library small and ergonomic: a Config type validated up front,
//! typed errors for the known failure modes, and pipeline functions that each
//! do one step and log what they did.

pub mod app;
pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod platform;

pub use config::{Config, LogLevel, Owner};
pub use errors::MavicaCopyError;
pub use pipeline::{
    Assignment, CopyReport, WipeOutcome, assign_target_names, copy_pictures, find_pictures,
    should_wipe, wipe_disk,
};
