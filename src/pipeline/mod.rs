//! The copy pipeline, one module per step:
//! scan (find pictures) -> name (assign timestamp names) -> copy -> wipe.

mod copy;
mod name;
mod scan;
mod wipe;

pub use copy::{CopyReport, copy_pictures};
pub use name::{Assignment, assign_target_names};
pub use scan::find_pictures;
pub use wipe::{WipeOutcome, wipe_disk};

/// Gate for the destructive step: wipe only when it was requested and every
/// single copy succeeded. A partial copy must never cost the user their
/// originals.
pub fn should_wipe(wipe_requested: bool, report: &CopyReport) -> bool {
    wipe_requested && report.failed.is_empty()
}
