//! Application orchestrator.
//! Initializes logging, validates the configured paths, checks privileges for
//! wipe mode, then drives scan -> name -> copy -> (decide) -> wipe.

use anyhow::{Result, bail};
use std::io;
use tracing::{debug, info, warn};

use crate::cli::Args;
use crate::errors::MavicaCopyError;
use crate::logging::init_tracing;
use crate::output;
use crate::pipeline::{
    WipeOutcome, assign_target_names, copy_pictures, find_pictures, should_wipe, wipe_disk,
};
use crate::platform;

/// Run the CLI application.
///
/// Fatal pre-flight problems (bad paths, wipe without root) return an error
/// before any filesystem side effect. Individual copy failures are reported
/// in the summary but do not make the run fail; they only veto the wipe.
pub fn run(args: Args) -> Result<()> {
    let cfg = args.to_config();
    init_tracing(&cfg.log_level)?;
    debug!("Starting mavica_copy: {:?}", cfg);

    cfg.validate()?;

    // Wipe mode is destructive; refuse it up front without root so a failed
    // privilege check cannot surface only after the copy already happened.
    if cfg.wipe && !platform::is_superuser() {
        bail!(MavicaCopyError::PrivilegeRequired);
    }

    let pictures = find_pictures(&cfg.source_dir)?;
    let assignments = assign_target_names(&cfg.target_dir, &pictures)?;
    let report = copy_pictures(&assignments, &cfg.target_dir, cfg.owner);

    output::print_info(&format!(
        "Copied {}/{} pictures to {}",
        report.copied.len(),
        report.total(),
        cfg.target_dir.display()
    ));

    if cfg.wipe && !report.is_complete() {
        warn!("Aborting wiping the disk - some files were not copied");
    } else if should_wipe(cfg.wipe, &report) {
        match wipe_disk(&cfg.source_dir, io::stdin().lock())? {
            WipeOutcome::Wiped(n) => info!("Wiped {} entries from {}", n, cfg.source_dir.display()),
            WipeOutcome::Declined => {}
        }
    }

    Ok(())
}
