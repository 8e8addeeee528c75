//! Platform-specific helpers.
//! This module hides OS differences behind a uniform API so the rest of the
//! codebase can remain platform-agnostic.

#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod other;

#[cfg(unix)]
pub use unix::{chown, is_superuser};

#[cfg(not(unix))]
pub use other::{chown, is_superuser};
