//! Unix implementations of platform helpers.

use std::ffi::CString;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

/// True when the process runs with an effective uid of 0.
pub fn is_superuser() -> bool {
    // geteuid never fails
    unsafe { libc::geteuid() == 0 }
}

/// Change owner and group of `path`. Requires appropriate privileges unless
/// the identity already matches; callers treat failure as non-fatal.
pub fn chown(path: &Path, uid: u32, gid: u32) -> io::Result<()> {
    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "path contains null byte"))?;
    let rc = unsafe { libc::chown(c_path.as_ptr(), uid as libc::uid_t, gid as libc::gid_t) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}
