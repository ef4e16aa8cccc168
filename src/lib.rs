//! Move files to the Windows Recycle Bin.
//!
//! [`Recycler`] drives one `SHFileOperationW` call per batch through the
//! [`FileOperation`] seam, [`NativeStringArray`] owns the C strings handed
//! across the boundary, and [`ffi`] exposes the same operations to C.

pub mod config;
pub mod error;
pub mod ffi;
pub mod native_array;
pub mod recycler;
pub mod resolve;
pub mod shell;
pub mod utils;
pub mod wide;

use std::path::Path;

pub use config::RecycleOptions;
pub use error::{Error, Result};
pub use native_array::NativeStringArray;
pub use recycler::Recycler;
pub use resolve::{FullPathResolver, PathResolver};
pub use shell::{
    is_available, FileOpFlags, FileOpRequest, FileOpResponse, FileOperation, OperationKind,
};

#[cfg(windows)]
pub use shell::ShellFileOperation;

/// Move `paths` to the Recycle Bin using the platform shell.
///
/// An empty list succeeds without touching the shell. Off Windows any other
/// list fails with [`Error::Unsupported`].
pub fn recycle<P: AsRef<Path>>(
    paths: &[P],
    confirmed: bool,
    options: &RecycleOptions,
) -> Result<()> {
    if paths.is_empty() {
        return Ok(());
    }
    platform_recycle(paths, confirmed, options)
}

/// Move a single file to the Recycle Bin, letting the shell ask for
/// confirmation if it wants to.
pub fn move_to_trash(path: impl AsRef<Path>) -> Result<()> {
    recycle(&[path.as_ref()], false, &RecycleOptions::default())
}

#[cfg(windows)]
fn platform_recycle<P: AsRef<Path>>(
    paths: &[P],
    confirmed: bool,
    options: &RecycleOptions,
) -> Result<()> {
    Recycler::new(ShellFileOperation, options).recycle(paths, confirmed)
}

#[cfg(not(windows))]
fn platform_recycle<P: AsRef<Path>>(
    _paths: &[P],
    _confirmed: bool,
    _options: &RecycleOptions,
) -> Result<()> {
    Err(Error::Unsupported)
}
