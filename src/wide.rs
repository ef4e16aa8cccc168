//! UTF-16 helpers and the double-null-terminated path list that
//! `SHFileOperationW` expects in `pFrom`.
//!
//! Each entry is written followed by one NUL and the list ends with a second
//! NUL. An empty list is a single NUL.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

#[cfg(windows)]
pub fn to_wide(s: &OsStr) -> Result<Vec<u16>> {
    use std::os::windows::ffi::OsStrExt;
    Ok(s.encode_wide().collect())
}

/// Off Windows a path only has a UTF-16 form if it is valid UTF-8.
#[cfg(not(windows))]
pub fn to_wide(s: &OsStr) -> Result<Vec<u16>> {
    let utf8 = s
        .to_str()
        .ok_or_else(|| Error::NonUnicodePath(PathBuf::from(s)))?;
    Ok(utf8.encode_utf16().collect())
}

#[cfg(windows)]
pub fn from_wide(units: &[u16]) -> OsString {
    use std::os::windows::ffi::OsStringExt;
    OsString::from_wide(units)
}

/// Only meant for buffers built by [`to_wide`], which are always valid UTF-16.
#[cfg(not(windows))]
pub fn from_wide(units: &[u16]) -> OsString {
    OsString::from(String::from_utf16_lossy(units))
}

/// `to_wide` plus a trailing NUL, for single-string Win32 parameters.
pub fn to_wide_nul(s: &OsStr) -> Result<Vec<u16>> {
    let mut units = to_wide(s)?;
    units.push(0);
    Ok(units)
}

/// Builder for the concatenated path buffer.
#[derive(Debug, Default)]
pub struct PathList {
    buf: Vec<u16>,
    count: usize,
}

impl PathList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from already-resolved paths, sizing the buffer up front.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let encoded: Vec<Vec<u16>> = paths
            .iter()
            .map(|p| to_wide(p.as_ref().as_os_str()))
            .collect::<Result<_>>()?;
        let units: usize = encoded.iter().map(|e| e.len() + 1).sum::<usize>() + 1;

        let mut list = Self {
            buf: Vec::with_capacity(units),
            count: 0,
        };
        for (path, wide) in paths.iter().zip(encoded) {
            list.push_units(path.as_ref(), wide)?;
        }
        Ok(list)
    }

    pub fn push(&mut self, path: &Path) -> Result<()> {
        let wide = to_wide(path.as_os_str())?;
        self.push_units(path, wide)
    }

    fn push_units(&mut self, path: &Path, wide: Vec<u16>) -> Result<()> {
        if wide.contains(&0) {
            return Err(Error::InteriorNul(path.to_path_buf()));
        }
        self.buf.extend_from_slice(&wide);
        self.buf.push(0);
        self.count += 1;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Append the end-of-list terminator and hand back the buffer.
    pub fn finish(mut self) -> Vec<u16> {
        self.buf.push(0);
        self.buf
    }
}

/// Decode a double-null-terminated buffer back into its entries.
/// Stops at the first empty entry.
pub fn split_entries(buf: &[u16]) -> Vec<PathBuf> {
    buf.split(|&u| u == 0)
        .take_while(|entry| !entry.is_empty())
        .map(|entry| PathBuf::from(from_wide(entry)))
        .collect()
}
