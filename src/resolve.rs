use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::config::{MAX_PATH, MAX_WIDE_PATH};
use crate::error::{Error, Result};
use crate::wide;

/// Turns a caller-supplied path into the absolute form handed to the shell.
pub trait PathResolver {
    fn resolve(&self, path: &Path) -> Result<PathBuf>;
}

/// Lexical full-path resolution with a hard length limit.
///
/// `max_len` counts UTF-16 units including the terminator, so the default
/// accepts paths of up to 259 characters. It is clamped to
/// `1..=MAX_WIDE_PATH`. `.` and `..` components are folded on every platform
/// and the filesystem is never consulted, so symlinks are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullPathResolver {
    max_len: usize,
}

impl Default for FullPathResolver {
    fn default() -> Self {
        Self::new(MAX_PATH)
    }
}

impl FullPathResolver {
    pub fn new(max_len: usize) -> Self {
        Self {
            max_len: max_len.clamp(1, MAX_WIDE_PATH),
        }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

impl PathResolver for FullPathResolver {
    fn resolve(&self, path: &Path) -> Result<PathBuf> {
        let input = wide::to_wide(path.as_os_str())?;
        if input.contains(&0) {
            return Err(Error::InteriorNul(path.to_path_buf()));
        }

        let resolved = full_path(path, self.max_len)?;
        debug!(from = %path.display(), to = %resolved.display(), "resolved path");
        Ok(resolved)
    }
}

#[cfg(windows)]
fn full_path(path: &Path, max_len: usize) -> Result<PathBuf> {
    use windows_sys::Win32::Storage::FileSystem::GetFullPathNameW;

    let input = wide::to_wide_nul(path.as_os_str())?;
    let mut buf = vec![0u16; max_len];
    // `max_len` is clamped to MAX_WIDE_PATH, well inside u32.
    let buf_len = buf.len() as u32;
    let mut file_part: *mut u16 = std::ptr::null_mut();

    // Returns the length without terminator on success, or the required
    // size with terminator when `buf` is too small.
    let ret = unsafe {
        GetFullPathNameW(input.as_ptr(), buf_len, buf.as_mut_ptr(), &mut file_part)
    };
    let ret = ret as usize;

    if ret == 0 {
        return Err(Error::Resolve {
            path: path.to_path_buf(),
            source: std::io::Error::last_os_error(),
        });
    }
    if ret >= buf.len() {
        return Err(Error::PathTooLong {
            path: path.to_path_buf(),
            len: ret,
            max: max_len,
        });
    }

    Ok(PathBuf::from(wide::from_wide(&buf[..ret])))
}

#[cfg(not(windows))]
fn full_path(path: &Path, max_len: usize) -> Result<PathBuf> {
    let absolute = std::path::absolute(path).map_err(|source| Error::Resolve {
        path: path.to_path_buf(),
        source,
    })?;
    let resolved = fold_dots(&absolute);

    let len = wide::to_wide(resolved.as_os_str())?.len() + 1;
    if len > max_len {
        return Err(Error::PathTooLong {
            path: path.to_path_buf(),
            len,
            max: max_len,
        });
    }
    Ok(resolved)
}

/// Drop `.` and apply `..` textually, never climbing above the root.
#[cfg_attr(windows, allow(dead_code))]
fn fold_dots(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_become_absolute() {
        let resolved = FullPathResolver::default()
            .resolve(Path::new("some-file.txt"))
            .unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("some-file.txt"));
    }

    #[test]
    fn missing_files_still_resolve() {
        let resolved = FullPathResolver::default()
            .resolve(Path::new("does/not/exist"))
            .unwrap();
        assert!(resolved.is_absolute());
    }

    #[test]
    fn long_paths_are_rejected_not_truncated() {
        let long = "x".repeat(400);
        let err = FullPathResolver::default()
            .resolve(Path::new(&long))
            .unwrap_err();
        match err {
            Error::PathTooLong { len, max, .. } => {
                assert!(len > 400);
                assert_eq!(max, MAX_PATH);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn limit_is_configurable() {
        let long = "x".repeat(400);
        let resolved = FullPathResolver::new(32_767).resolve(Path::new(&long));
        assert!(resolved.is_ok());
    }

    #[test]
    fn oversized_limit_is_clamped() {
        assert_eq!(FullPathResolver::new(usize::MAX).max_len(), MAX_WIDE_PATH);
        assert_eq!(FullPathResolver::new(0).max_len(), 1);
        assert_eq!(FullPathResolver::new(1024).max_len(), 1024);

        let resolved = FullPathResolver::new(usize::MAX).resolve(Path::new("big-limit.txt"));
        assert!(resolved.unwrap().ends_with("big-limit.txt"));
    }

    #[test]
    fn parent_components_are_folded() {
        let resolved = FullPathResolver::default()
            .resolve(Path::new("a/./b/../c.txt"))
            .unwrap();
        assert!(resolved.ends_with("a/c.txt"));
        assert!(resolved
            .components()
            .all(|c| !matches!(c, Component::ParentDir | Component::CurDir)));
    }

    #[test]
    fn fold_stops_at_root() {
        let root = std::path::absolute(Path::new("/")).unwrap();
        let folded = fold_dots(&root.join("..").join("..").join("x"));
        assert_eq!(folded, root.join("x"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"caf\xe9.txt"));
        let err = FullPathResolver::default().resolve(path).unwrap_err();
        assert!(matches!(err, Error::NonUnicodePath(_)));
    }

    #[test]
    fn empty_path_fails_to_resolve() {
        let err = FullPathResolver::default()
            .resolve(Path::new(""))
            .unwrap_err();
        assert!(matches!(err, Error::Resolve { .. }));
    }

    #[test]
    fn interior_nul_is_rejected() {
        let err = FullPathResolver::default()
            .resolve(Path::new("a\0b"))
            .unwrap_err();
        assert!(matches!(err, Error::InteriorNul(_)));
    }
}
