use std::ffi::{CStr, CString, OsStr};
use std::os::raw::c_char;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Fixed-size table of owned C strings, indexed densely from zero.
///
/// Slots start empty. Dropping the array releases every string it owns.
#[derive(Debug, Default)]
pub struct NativeStringArray {
    slots: Box<[Option<CString>]>,
}

impl NativeStringArray {
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![None; size].into_boxed_slice(),
        }
    }

    /// Convert a host-side list into a fully populated array.
    pub fn from_strings<I, S>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let slots = items
            .into_iter()
            .map(|s| os_to_cstring(s.as_ref()).map(Some))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Store `value` at `index`, returning whatever was there before.
    pub fn set(&mut self, index: usize, value: CString) -> Result<Option<CString>> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })?;
        Ok(slot.replace(value))
    }

    pub fn get(&self, index: usize) -> Option<&CStr> {
        self.slots.get(index)?.as_deref()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&CStr>> + '_ {
        self.slots.iter().map(|s| s.as_deref())
    }

    /// Borrowed `char**` view; empty slots are null. Valid while `self` is.
    pub fn as_ptrs(&self) -> Vec<*const c_char> {
        self.iter()
            .map(|s| s.map_or(std::ptr::null(), CStr::as_ptr))
            .collect()
    }

    /// Decode every slot back into a path. All slots must be set.
    pub fn to_paths(&self) -> Result<Vec<PathBuf>> {
        self.iter()
            .enumerate()
            .map(|(index, s)| {
                let s = s.ok_or(Error::MissingEntry { index })?;
                cstr_to_path(s)
            })
            .collect()
    }

    /// Release the strings and the table, returning how many strings were
    /// owned.
    pub fn release(self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

#[cfg(unix)]
pub(crate) fn os_to_cstring(s: &OsStr) -> Result<CString> {
    use std::os::unix::ffi::OsStrExt;
    CString::new(s.as_bytes()).map_err(|_| Error::InteriorNul(PathBuf::from(s)))
}

#[cfg(not(unix))]
pub(crate) fn os_to_cstring(s: &OsStr) -> Result<CString> {
    let utf8 = s.to_str().ok_or_else(|| Error::NonUnicodePath(PathBuf::from(s)))?;
    CString::new(utf8).map_err(|_| Error::InteriorNul(PathBuf::from(s)))
}

#[cfg(unix)]
pub(crate) fn cstr_to_path(s: &CStr) -> Result<PathBuf> {
    use std::os::unix::ffi::OsStrExt;
    Ok(PathBuf::from(OsStr::from_bytes(s.to_bytes())))
}

#[cfg(not(unix))]
pub(crate) fn cstr_to_path(s: &CStr) -> Result<PathBuf> {
    s.to_str()
        .map(PathBuf::from)
        .map_err(|_| Error::NonUnicodePath(PathBuf::from(s.to_string_lossy().into_owned())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> CString {
        CString::new(s).unwrap()
    }

    #[test]
    fn new_array_is_all_empty() {
        let arr = NativeStringArray::new(3);
        assert_eq!(arr.len(), 3);
        assert!(arr.iter().all(|s| s.is_none()));
        assert!(arr.as_ptrs().iter().all(|p| p.is_null()));
    }

    #[test]
    fn zero_size_is_empty() {
        let arr = NativeStringArray::new(0);
        assert!(arr.is_empty());
        assert_eq!(arr.release(), 0);
    }

    #[test]
    fn set_then_get_returns_value() {
        let mut arr = NativeStringArray::new(4);
        for i in 0..4 {
            assert!(arr.set(i, c(&format!("file-{i}"))).unwrap().is_none());
        }
        for i in 0..4 {
            assert_eq!(arr.get(i).unwrap().to_str().unwrap(), format!("file-{i}"));
        }
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut arr = NativeStringArray::new(1);
        arr.set(0, c("old")).unwrap();
        let previous = arr.set(0, c("new")).unwrap();
        assert_eq!(previous, Some(c("old")));
        assert_eq!(arr.get(0), Some(c("new").as_c_str()));
    }

    #[test]
    fn out_of_bounds_set_is_an_error() {
        let mut arr = NativeStringArray::new(2);
        let err = arr.set(2, c("x")).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfBounds { index: 2, len: 2 }));
        assert!(arr.get(2).is_none());
    }

    #[test]
    fn release_counts_owned_strings() {
        let mut arr = NativeStringArray::new(5);
        arr.set(0, c("a")).unwrap();
        arr.set(3, c("b")).unwrap();
        assert_eq!(arr.release(), 2);

        let full = NativeStringArray::from_strings(["a", "b", "c"]).unwrap();
        assert_eq!(full.release(), 3);
    }

    #[test]
    fn round_trips_through_paths() {
        let arr = NativeStringArray::from_strings(["/tmp/a b", "rel/c"]).unwrap();
        assert_eq!(
            arr.to_paths().unwrap(),
            vec![PathBuf::from("/tmp/a b"), PathBuf::from("rel/c")]
        );
    }

    #[test]
    fn unset_slot_blocks_path_conversion() {
        let mut arr = NativeStringArray::new(2);
        arr.set(0, c("a")).unwrap();
        let err = arr.to_paths().unwrap_err();
        assert!(matches!(err, Error::MissingEntry { index: 1 }));
    }

    #[test]
    fn interior_nul_is_rejected() {
        let err = NativeStringArray::from_strings(["ok", "b\0ad"]).unwrap_err();
        assert!(matches!(err, Error::InteriorNul(_)));
    }

    #[test]
    fn pointer_view_matches_slots() {
        let mut arr = NativeStringArray::new(2);
        arr.set(1, c("z")).unwrap();
        let ptrs = arr.as_ptrs();
        assert!(ptrs[0].is_null());
        let s = unsafe { CStr::from_ptr(ptrs[1]) };
        assert_eq!(s.to_str().unwrap(), "z");
    }
}
