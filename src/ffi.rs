//! C ABI for callers that manage the string array themselves.
//!
//! Strings handed to [`set_array_string`] must come from `malloc` (a Go
//! `C.CString`, `strdup`, ...): [`free_char_array`] releases them with
//! `free`. Bounds are the caller's responsibility.

use std::ffi::CStr;
use std::os::raw::{c_char, c_int};
use std::path::PathBuf;

use tracing::warn;

use crate::config::RecycleOptions;
use crate::native_array::cstr_to_path;

/// Allocate a zeroed array of `size` string pointers.
#[no_mangle]
pub extern "C" fn make_char_array(size: c_int) -> *mut *mut c_char {
    let size = usize::try_from(size).unwrap_or(0);
    unsafe { libc::calloc(size, std::mem::size_of::<*mut c_char>()) as *mut *mut c_char }
}

/// Store `s` at index `n`, taking ownership of it.
///
/// # Safety
///
/// `array` must come from [`make_char_array`] and `n` must be below its size.
#[no_mangle]
pub unsafe extern "C" fn set_array_string(array: *mut *mut c_char, s: *mut c_char, n: c_int) {
    debug_assert!(!array.is_null());
    debug_assert!(n >= 0);
    *array.offset(n as isize) = s;
}

/// Free every element and then the array itself.
///
/// # Safety
///
/// `array` must come from [`make_char_array`] with the same `size`, every
/// non-null element must be `malloc`-owned, and the array must not be used
/// afterwards.
#[no_mangle]
pub unsafe extern "C" fn free_char_array(array: *mut *mut c_char, size: c_int) {
    if array.is_null() {
        return;
    }
    for i in 0..size.max(0) as isize {
        libc::free(*array.offset(i) as *mut libc::c_void);
    }
    libc::free(array as *mut libc::c_void);
}

/// Move `count` files to the Recycle Bin. Returns 1 on success, 0 otherwise.
///
/// # Safety
///
/// `filenames` must point to `count` valid NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn recycle_files(
    filenames: *const *const c_char,
    count: c_int,
    confirmed: c_int,
) -> c_int {
    let count = usize::try_from(count).unwrap_or(0);
    if count > 0 && filenames.is_null() {
        return 0;
    }

    let mut paths = Vec::with_capacity(count);
    for i in 0..count {
        let ptr = *filenames.add(i);
        if ptr.is_null() {
            warn!(index = i, "null entry in recycle list");
            return 0;
        }
        match cstr_to_path(CStr::from_ptr(ptr)) {
            Ok(path) => paths.push(path),
            Err(e) => {
                warn!(error = %e, "unusable entry in recycle list");
                return 0;
            }
        }
    }

    recycle_paths(&paths, confirmed != 0) as c_int
}

fn recycle_paths(paths: &[PathBuf], confirmed: bool) -> bool {
    match crate::recycle(paths, confirmed, &RecycleOptions::default()) {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "recycle_files failed");
            false
        }
    }
}
