#[cfg(windows)]
mod windows;

#[cfg(windows)]
pub use self::windows::ShellFileOperation;

use std::ops::BitOr;

/// `wFunc` of `SHFILEOPSTRUCTW`. Recycling only ever deletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Delete,
}

impl OperationKind {
    pub fn code(self) -> u32 {
        match self {
            Self::Delete => 0x0003,
        }
    }
}

/// `fFlags` bits of `SHFILEOPSTRUCTW`. Only the ones this crate sets are named.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileOpFlags(u16);

impl FileOpFlags {
    /// `FOF_NOCONFIRMATION`: answer "yes to all" to any prompt.
    pub const NO_CONFIRMATION: Self = Self(0x0010);
    /// `FOF_ALLOWUNDO`: send deletions to the Recycle Bin.
    pub const ALLOW_UNDO: Self = Self(0x0040);

    pub fn bits(self) -> u16 {
        self.0
    }

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Flags for a recycle run: always undoable, silent when `confirmed`.
    pub fn for_recycle(confirmed: bool) -> Self {
        if confirmed {
            Self::ALLOW_UNDO | Self::NO_CONFIRMATION
        } else {
            Self::ALLOW_UNDO
        }
    }
}

impl BitOr for FileOpFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// One call to the batch file-operation primitive.
///
/// `from` and `to` are double-null-terminated UTF-16 lists and
/// `progress_title` is a NUL-terminated UTF-16 string.
#[derive(Debug, Clone, Copy)]
pub struct FileOpRequest<'a> {
    pub kind: OperationKind,
    pub from: &'a [u16],
    pub to: &'a [u16],
    pub flags: FileOpFlags,
    pub progress_title: &'a [u16],
}

/// What the primitive reported back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileOpResponse {
    /// Return value of the call; zero means success.
    pub status: i32,
    /// `fAnyOperationsAborted` after the call.
    pub any_aborted: bool,
}

impl FileOpResponse {
    pub fn succeeded(&self) -> bool {
        self.status == 0 && !self.any_aborted
    }
}

/// The platform batch file-operation primitive.
///
/// Calls block until the shell finishes or the user dismisses the dialog.
pub trait FileOperation {
    fn perform(&self, request: &FileOpRequest<'_>) -> FileOpResponse;
}

impl<T: FileOperation + ?Sized> FileOperation for &T {
    fn perform(&self, request: &FileOpRequest<'_>) -> FileOpResponse {
        (**self).perform(request)
    }
}

/// Tells whether files can be moved to the Recycle Bin on this platform.
pub fn is_available() -> bool {
    cfg!(windows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recycle_flags_follow_confirmation() {
        let quiet = FileOpFlags::for_recycle(true);
        assert!(quiet.contains(FileOpFlags::ALLOW_UNDO));
        assert!(quiet.contains(FileOpFlags::NO_CONFIRMATION));
        assert_eq!(quiet.bits(), 0x0050);

        let prompting = FileOpFlags::for_recycle(false);
        assert!(prompting.contains(FileOpFlags::ALLOW_UNDO));
        assert!(!prompting.contains(FileOpFlags::NO_CONFIRMATION));
        assert_eq!(prompting.bits(), 0x0040);
    }

    #[test]
    fn success_needs_zero_status_and_no_abort() {
        let ok = FileOpResponse {
            status: 0,
            any_aborted: false,
        };
        assert!(ok.succeeded());

        let aborted = FileOpResponse {
            status: 0,
            any_aborted: true,
        };
        assert!(!aborted.succeeded());

        let failed = FileOpResponse {
            status: 0x7c,
            any_aborted: false,
        };
        assert!(!failed.succeeded());
    }

    #[test]
    fn delete_is_win32_fo_delete() {
        assert_eq!(OperationKind::Delete.code(), 3);
    }

    #[test]
    fn availability_tracks_target() {
        assert_eq!(is_available(), cfg!(windows));
    }
}
