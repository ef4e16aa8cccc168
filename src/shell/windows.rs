use tracing::debug;
use windows_sys::Win32::UI::Shell::{
    SHFileOperationW, FOF_ALLOWUNDO, FOF_NOCONFIRMATION, FO_DELETE, SHFILEOPSTRUCTW,
};

use super::{FileOpFlags, FileOpRequest, FileOpResponse, FileOperation};

const _: () = assert!(FOF_ALLOWUNDO as u32 == FileOpFlags::ALLOW_UNDO.0 as u32);
const _: () = assert!(FOF_NOCONFIRMATION as u32 == FileOpFlags::NO_CONFIRMATION.0 as u32);
const _: () = assert!(FO_DELETE as u32 == 0x0003);

/// `SHFileOperationW` with no owner window.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellFileOperation;

impl FileOperation for ShellFileOperation {
    fn perform(&self, request: &FileOpRequest<'_>) -> FileOpResponse {
        debug_assert!(request.from.ends_with(&[0]));
        debug_assert!(request.to.ends_with(&[0]));
        debug_assert!(request.progress_title.ends_with(&[0]));

        let mut op: SHFILEOPSTRUCTW = unsafe { std::mem::zeroed() };
        op.wFunc = request.kind.code() as _;
        op.pFrom = request.from.as_ptr();
        op.pTo = request.to.as_ptr();
        op.fFlags = request.flags.bits() as _;
        op.lpszProgressTitle = request.progress_title.as_ptr();

        // Blocks until the shell has finished or the user dismissed it.
        let status = unsafe { SHFileOperationW(&mut op) };
        let any_aborted = op.fAnyOperationsAborted != 0;

        debug!(
            kind = ?request.kind,
            status,
            any_aborted,
            "SHFileOperationW returned"
        );

        FileOpResponse {
            status,
            any_aborted,
        }
    }
}
