use std::path::PathBuf;

/// Everything that can go wrong between a host-side path list and the shell.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("index {index} is out of bounds for an array of {len} entries")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("array entry {index} was never set")]
    MissingEntry { index: usize },

    #[error("path contains an interior NUL: {}", .0.display())]
    InteriorNul(PathBuf),

    #[error("path is not valid Unicode: {}", .0.display())]
    NonUnicodePath(PathBuf),

    #[error("resolved path needs {len} units but the limit is {max}: {}", .path.display())]
    PathTooLong { path: PathBuf, len: usize, max: usize },

    #[error("cannot resolve {}: {source}", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("shell file operation failed with status {status:#x}")]
    Shell { status: i32 },

    #[error("shell file operation was aborted")]
    Aborted,

    #[error("the Recycle Bin is not available on this platform")]
    Unsupported,
}

pub type Result<T> = std::result::Result<T, Error>;
