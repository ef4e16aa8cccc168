/// Buffer size, in UTF-16 units including the terminator, that Win32 uses
/// for a classic path.
pub const MAX_PATH: usize = 260;

/// Longest path the wide Win32 API accepts, in UTF-16 units.
pub const MAX_WIDE_PATH: usize = 32_767;

/// Title shown on the shell's progress dialog.
pub const DEFAULT_PROGRESS_TITLE: &str = "Recycling files...";

/// Tunables for a recycle run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecycleOptions {
    /// Largest resolved path accepted, in UTF-16 units including the
    /// terminator. Longer paths are rejected rather than truncated.
    pub max_path_len: usize,
    pub progress_title: String,
}

impl Default for RecycleOptions {
    fn default() -> Self {
        Self {
            max_path_len: MAX_PATH,
            progress_title: DEFAULT_PROGRESS_TITLE.to_string(),
        }
    }
}

impl RecycleOptions {
    pub fn with_max_path_len(mut self, max_path_len: usize) -> Self {
        self.max_path_len = max_path_len;
        self
    }

    pub fn with_progress_title(mut self, title: impl Into<String>) -> Self {
        self.progress_title = title.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_win32() {
        let opts = RecycleOptions::default();
        assert_eq!(opts.max_path_len, 260);
        assert_eq!(opts.progress_title, "Recycling files...");
    }

    #[test]
    fn builders_override_fields() {
        let opts = RecycleOptions::default()
            .with_max_path_len(32_767)
            .with_progress_title("Tidying up");
        assert_eq!(opts.max_path_len, 32_767);
        assert_eq!(opts.progress_title, "Tidying up");
    }
}
