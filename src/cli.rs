use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::Parser;

use recycle_lib::config::{DEFAULT_PROGRESS_TITLE, MAX_PATH, MAX_WIDE_PATH};
use recycle_lib::RecycleOptions;

#[derive(Parser)]
#[command(
    name = "recycle",
    about = "Move files to the Windows Recycle Bin instead of deleting them",
    version
)]
pub struct Cli {
    /// Files or directories to recycle
    #[arg(required_unless_present = "check")]
    pub paths: Vec<PathBuf>,

    /// Skip the shell's confirmation prompt
    #[arg(long)]
    pub confirm: bool,

    /// Only report whether the Recycle Bin is available
    #[arg(long)]
    pub check: bool,

    /// Longest resolved path accepted, in UTF-16 units including the terminator
    #[arg(
        long,
        default_value_t = MAX_PATH,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_WIDE_PATH as u64)
    )]
    pub max_path: usize,

    /// Title of the shell's progress dialog
    #[arg(long, default_value = DEFAULT_PROGRESS_TITLE)]
    pub title: String,

    /// Log every step (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn options(&self) -> RecycleOptions {
        RecycleOptions::default()
            .with_max_path_len(self.max_path)
            .with_progress_title(self.title.clone())
    }
}
