use std::path::Path;
use walkdir::WalkDir;

/// Total size of a file, or of every file under a directory.
/// Unreadable entries count as zero.
pub fn entry_size(path: &Path) -> u64 {
    if path.is_dir() {
        WalkDir::new(path)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| e.metadata().ok())
            .map(|m| m.len())
            .sum()
    } else {
        path.symlink_metadata().map(|m| m.len()).unwrap_or(0)
    }
}

const SIZE_UNITS: [&str; 3] = ["KB", "MB", "GB"];

/// Binary-prefixed size for display, topping out at GB.
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = None;
    for name in SIZE_UNITS {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = Some(name);
    }
    match unit {
        Some(name) => format!("{value:.2} {name}"),
        None => format!("{bytes} B"),
    }
}

/// Shorten a path for display by replacing the home directory with `~`.
pub fn display_path(path: &Path) -> String {
    match dirs::home_dir() {
        Some(home) => match path.strip_prefix(&home) {
            Ok(relative) if relative.as_os_str().is_empty() => "~".to_string(),
            Ok(relative) => format!("~{}{}", std::path::MAIN_SEPARATOR, relative.display()),
            Err(_) => path.display().to_string(),
        },
        None => path.display().to_string(),
    }
}
