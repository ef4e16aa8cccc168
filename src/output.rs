use colored::Colorize;

pub fn print_entry(path: &str, size: &str) {
    println!("  {}  {}", path.dimmed(), size.yellow());
}

pub fn print_missing(path: &str) {
    println!("  {} {}", "Missing".yellow().bold(), path.dimmed());
}

pub fn print_separator() {
    println!("  {}", "─".repeat(45).dimmed());
}

pub fn print_recycled(count: usize, total: &str) {
    let noun = if count == 1 { "item" } else { "items" };
    println!(
        "{} {}",
        "Recycled".green().bold(),
        format!("{count} {noun} ({total}).").green()
    );
}

pub fn print_failure(err: &str) {
    println!("{} {}", "Failed:".red().bold(), err.red());
    println!(
        "{}",
        "The shell does not report which items, if any, were moved.".dimmed()
    );
}

pub fn print_availability(available: bool) {
    if available {
        println!("{} {}", "Info:".cyan().bold(), "Recycle Bin is available.");
    } else {
        println!(
            "{} {}",
            "Warning:".red().bold(),
            "Recycle Bin is not available on this platform.".red()
        );
    }
}
