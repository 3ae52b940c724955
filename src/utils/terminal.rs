//! Terminal output utilities

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{}: {}", style("error").red().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", style("=>").green().bold(), message);
}

/// Print a pipeline step header
pub fn print_step(message: &str) {
    println!("{} {}", style("=>").cyan().bold(), message);
}

/// Print a verbose-only detail line
pub fn print_detail(message: &str) {
    println!("   {}", style(message).dim());
}

/// Create a spinner for a long-running step
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
