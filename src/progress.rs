//! Progress display for gate stages

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while an external tool runs
pub fn stage_spinner(label: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} Running {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(label.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Finish a stage spinner with its closing status line
pub fn finish_stage(pb: &ProgressBar, label: &str, status: &str) {
    pb.finish_and_clear();
    println!("  {label}: {status}");
}
