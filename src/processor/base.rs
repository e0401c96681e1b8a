use crate::types::BatchStats;
use std::time::Instant;
use tracing::info;

/// Wall-clock timer for a batch run
pub struct StandardProgressTracker {
    start_time: Option<Instant>,
}

impl Default for StandardProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardProgressTracker {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn elapsed_seconds(&self) -> f64 {
        match self.start_time {
            Some(start) => start.elapsed().as_secs_f64(),
            None => 0.0,
        }
    }
}

/// Progress reporting utilities
pub struct ProgressReporter;

impl ProgressReporter {
    /// Human-readable elapsed time
    pub fn format_elapsed_time(elapsed_secs: f64) -> String {
        if elapsed_secs < 60.0 {
            format!("{:.1}s", elapsed_secs)
        } else if elapsed_secs < 3600.0 {
            let minutes = (elapsed_secs / 60.0).floor();
            let seconds = elapsed_secs % 60.0;
            format!("{}m {:.0}s ({:.1}s)", minutes, seconds, elapsed_secs)
        } else {
            let hours = (elapsed_secs / 3600.0).floor();
            let remaining = elapsed_secs % 3600.0;
            let minutes = (remaining / 60.0).floor();
            let seconds = remaining % 60.0;
            format!(
                "{}h {}m {:.0}s ({:.1}s)",
                hours, minutes, seconds, elapsed_secs
            )
        }
    }

    pub fn report_completion(stats: &BatchStats, elapsed: f64) {
        let rate = if elapsed > 0.0 {
            stats.processed as f64 / elapsed
        } else {
            0.0
        };
        info!("=== Extraction Completed ===");
        info!("  Transactions processed: {}", stats.processed);
        info!("  Decoded: {}", stats.decoded);
        info!("  Undecodable: {}", stats.undecodable);
        info!("  No OP_RETURN data: {}", stats.absent);
        info!("  Time elapsed: {}", Self::format_elapsed_time(elapsed));
        info!("  Average rate: {:.1} tx/sec", rate);
    }
}
