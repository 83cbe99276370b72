use crate::config::GeneratorConfig;
use crate::core::generator::LineGenerator;
use crate::core::writer::gen_lines_to_file;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub path: PathBuf,
    pub rows_written: u64,
    pub elapsed: Duration,
}

/// Drives one run: open the destination, write every row, flush.
pub struct GenerationEngine {
    config: GeneratorConfig,
    show_progress: bool,
    monitor_enabled: bool,
}

impl GenerationEngine {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            show_progress: false,
            monitor_enabled: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn with_monitoring(mut self, monitor_enabled: bool) -> Self {
        self.monitor_enabled = monitor_enabled;
        self
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let progress = ProgressBar::new(self.config.rows);
        if let Ok(style) = ProgressStyle::with_template(
            "{bar:40.cyan/blue} {human_pos}/{human_len} rows [{elapsed_precise}<{eta_precise}]",
        ) {
            progress.set_style(style);
        }
        progress
    }

    pub fn run(&self) -> Result<RunSummary> {
        let GeneratorConfig { path, rows, seed } = &self.config;
        let start = Instant::now();
        let mut monitor = SystemMonitor::new(self.monitor_enabled);

        tracing::info!("📝 Writing {} rows to {}", rows, path.display());
        if let Some(seed) = seed {
            tracing::debug!("Using seed {}", seed);
        }
        monitor.log_stats("Before generation");

        let mut generator = LineGenerator::new(*seed);
        let progress = self.progress_bar();
        let rows_written = gen_lines_to_file(path, *rows, &mut generator, &progress)?;
        progress.finish_and_clear();

        monitor.log_stats("After generation");
        monitor.log_final_stats(rows_written);

        Ok(RunSummary {
            path: path.clone(),
            rows_written,
            elapsed: start.elapsed(),
        })
    }
}
