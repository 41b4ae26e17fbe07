//! Per-file frame progress with a batch bar for large file sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>24} [{bar:30.cyan/blue}] {pos}/{len} frames {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Images: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Progress display for a batch of rendered images
///
/// Each image gets a frame bar while it renders. Once more than
/// [`MAX_INDIVIDUAL_PROGRESS_BARS`] images are queued an overall batch bar is shown
/// as well, and finished frame bars are removed instead of left on screen.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    active: Vec<(usize, ProgressBar)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            active: Vec::new(),
        }
    }

    /// Prepare for `file_count` images
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Show a bar for image `index` rendering `frames` frames
    pub fn start_file(&mut self, index: usize, path: &Path, frames: usize) {
        let bar = ProgressBar::new(frames.max(1) as u64);
        bar.set_style(FRAME_STYLE.clone());
        bar.set_prefix(
            path.file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        );
        self.active.push((index, self.multi_progress.add(bar)));
    }

    /// Report that `frame` frames of image `index` are done
    pub fn update_frame(&self, index: usize, frame: usize) {
        if let Some(bar) = self.bar(index) {
            bar.set_position(frame as u64);
        }
    }

    /// Mark image `index` as written
    pub fn complete_file(&mut self, index: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(position) = self.active.iter().position(|(i, _)| *i == index) {
            let (_, bar) = self.active.remove(position);
            if self.batch_bar.is_some() {
                bar.finish_and_clear();
                self.multi_progress.remove(&bar);
            } else {
                bar.finish_with_message(format!("✓ {:.1}s", elapsed.as_secs_f64()));
            }
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All images processed");
        }
        let _ = self.multi_progress.clear();
    }

    fn bar(&self, index: usize) -> Option<&ProgressBar> {
        self.active
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, bar)| bar)
    }
}
