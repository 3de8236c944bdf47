//! Progress bars for renderer runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::render::RenderObserver;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template =
        format!("{{prefix:>10}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Shows one progress bar per renderer run
///
/// Each stage gets its own bar that stays on screen with a "finished" message once
/// the artifact is written.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    current: Option<ProgressBar>,
    finished: Vec<String>,
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
            current: None,
            finished: Vec::new(),
        }
    }

    /// Open a bar for the renderer called `name`
    pub fn start_stage(&mut self, name: &str) {
        let bar = ProgressBar::new(0);
        bar.set_style(STAGE_STYLE.clone());
        bar.set_prefix(name.to_string());
        self.current = Some(self.multi_progress.add(bar));
    }

    /// Close the current bar with a "finished" message
    pub fn finish_stage(&mut self, name: &str) {
        if let Some(bar) = self.current.take() {
            bar.finish_with_message(format!("{name} finished"));
        }
        self.finished.push(name.to_string());
    }

    /// Names of the stages finished so far, in order
    pub fn finished_stages(&self) -> &[String] {
        &self.finished
    }

    /// Drop any bar left open by a stage that did not finish
    pub fn finish(&mut self) {
        if let Some(bar) = self.current.take() {
            bar.abandon();
        }
    }
}

impl RenderObserver for ProgressManager {
    fn begin(&mut self, total_tiles: u64) {
        if let Some(ref bar) = self.current {
            bar.set_length(total_tiles);
            bar.set_position(0);
        }
    }

    fn tile_done(&mut self) {
        if let Some(ref bar) = self.current {
            bar.inc(1);
        }
    }
}
