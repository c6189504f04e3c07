//! Progress reporting for seeding sessions.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Width of the rendered progress bar, in cells.
pub const BAR_WIDTH: usize = 40;

/// Progress after one inserted batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressUpdate {
    /// 1-based number of the batch just inserted
    pub batch: usize,
    /// Total number of batches in the session
    pub total_batches: usize,
    /// Rows persisted so far
    pub inserted: u64,
    /// Requested record count
    pub target: usize,
}

impl ProgressUpdate {
    /// Completed share of the batches, in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        if self.total_batches == 0 {
            return 1.0;
        }
        (self.batch as f64 / self.total_batches as f64).clamp(0.0, 1.0)
    }

    /// Whole percent done, rounded down.
    pub fn percent(&self) -> u32 {
        (self.fraction() * 100.0) as u32
    }
}

/// Receiver of session progress.
pub trait ProgressSink {
    /// A session phase started.
    fn phase(&mut self, _message: &str) {}

    /// A batch was inserted.
    fn batch_done(&mut self, update: &ProgressUpdate);

    /// All batches were inserted.
    fn finish(&mut self) {}
}

/// Discards all progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn batch_done(&mut self, _update: &ProgressUpdate) {}
}

/// Terminal progress bar over the session's batches.
///
/// The bar is created on the first batch, labelled with the schema name;
/// its position and length count batches and the message carries the
/// inserted rows.
pub struct ConsoleProgress {
    label: String,
    target: ProgressDrawTarget,
    bar: Option<ProgressBar>,
}

impl ConsoleProgress {
    /// Draw on stderr, labelled with `label` (usually the schema name).
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_draw_target(label, ProgressDrawTarget::stderr())
    }

    pub fn with_draw_target(label: impl Into<String>, target: ProgressDrawTarget) -> Self {
        Self {
            label: label.into(),
            target,
            bar: None,
        }
    }

    /// The bar, once the first batch has been reported.
    pub fn bar(&self) -> Option<&ProgressBar> {
        self.bar.as_ref()
    }

    fn style() -> ProgressStyle {
        let template =
            format!("{{prefix}} [{{bar:{BAR_WIDTH}}}] {{percent}}% batch {{pos}}/{{len}} {{msg}}");
        ProgressStyle::with_template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█░")
    }

    fn start(&mut self, total_batches: usize) -> ProgressBar {
        let bar = ProgressBar::with_draw_target(
            Some(total_batches as u64),
            std::mem::replace(&mut self.target, ProgressDrawTarget::hidden()),
        );
        bar.set_style(Self::style());
        bar.set_prefix(self.label.clone());
        bar
    }
}

impl ProgressSink for ConsoleProgress {
    fn phase(&mut self, message: &str) {
        match &self.bar {
            Some(bar) => bar.println(format!("{message}...")),
            None => println!("{message}..."),
        }
    }

    fn batch_done(&mut self, update: &ProgressUpdate) {
        if self.bar.is_none() {
            self.bar = Some(self.start(update.total_batches));
        }
        if let Some(bar) = &self.bar {
            bar.set_position(update.batch as u64);
            bar.set_message(format!("({}/{})", update.inserted, update.target));
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = &self.bar {
            bar.finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(batch: usize, total_batches: usize, inserted: u64, target: usize) -> ProgressUpdate {
        ProgressUpdate {
            batch,
            total_batches,
            inserted,
            target,
        }
    }

    #[test]
    fn test_percent() {
        assert_eq!(update(1, 2, 50, 100).percent(), 50);
        assert_eq!(update(1, 3, 10, 25).percent(), 33);
        assert_eq!(update(3, 3, 25, 25).percent(), 100);
        assert_eq!(update(0, 0, 0, 0).fraction(), 1.0);
    }

    #[test]
    fn test_console_bar_follows_batches() {
        let mut progress = ConsoleProgress::with_draw_target("contacts", ProgressDrawTarget::hidden());
        assert!(progress.bar().is_none());

        progress.batch_done(&update(1, 3, 10, 25));
        let bar = progress.bar().unwrap();
        assert_eq!(bar.length(), Some(3));
        assert_eq!(bar.position(), 1);
        assert_eq!(bar.prefix(), "contacts");
        assert_eq!(bar.message(), "(10/25)");

        progress.batch_done(&update(3, 3, 25, 25));
        progress.finish();
        let bar = progress.bar().unwrap();
        assert_eq!(bar.position(), 3);
        assert!(bar.is_finished());
    }
}
