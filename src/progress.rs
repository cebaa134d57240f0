//! Progress bar display for generation runs

use indicatif::{ProgressBar, ProgressStyle};

/// Progress over the top-level elements of one run
///
/// Draws to stderr and stays invisible when stderr is not a terminal.
pub struct ProgressDisplay {
    element_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total element count
    pub fn new(total_elements: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let element_pb = ProgressBar::new(total_elements);
        element_pb.set_style(style);

        Self { element_pb }
    }

    /// A display that never draws
    pub fn hidden() -> Self {
        Self {
            element_pb: ProgressBar::hidden(),
        }
    }

    /// Show the element currently being processed
    pub fn update_element(&self, element: &str) {
        self.element_pb.set_message(element.to_string());
    }

    /// Increment element progress
    pub fn inc_element(&self) {
        self.element_pb.inc(1);
    }

    pub fn position(&self) -> u64 {
        self.element_pb.position()
    }

    pub fn finish(&self) {
        self.element_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.element_pb.abandon();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_display_counts() {
        let progress = ProgressDisplay::hidden();
        progress.update_element("feature@org.bar");
        progress.inc_element();
        progress.inc_element();
        assert_eq!(progress.position(), 2);
    }
}
