//! Console reporter with colored output

use crate::EmotionalScore;
use colored::Colorize;

const BAR_WIDTH: usize = 20;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Print a single result
    pub fn report(&self, result: &EmotionalScore) {
        println!("{}", self.format(result));
    }

    /// Print several results, one per line
    pub fn report_many(&self, results: &[EmotionalScore]) {
        for result in results {
            self.report(result);
        }
    }

    /// One line: score bar, score, then the analyzed text
    pub fn format(&self, result: &EmotionalScore) -> String {
        format!(
            "{} {}",
            self.create_score_bar(result.emotional_score),
            result.input_message
        )
    }

    fn create_score_bar(&self, score: f64) -> String {
        let filled = ((score.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
        let empty = BAR_WIDTH - filled;

        let bar = format!("[{}{}] {:.3}", "█".repeat(filled), "░".repeat(empty), score);

        if self.use_colors {
            if score >= 0.75 {
                bar.green().to_string()
            } else if score > 0.25 {
                bar.yellow().to_string()
            } else {
                bar.red().to_string()
            }
        } else {
            bar
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
