//! Text and JSON renderings of a [`ScoringSession`].

use std::fmt::Display;

use crate::scoring::ScoringSession;

pub mod dump;
pub mod export;
pub mod statistics;
pub mod table;

#[cfg(test)]
mod tests;

pub use dump::{alignment_lines, draw_alignment, render_report};
pub use export::{SessionReport, REPORT_SCHEMA_VERSION};
pub use statistics::{SpeakerSummary, SummaryValues};
pub use table::draw_table;

impl<T> ScoringSession<T> {
    /// See [`table::draw_table`].
    pub fn draw_table(&self, as_rate: bool) -> String {
        table::draw_table(self, as_rate)
    }

    pub fn to_report(&self, generated_at: impl Into<String>) -> SessionReport {
        SessionReport::from_session(self, generated_at)
    }
}

impl<T: Display> ScoringSession<T> {
    pub fn draw_alignment(&self) -> String {
        dump::draw_alignment(self)
    }

    /// Both summary tables followed by the alignment dump.
    pub fn render_report(&self) -> String {
        dump::render_report(self)
    }
}
