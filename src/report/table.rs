use std::iter;

use crate::alignment::ErrorStats;
use crate::report::statistics::SpeakerSummary;
use crate::scoring::{ReportRow, ScoringSession};

const HEADERS: [&str; 8] = ["# Snt", "# Wrd", "Corr", "Sub", "Del", "Ins", "Err", "S.Err"];
const SPEAKER_HEADER: &str = "SPKR";
const SUM_LABEL: &str = "Sum";
/// Widest label in the name column when no speaker id is longer.
const NAME_FLOOR: &str = "Sum/Avg";

/// Column widths shared by every line of one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TableLayout {
    pub name_width: usize,
    pub value_width: usize,
    pub width: usize,
}

impl TableLayout {
    pub(crate) fn new(system_name: &str, speaker_ids: &[&str], total: &ErrorStats) -> Self {
        let header_width = HEADERS.iter().map(|h| h.len()).max().unwrap_or(0);
        let name_width = speaker_ids
            .iter()
            .map(|id| id.chars().count())
            .chain(iter::once(NAME_FLOOR.len()))
            .max()
            .unwrap_or(NAME_FLOOR.len());
        let magnitude = total.distance.max(total.ref_num).max(1);
        let digits = magnitude.ilog10() as usize + 2;
        let value_width = digits.max(header_width) + 2;
        let width =
            (system_name.chars().count() + 2).max(5 + name_width + HEADERS.len() * value_width);
        Self {
            name_width,
            value_width,
            width,
        }
    }
}

/// Renders the per-speaker summary table, either as percentages or as counts.
pub fn draw_table<T>(session: &ScoringSession<T>, as_rate: bool) -> String {
    let rows = session.speaker_rows(as_rate);
    let ids: Vec<&str> = rows.iter().map(|(id, _)| *id).collect();
    let layout = TableLayout::new(session.system_name(), &ids, &session.total().stats);
    let TableLayout {
        name_width: nw,
        value_width: vw,
        width,
    } = layout;

    let mut out = String::new();
    out.push(',');
    out.push_str(&"-".repeat(width));
    out.push_str(".\n");
    out.push('|');
    out.push_str(&center(session.system_name(), width));
    out.push_str("|\n");
    out.push('|');
    out.push_str(&"-".repeat(width));
    out.push_str("|\n");

    out.push_str("| ");
    out.push_str(&ljust(SPEAKER_HEADER, nw));
    out.push_str("| ");
    out.push_str(&center(HEADERS[0], vw));
    out.push_str(&center(HEADERS[1], vw));
    out.push('|');
    for header in &HEADERS[2..] {
        out.push_str(&rjust(header, vw));
    }
    out.push_str(" |\n");

    let separator = format!(
        "|-{}+-{}+-{}|\n",
        "-".repeat(nw),
        "-".repeat(2 * vw),
        "-".repeat(6 * vw)
    );
    let double_rule = format!("|{}|\n", "=".repeat(width));

    out.push_str(&separator);
    for (pos, (id, row)) in rows.iter().enumerate() {
        out.push_str("| ");
        out.push_str(&ljust(id, nw));
        out.push('|');
        out.push_str(&rjust(&row.sentence_count.to_string(), vw));
        out.push_str(&rjust(&row.word_count.to_string(), vw));
        out.push_str(" |");
        push_error_cells(&mut out, row, vw);
        out.push_str(" |\n");
        if pos + 1 < rows.len() {
            out.push_str(&separator);
        }
    }
    out.push_str(&double_rule);

    let sum = session.global_view(as_rate);
    out.push_str("| ");
    out.push_str(&ljust(SUM_LABEL, nw));
    out.push('|');
    out.push_str(&rjust(&sum.sentence_count.to_string(), vw));
    out.push(' ');
    out.push_str(&center(&sum.word_count.to_string(), vw));
    out.push('|');
    push_error_cells(&mut out, &sum, vw);
    out.push_str(" |\n");
    out.push_str(&double_rule);

    let plain_rows: Vec<ReportRow> = rows.iter().map(|(_, row)| *row).collect();
    let summary = SpeakerSummary::from_rows(&plain_rows);
    for (label, values) in summary.labelled() {
        let columns = values.columns();
        out.push_str("| ");
        out.push_str(&ljust(label, nw));
        out.push('|');
        out.push_str(&rjust(&format!("{:.1}", columns[0]), vw));
        out.push_str(&rjust(&format!("{:.1}", columns[1]), vw));
        out.push_str(" |");
        for value in &columns[2..] {
            out.push_str(&rjust(&format!("{value:.1}"), vw));
        }
        out.push_str(" |\n");
    }

    out.push('`');
    out.push_str(&"-".repeat(width));
    out.push_str("'\n");
    out
}

fn push_error_cells(out: &mut String, row: &ReportRow, width: usize) {
    for value in row.error_columns() {
        out.push_str(&rjust(&format_cell(value, row.as_rate), width));
    }
}

fn format_cell(value: f64, as_rate: bool) -> String {
    if as_rate {
        format!("{value:.1}")
    } else {
        format!("{value:.0}")
    }
}

pub(crate) fn ljust(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

pub(crate) fn rjust(text: &str, width: usize) -> String {
    format!("{text:>width$}")
}

/// Centers `text`. An odd margin puts the spare column on the left only
/// when `width` is odd as well.
pub(crate) fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    let right = margin - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
