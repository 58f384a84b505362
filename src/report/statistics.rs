use std::cmp::Ordering;

use serde::Serialize;

use crate::scoring::ReportRow;

/// Cross-speaker statistics for every table column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeakerSummary {
    pub mean: SummaryValues,
    /// Sample standard deviation (n - 1 divisor).
    #[serde(rename = "sd")]
    pub std_dev: SummaryValues,
    pub median: SummaryValues,
}

impl SpeakerSummary {
    pub fn from_rows(rows: &[ReportRow]) -> Self {
        Self {
            mean: SummaryValues::collect(rows, mean),
            std_dev: SummaryValues::collect(rows, sample_std_dev),
            median: SummaryValues::collect(rows, median),
        }
    }

    /// Labelled rows in the order they appear under the Sum line.
    pub fn labelled(&self) -> [(&'static str, &SummaryValues); 3] {
        [
            ("Mean", &self.mean),
            ("S.D.", &self.std_dev),
            ("Median", &self.median),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SummaryValues {
    pub sentences: f64,
    pub words: f64,
    pub correct: f64,
    pub substitutions: f64,
    pub deletions: f64,
    pub insertions: f64,
    pub errors: f64,
    pub sentence_errors: f64,
}

impl SummaryValues {
    fn collect(rows: &[ReportRow], stat: fn(&[f64]) -> f64) -> Self {
        let column = |pick: fn(&ReportRow) -> f64| -> f64 {
            let values: Vec<f64> = rows.iter().map(pick).collect();
            stat(&values)
        };
        Self {
            sentences: column(|row| row.sentence_count as f64),
            words: column(|row| row.word_count as f64),
            correct: column(|row| row.correct),
            substitutions: column(|row| row.substitutions),
            deletions: column(|row| row.deletions),
            insertions: column(|row| row.insertions),
            errors: column(|row| row.errors),
            sentence_errors: column(|row| row.sentence_errors),
        }
    }

    /// All eight columns in table order.
    pub fn columns(&self) -> [f64; 8] {
        [
            self.sentences,
            self.words,
            self.correct,
            self.substitutions,
            self.deletions,
            self.insertions,
            self.errors,
            self.sentence_errors,
        ]
    }
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Standard deviation with Bessel's correction; 0 for fewer than two values.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    let sum_sq: f64 = values.iter().map(|value| (value - avg).powi(2)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::ErrorStats;
    use crate::scoring::Tally;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn sample_std_dev_uses_n_minus_one() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        // population sd is exactly 2.0; sample sd is sqrt(32 / 7)
        assert!(close(sample_std_dev(&values), (32.0f64 / 7.0).sqrt()));
        assert_eq!(sample_std_dev(&[3.0]), 0.0);
        assert_eq!(sample_std_dev(&[]), 0.0);
    }

    #[test]
    fn median_averages_middle_pair() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert!(close(mean(&[1.0, 2.0, 6.0]), 3.0));
    }

    #[test]
    fn summary_runs_per_column() {
        let tally = |ref_num: usize, sub_num: usize, sentences: usize| Tally {
            stats: ErrorStats {
                ref_num,
                sub_num,
                distance: sub_num,
                ..ErrorStats::ZERO
            },
            sentences,
            sentence_errors: sentences,
            correct: ref_num - sub_num,
        };
        let rows = [
            ReportRow::from_tally(&tally(10, 1, 1), true),
            ReportRow::from_tally(&tally(20, 4, 3), true),
        ];
        let summary = SpeakerSummary::from_rows(&rows);
        assert!(close(summary.mean.words, 15.0));
        assert!(close(summary.mean.substitutions, 15.0));
        assert!(close(summary.median.sentences, 2.0));
        assert!(close(summary.std_dev.sentence_errors, 0.0));
        assert!(close(summary.std_dev.words, 50.0f64.sqrt()));
        assert_eq!(summary.labelled()[1].0, "S.D.");
    }
}
