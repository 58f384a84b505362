//! Machine-readable snapshot of a scored session.

use serde::Serialize;

use crate::alignment::ErrorStats;
use crate::report::statistics::SpeakerSummary;
use crate::scoring::{ReportRow, ScoringSession, Tally};

pub const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub schema_version: u32,
    pub meta: ReportMeta,
    pub speakers: Vec<SpeakerReport>,
    pub sum: SpeakerTotals,
    pub summary: ReportSummary,
    pub utterances: Vec<UtteranceReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMeta {
    pub generated_at: String,
    pub system_name: String,
    pub utterance_count: usize,
    pub speaker_count: usize,
    pub word_error_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpeakerReport {
    pub id: String,
    #[serde(flatten)]
    pub totals: SpeakerTotals,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SpeakerTotals {
    pub counts: Tally,
    pub rates: ReportRow,
}

impl SpeakerTotals {
    fn from_tally(tally: &Tally) -> Self {
        Self {
            counts: *tally,
            rates: ReportRow::from_tally(tally, true),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReportSummary {
    pub rates: SpeakerSummary,
    pub counts: SpeakerSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct UtteranceReport {
    pub id: String,
    pub speaker: String,
    pub stats: ErrorStats,
    pub correct: usize,
}

impl SessionReport {
    /// `generated_at` is taken as given so callers control the clock.
    pub fn from_session<T>(session: &ScoringSession<T>, generated_at: impl Into<String>) -> Self {
        let speakers: Vec<SpeakerReport> = session
            .speaker_ids()
            .into_iter()
            .filter_map(|id| {
                session.speaker_tally(id).map(|tally| SpeakerReport {
                    id: id.to_string(),
                    totals: SpeakerTotals::from_tally(tally),
                })
            })
            .collect();

        let summary_of = |as_rate: bool| {
            let rows: Vec<ReportRow> = session
                .speaker_rows(as_rate)
                .into_iter()
                .map(|(_, row)| row)
                .collect();
            SpeakerSummary::from_rows(&rows)
        };

        let utterances: Vec<UtteranceReport> = session
            .speaker_ids()
            .into_iter()
            .flat_map(|speaker| session.utterance_ids_for_speaker(speaker).unwrap_or(&[]))
            .filter_map(|id| session.utterance_score(id))
            .map(|score| UtteranceReport {
                id: score.id.clone(),
                speaker: score.speaker_id.clone(),
                stats: score.stats,
                correct: score.correct,
            })
            .collect();

        Self {
            schema_version: REPORT_SCHEMA_VERSION,
            meta: ReportMeta {
                generated_at: generated_at.into(),
                system_name: session.system_name().to_string(),
                utterance_count: session.utterance_count(),
                speaker_count: speakers.len(),
                word_error_rate: session.error_rate(),
            },
            sum: SpeakerTotals::from_tally(session.total()),
            summary: ReportSummary {
                rates: summary_of(true),
                counts: summary_of(false),
            },
            speakers,
            utterances,
        }
    }
}
