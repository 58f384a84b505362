use serde::Serialize;

use crate::alignment::{levenshtein_alignment, Alignment, ErrorStats};
use crate::types::Utterance;

/// Alignment and counts of a single utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtteranceScore<T> {
    pub id: String,
    pub speaker_id: String,
    pub stats: ErrorStats,
    pub correct: usize,
    pub alignment: Alignment<T>,
}

impl<T: PartialEq + Clone> UtteranceScore<T> {
    pub fn compute(utterance: Utterance<'_, T>, speaker_id: String) -> Self {
        let alignment = levenshtein_alignment(utterance.reference, utterance.hypothesis);
        let stats = alignment.stats();
        Self {
            id: utterance.id.to_string(),
            speaker_id,
            correct: alignment.correct(),
            stats,
            alignment,
        }
    }
}

/// Running totals for a speaker bucket or for the whole corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub stats: ErrorStats,
    pub sentences: usize,
    pub sentence_errors: usize,
    pub correct: usize,
}

impl Tally {
    pub fn record(&mut self, stats: ErrorStats, correct: usize) {
        self.stats += stats;
        self.sentences += 1;
        self.correct += correct;
        if stats.has_errors() {
            self.sentence_errors += 1;
        }
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            stats: self.stats + other.stats,
            sentences: self.sentences + other.sentences,
            sentence_errors: self.sentence_errors + other.sentence_errors,
            correct: self.correct + other.correct,
        }
    }
}

/// Totals for one speaker plus its utterance ids in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeakerBucket {
    pub tally: Tally,
    pub utterance_ids: Vec<String>,
}
