use std::collections::HashMap;

use serde::Serialize;

use crate::alignment::Alignment;
use crate::config::{ScoringConfig, ScoringOptions};
use crate::error::ScoringError;
use crate::scoring::accumulator::{SpeakerBucket, Tally, UtteranceScore};
use crate::scoring::builder::ScoringSessionBuilder;
use crate::types::{Corpus, Token};

/// One line of a summary table.
///
/// In rate mode every column after `word_count` is a percentage of
/// `word_count`, except `sentence_errors`, which is a percentage of
/// `sentence_count`. In count mode the same columns hold raw counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportRow {
    pub sentence_count: usize,
    pub word_count: usize,
    pub correct: f64,
    pub substitutions: f64,
    pub deletions: f64,
    pub insertions: f64,
    pub errors: f64,
    pub sentence_errors: f64,
    #[serde(skip)]
    pub as_rate: bool,
}

impl ReportRow {
    pub fn from_tally(tally: &Tally, as_rate: bool) -> Self {
        let words = tally.stats.ref_num;
        let sentences = tally.sentences;
        let scale = |value: usize, denom: usize| {
            if as_rate {
                percent(value, denom)
            } else {
                value as f64
            }
        };
        Self {
            sentence_count: sentences,
            word_count: words,
            correct: scale(tally.correct, words),
            substitutions: scale(tally.stats.sub_num, words),
            deletions: scale(tally.stats.del_num, words),
            insertions: scale(tally.stats.ins_num, words),
            errors: scale(tally.stats.distance, words),
            sentence_errors: scale(tally.sentence_errors, sentences),
            as_rate,
        }
    }

    /// Corr, Sub, Del, Ins, Err, S.Err in table order.
    pub fn error_columns(&self) -> [f64; 6] {
        [
            self.correct,
            self.substitutions,
            self.deletions,
            self.insertions,
            self.errors,
            self.sentence_errors,
        ]
    }
}

fn percent(value: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        value as f64 / denom as f64 * 100.0
    }
}

/// Scores of a whole corpus, grouped by speaker.
///
/// Built once from a reference and a hypothesis corpus; read-only afterwards.
#[derive(Debug, Clone)]
pub struct ScoringSession<T> {
    config: ScoringConfig,
    utterances: HashMap<String, UtteranceScore<T>>,
    speakers: Vec<(String, SpeakerBucket)>,
    speaker_index: HashMap<String, usize>,
    total: Tally,
}

impl<T: Token> ScoringSession<T> {
    pub fn new(
        reference: &Corpus<T>,
        hypothesis: &Corpus<T>,
        options: ScoringOptions,
    ) -> Result<Self, ScoringError> {
        ScoringSessionBuilder::new(options.into()).build(reference, hypothesis)
    }
}

impl<T> ScoringSession<T> {
    pub(crate) fn from_scores(config: ScoringConfig, scores: Vec<UtteranceScore<T>>) -> Self {
        let mut session = Self {
            config,
            utterances: HashMap::with_capacity(scores.len()),
            speakers: Vec::new(),
            speaker_index: HashMap::new(),
            total: Tally::default(),
        };
        for score in scores {
            session.record(score);
        }
        tracing::info!(
            utterances = session.utterances.len(),
            speakers = session.speakers.len(),
            wer = session.error_rate(),
            "scoring complete"
        );
        session
    }

    fn record(&mut self, score: UtteranceScore<T>) {
        tracing::debug!(
            utterance = %score.id,
            speaker = %score.speaker_id,
            distance = score.stats.distance,
            "scored utterance"
        );
        let pos = match self.speaker_index.get(&score.speaker_id) {
            Some(&pos) => pos,
            None => {
                let pos = self.speakers.len();
                self.speaker_index.insert(score.speaker_id.clone(), pos);
                self.speakers
                    .push((score.speaker_id.clone(), SpeakerBucket::default()));
                pos
            }
        };
        let bucket = &mut self.speakers[pos].1;
        bucket.tally.record(score.stats, score.correct);
        bucket.utterance_ids.push(score.id.clone());
        self.total.record(score.stats, score.correct);
        self.utterances.insert(score.id.clone(), score);
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn system_name(&self) -> &str {
        &self.config.system_name
    }

    pub fn utterance_count(&self) -> usize {
        self.utterances.len()
    }

    /// Speaker ids in the order their first utterance was scored.
    pub fn speaker_ids(&self) -> Vec<&str> {
        self.speakers.iter().map(|(id, _)| id.as_str()).collect()
    }

    pub fn utterance_ids_for_speaker(&self, speaker_id: &str) -> Option<&[String]> {
        self.bucket(speaker_id)
            .map(|bucket| bucket.utterance_ids.as_slice())
    }

    pub fn utterance_score(&self, utterance_id: &str) -> Option<&UtteranceScore<T>> {
        self.utterances.get(utterance_id)
    }

    pub fn utterance_alignment(&self, utterance_id: &str) -> Option<&Alignment<T>> {
        self.utterances
            .get(utterance_id)
            .map(|score| &score.alignment)
    }

    pub fn speaker_tally(&self, speaker_id: &str) -> Option<&Tally> {
        self.bucket(speaker_id).map(|bucket| &bucket.tally)
    }

    pub fn total(&self) -> &Tally {
        &self.total
    }

    pub fn speaker_view(&self, speaker_id: &str, as_rate: bool) -> Option<ReportRow> {
        self.speaker_tally(speaker_id)
            .map(|tally| ReportRow::from_tally(tally, as_rate))
    }

    pub fn global_view(&self, as_rate: bool) -> ReportRow {
        ReportRow::from_tally(&self.total, as_rate)
    }

    /// One row per speaker, first-seen order.
    pub fn speaker_rows(&self, as_rate: bool) -> Vec<(&str, ReportRow)> {
        self.speakers
            .iter()
            .map(|(id, bucket)| (id.as_str(), ReportRow::from_tally(&bucket.tally, as_rate)))
            .collect()
    }

    /// Corpus word error rate, in percent.
    pub fn error_rate(&self) -> f64 {
        self.global_view(true).errors
    }

    fn bucket(&self, speaker_id: &str) -> Option<&SpeakerBucket> {
        self.speaker_index
            .get(speaker_id)
            .map(|&pos| &self.speakers[pos].1)
    }
}
