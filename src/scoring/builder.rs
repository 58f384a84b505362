use std::collections::HashSet;

use crate::config::ScoringConfig;
use crate::error::ScoringError;
use crate::scoring::parallel::score_utterances;
use crate::scoring::session::ScoringSession;
use crate::scoring::speaker::{resolver_for, SpeakerResolver};
use crate::types::{Corpus, Token, Utterance};

pub struct ScoringSessionBuilder {
    config: ScoringConfig,
    speaker_resolver: Option<Box<dyn SpeakerResolver>>,
}

impl ScoringSessionBuilder {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            speaker_resolver: None,
        }
    }

    pub fn with_system_name(mut self, system_name: impl Into<String>) -> Self {
        self.config.system_name = system_name.into();
        self
    }

    pub fn with_no_speaker_grouping(mut self, no_speaker_grouping: bool) -> Self {
        self.config.no_speaker_grouping = no_speaker_grouping;
        self
    }

    /// Overrides the resolver otherwise derived from the config.
    pub fn with_speaker_resolver(mut self, speaker_resolver: Box<dyn SpeakerResolver>) -> Self {
        self.speaker_resolver = Some(speaker_resolver);
        self
    }

    /// Aligns every utterance and accumulates the results.
    ///
    /// Fails before scoring anything when the two corpora do not carry the
    /// same utterance ids.
    pub fn build<T: Token>(
        self,
        reference: &Corpus<T>,
        hypothesis: &Corpus<T>,
    ) -> Result<ScoringSession<T>, ScoringError> {
        check_keys(reference, hypothesis)?;

        let utterances: Vec<Utterance<'_, T>> = reference
            .iter()
            .filter_map(|(id, ref_tokens)| {
                hypothesis.get(id).map(|hyp_tokens| Utterance {
                    id,
                    reference: ref_tokens,
                    hypothesis: hyp_tokens,
                })
            })
            .collect();

        let speaker_resolver = self
            .speaker_resolver
            .unwrap_or_else(|| resolver_for(&self.config));
        let scores = score_utterances(&utterances, speaker_resolver.as_ref());
        Ok(ScoringSession::from_scores(self.config, scores))
    }
}

fn check_keys<T>(reference: &Corpus<T>, hypothesis: &Corpus<T>) -> Result<(), ScoringError> {
    let ref_ids: HashSet<&str> = reference.ids().collect();
    let hyp_ids: HashSet<&str> = hypothesis.ids().collect();
    let mismatched: Vec<String> = ref_ids
        .symmetric_difference(&hyp_ids)
        .map(|id| id.to_string())
        .collect();
    if mismatched.is_empty() {
        Ok(())
    } else {
        Err(ScoringError::key_mismatch(mismatched))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::speaker::PrefixSpeakerResolver;

    fn int_corpus(rows: Vec<(&str, Vec<i64>)>) -> Corpus<i64> {
        rows.into_iter().collect()
    }

    #[test]
    fn builder_accepts_integer_tokens() {
        let reference = int_corpus(vec![("s1-a", vec![0, 0, 1, 0, 3, 4])]);
        let hypothesis = int_corpus(vec![("s1-a", vec![0, 0, 1, 3, 5])]);
        let session = ScoringSessionBuilder::new(ScoringConfig::default())
            .build(&reference, &hypothesis)
            .expect("matching keys");
        let score = session.utterance_score("s1-a").expect("scored");
        assert_eq!(score.stats.distance, 2);
        assert_eq!(score.correct, 4);
        assert_eq!(session.speaker_ids(), vec!["s1"]);
    }

    #[test]
    fn hypothesis_only_ids_are_reported() {
        let reference = int_corpus(vec![("a", vec![1])]);
        let hypothesis = int_corpus(vec![("a", vec![1]), ("z", vec![2])]);
        let err = ScoringSessionBuilder::new(ScoringConfig::default())
            .build(&reference, &hypothesis)
            .expect_err("extra hypothesis id");
        assert_eq!(
            err.to_string(),
            "key mismatch between reference and hypothesis: z"
        );
    }

    #[test]
    fn custom_resolver_and_system_name() {
        let reference = int_corpus(vec![("x_1-a", vec![1, 2]), ("y_2-b", vec![3])]);
        let hypothesis = int_corpus(vec![("x_1-a", vec![1, 2]), ("y_2-b", vec![4])]);
        let session = ScoringSessionBuilder::new(ScoringConfig::default())
            .with_system_name("decode.trn")
            .with_speaker_resolver(Box::new(PrefixSpeakerResolver { separator: '_' }))
            .build(&reference, &hypothesis)
            .expect("matching keys");
        assert_eq!(session.speaker_ids(), vec!["x", "y"]);
        assert_eq!(session.system_name(), "decode.trn");
    }

    #[test]
    fn empty_corpora_score_to_empty_session() {
        let reference: Corpus<String> = Corpus::new();
        let hypothesis: Corpus<String> = Corpus::new();
        let session = ScoringSessionBuilder::new(ScoringConfig::default())
            .with_no_speaker_grouping(true)
            .build(&reference, &hypothesis)
            .expect("empty corpora match");
        assert_eq!(session.utterance_count(), 0);
        assert!(session.speaker_ids().is_empty());
        assert_eq!(session.error_rate(), 0.0);
    }
}
