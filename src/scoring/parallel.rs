//! Per-utterance scoring fan-out.
//!
//! With the `parallel` feature, utterances are aligned on rayon's pool;
//! otherwise sequentially. Both return scores in input order, so the
//! accumulation that follows sees the same sequence either way.

use crate::scoring::accumulator::UtteranceScore;
use crate::scoring::speaker::SpeakerResolver;
use crate::types::{Token, Utterance};

#[cfg(feature = "parallel")]
pub fn score_utterances<T: Token>(
    utterances: &[Utterance<'_, T>],
    resolver: &dyn SpeakerResolver,
) -> Vec<UtteranceScore<T>> {
    use rayon::prelude::*;

    utterances
        .par_iter()
        .map(|utt| UtteranceScore::compute(*utt, resolver.speaker_id(utt.id)))
        .collect()
}

#[cfg(not(feature = "parallel"))]
pub fn score_utterances<T: Token>(
    utterances: &[Utterance<'_, T>],
    resolver: &dyn SpeakerResolver,
) -> Vec<UtteranceScore<T>> {
    utterances
        .iter()
        .map(|utt| UtteranceScore::compute(*utt, resolver.speaker_id(utt.id)))
        .collect()
}
