use crate::config::ScoringConfig;

/// Maps an utterance id onto the speaker bucket it is aggregated under.
pub trait SpeakerResolver: Send + Sync {
    fn speaker_id(&self, utterance_id: &str) -> String;
}

/// Speaker id is the utterance id up to the first separator, or the whole id
/// when the separator does not occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixSpeakerResolver {
    pub separator: char,
}

impl Default for PrefixSpeakerResolver {
    fn default() -> Self {
        Self {
            separator: ScoringConfig::DEFAULT_SPEAKER_SEPARATOR,
        }
    }
}

impl SpeakerResolver for PrefixSpeakerResolver {
    fn speaker_id(&self, utterance_id: &str) -> String {
        utterance_id
            .split_once(self.separator)
            .map_or(utterance_id, |(prefix, _)| prefix)
            .to_string()
    }
}

/// Every utterance lands in the same bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleBucketResolver {
    pub bucket_id: String,
}

impl SpeakerResolver for SingleBucketResolver {
    fn speaker_id(&self, _utterance_id: &str) -> String {
        self.bucket_id.clone()
    }
}

pub(crate) fn resolver_for(config: &ScoringConfig) -> Box<dyn SpeakerResolver> {
    if config.no_speaker_grouping {
        Box::new(SingleBucketResolver {
            bucket_id: config.single_bucket_id.clone(),
        })
    } else {
        Box::new(PrefixSpeakerResolver {
            separator: config.speaker_separator,
        })
    }
}
