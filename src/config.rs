use std::path::Path;

use serde::Deserialize;

use crate::error::ScoringError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Score every utterance under a single speaker bucket.
    pub no_speaker_grouping: bool,
    /// Speaker id is the utterance id up to the first occurrence of this character.
    pub speaker_separator: char,
    /// Bucket name used when `no_speaker_grouping` is set.
    pub single_bucket_id: String,
    /// Title shown above each table and in the alignment dump.
    pub system_name: String,
}

impl ScoringConfig {
    pub const DEFAULT_SPEAKER_SEPARATOR: char = '-';
    pub const DEFAULT_SINGLE_BUCKET_ID: &'static str = "all";
    pub const DEFAULT_SYSTEM_NAME: &'static str = "hyp";

    pub fn load(path: &Path) -> Result<Self, ScoringError> {
        let data = std::fs::read_to_string(path).map_err(|e| {
            ScoringError::io(format!("reading config '{}'", path.display()), e)
        })?;
        serde_json::from_str(&data)
            .map_err(|e| ScoringError::json(format!("parsing config '{}'", path.display()), e))
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            no_speaker_grouping: false,
            speaker_separator: Self::DEFAULT_SPEAKER_SEPARATOR,
            single_bucket_id: Self::DEFAULT_SINGLE_BUCKET_ID.to_string(),
            system_name: Self::DEFAULT_SYSTEM_NAME.to_string(),
        }
    }
}

/// Options accepted by [`crate::ScoringSession::new`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoringOptions {
    pub no_speaker_grouping: bool,
}

impl From<ScoringOptions> for ScoringConfig {
    fn from(options: ScoringOptions) -> Self {
        Self {
            no_speaker_grouping: options.no_speaker_grouping,
            ..Self::default()
        }
    }
}
