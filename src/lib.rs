pub mod alignment;
pub mod config;
pub mod error;
pub mod report;
pub mod scoring;
pub mod transcript;
pub mod types;

pub use alignment::{
    align, edit_distance, edit_distance_stats, levenshtein_alignment, Alignment, AlignmentPair,
    EditOp, EpsAlignment, ErrorStats,
};
pub use config::{ScoringConfig, ScoringOptions};
pub use error::ScoringError;
pub use report::SessionReport;
pub use scoring::{ReportRow, ScoringSession, ScoringSessionBuilder, SpeakerResolver, Tally};
pub use transcript::{load_trn, parse_trn};
pub use types::{Corpus, Token, TokenSequence, Utterance};
