pub mod accumulator;
pub mod builder;
pub mod parallel;
pub mod session;
pub mod speaker;

pub use accumulator::{SpeakerBucket, Tally, UtteranceScore};
pub use builder::ScoringSessionBuilder;
pub use session::{ReportRow, ScoringSession};
pub use speaker::{PrefixSpeakerResolver, SingleBucketResolver, SpeakerResolver};
