pub mod levenshtein;
pub mod stats;

pub use levenshtein::{
    align, edit_distance, edit_distance_stats, levenshtein_alignment, Alignment, AlignmentPair,
    EditOp, EpsAlignment,
};
pub use stats::ErrorStats;
