//! Reader for `trn` transcripts.
//!
//! Each line holds whitespace-separated tokens followed by the utterance id in
//! parentheses, e.g. `O N E <space> F I F T Y (fjlp-fjlp-cen3-b)`.

use std::fs;
use std::path::Path;

use crate::error::ScoringError;
use crate::types::Corpus;

pub fn parse_trn(text: &str) -> Result<Corpus<String>, ScoringError> {
    let mut corpus = Corpus::new();
    for (line_no, line) in text.lines().enumerate() {
        let mut fields: Vec<&str> = line.split_whitespace().collect();
        let Some(last) = fields.pop() else {
            continue;
        };
        let id = last
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| {
                ScoringError::invalid_input(format!(
                    "line {}: expected a trailing (utterance-id), found '{last}'",
                    line_no + 1
                ))
            })?;
        let tokens = fields.into_iter().map(str::to_string).collect();
        corpus.insert(id, tokens);
    }
    Ok(corpus)
}

pub fn load_trn(path: &Path) -> Result<Corpus<String>, ScoringError> {
    let text = fs::read_to_string(path)
        .map_err(|err| ScoringError::io(format!("reading '{}'", path.display()), err))?;
    let corpus = parse_trn(&text)?;
    tracing::debug!(path = %path.display(), utterances = corpus.len(), "loaded transcript");
    Ok(corpus)
}
