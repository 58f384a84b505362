use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("key mismatch between reference and hypothesis: {}", .ids.join(", "))]
    KeyMismatch { ids: Vec<String> },
    #[error("unsupported {option}: {value}")]
    UnsupportedOption { option: &'static str, value: String },
    #[error("I/O error while {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error while {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl ScoringError {
    pub(crate) fn key_mismatch(mut ids: Vec<String>) -> Self {
        ids.sort();
        Self::KeyMismatch { ids }
    }

    pub fn unsupported(option: &'static str, value: impl Into<String>) -> Self {
        Self::UnsupportedOption {
            option,
            value: value.into(),
        }
    }

    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub(crate) fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
