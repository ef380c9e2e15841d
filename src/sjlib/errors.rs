use thiserror::Error;

/// Everything that can stop a run. None of these are recovered from; the
/// output written so far is left as-is.
#[derive(Error, Debug)]
pub enum SvjoinError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("htslib error: {0}")]
    Htslib(#[from] rust_htslib::errors::Error),

    #[error("unable to parse reference profile: {0}")]
    Profile(#[from] serde_json::Error),

    #[error("malformed record ({reason}): {line}")]
    MalformedRecord { line: String, reason: String },

    #[error("INFO key {key} missing from record: {record}")]
    MissingInfoKey { key: String, record: String },

    #[error("join key {key} not found in reference annotations")]
    MissingJoinKey { key: String },
}

impl SvjoinError {
    pub fn malformed(line: &str, reason: impl Into<String>) -> Self {
        SvjoinError::MalformedRecord {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SvjoinError>;
