#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("record {url} has no recognizable issue or pull request path")]
    UnrecognizedThreadUrl { url: String },
    #[error("record {url} is a thread head without a number")]
    MissingNumber { url: String },
    #[error("record {url} carries malformed label data: {source}")]
    MalformedLabels {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ClassifyError>;
