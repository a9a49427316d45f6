use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActivityError {
    #[error("Invalid local timestamp '{input}': {source}")]
    InvalidTimestamp {
        input: String,
        source: time::error::Parse,
    },
}
