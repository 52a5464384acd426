use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineReadError {
    #[error("Failed to open source {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read line: {0}")]
    Read(#[from] std::io::Error),
}
