use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("can't read from stdin: {0}")]
    Read(#[source] io::Error),

    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}
