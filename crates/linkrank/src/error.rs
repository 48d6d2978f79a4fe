use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] digraph::GraphError),

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Damping factor must lie within [0, 1], got {0}")]
    InvalidAlpha(f64),

    #[error("Link marker must not be empty")]
    EmptyLinkMarker,
}
