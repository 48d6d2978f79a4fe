pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("edge does not exist")]
    EdgeNotFound,

    #[error("vertex does not exist")]
    VertexNotFound,
}
