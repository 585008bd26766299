use thiserror::Error;

pub type AlignResult<T> = Result<T, AlignError>;

#[derive(Debug, Error)]
pub enum AlignError {
    #[error("tick #{index} has no usable position: {reason}")]
    MissingTickGeometry { index: usize, reason: String },

    #[error("<{tag}> mark is missing numeric `{attribute}`")]
    MissingShapeGeometry { tag: String, attribute: String },

    #[error("unsupported mark element <{tag}>, expected <circle> or <rect>")]
    UnsupportedMark { tag: String },

    #[error("no element matches `{0}`")]
    MissingElement(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
