use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error("Unknown CRS: {0}")]
    UnknownCrs(String),

    #[error("x and y must have same length, got {0} and {1}")]
    LengthMismatch(usize, usize),

    #[error("Conversion failed: {0}")]
    Convert(#[from] ConvertError),
}
