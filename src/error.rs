use thiserror::Error;

pub type ViewportResult<T> = Result<T, ViewportError>;

#[derive(Debug, Error)]
pub enum ViewportError {
    #[error("invalid index domain: start={start}, end={end}")]
    InvalidDomain { start: usize, end: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
