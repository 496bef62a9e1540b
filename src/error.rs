use thiserror::Error;

pub type PortResult<T> = Result<T, PortError>;

#[derive(Error, Debug)]
pub enum PortError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Excel error: {0}")]
    Excel(String),

    #[error("Workbook error: {0}")]
    Workbook(String),
}
