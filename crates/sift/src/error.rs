use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiftError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read workbook: {0}")]
    WorkbookRead(#[from] calamine::XlsxError),

    #[error("Failed to write workbook: {0}")]
    WorkbookWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("Sheet not found: {0}")]
    MissingSheet(String),

    #[error("Missing required column '{column}' in {table} table")]
    MissingColumn { table: String, column: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("User input error: {0}")]
    UserInput(String),
}

impl From<dialoguer::Error> for SiftError {
    fn from(err: dialoguer::Error) -> Self {
        SiftError::UserInput(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SiftError>;
