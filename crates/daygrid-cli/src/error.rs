use daygrid_day::DayError;
use daygrid_layout::LayoutError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("day layout failed: {0}")]
    Day(#[from] DayError),

    #[error("layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl CliError {
    /// Process exit status for this error.
    ///
    /// Bad arguments exit with 2, malformed input data with 65, and
    /// I/O failures with 74.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } => 2,
            Self::Json(_) | Self::Day(_) | Self::Layout(_) => 65,
            Self::Io(_) => 74,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
