use daygrid_layout::LayoutError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DayError>;

#[derive(Debug, Error)]
pub enum DayError {
    #[error("invalid day configuration: {message}")]
    InvalidConfig { message: String },

    #[error("failed to parse day configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("container height must be finite and greater than zero, got {height}")]
    InvalidContainerHeight { height: f64 },

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

impl DayError {
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DayError;
    use daygrid_layout::LayoutError;

    #[test]
    fn layout_errors_are_transparent() {
        let error = DayError::from(LayoutError::InvalidWidth { width: 0.0 });
        assert_eq!(
            error.to_string(),
            "layout width must be finite and greater than zero, got 0"
        );
    }

    #[test]
    fn invalid_config_constructor_keeps_message() {
        let error = DayError::invalid_config("start_hour must be below end_hour");
        assert_eq!(
            error.to_string(),
            "invalid day configuration: start_hour must be below end_hour"
        );
    }
}
