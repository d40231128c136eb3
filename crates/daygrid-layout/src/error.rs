use daygrid_core::Timestamp;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Caller bugs detected before any packing happens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("layout width must be finite and greater than zero, got {width}")]
    InvalidWidth { width: f64 },

    #[error("event #{index} ends before it begins ({begin} > {end})")]
    InvertedInterval {
        index: usize,
        begin: Timestamp,
        end: Timestamp,
    },
}

#[cfg(test)]
mod tests {
    use super::LayoutError;
    use daygrid_core::Timestamp;

    #[test]
    fn messages_name_the_offending_input() {
        let error = LayoutError::InvalidWidth { width: -3.0 };
        assert_eq!(
            error.to_string(),
            "layout width must be finite and greater than zero, got -3"
        );

        let error = LayoutError::InvertedInterval {
            index: 4,
            begin: Timestamp::from_millis(2_000),
            end: Timestamp::from_millis(1_000),
        };
        assert_eq!(
            error.to_string(),
            "event #4 ends before it begins (1970-01-01T00:00:02 > 1970-01-01T00:00:01)"
        );
    }
}
