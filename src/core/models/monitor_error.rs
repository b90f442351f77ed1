use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonitorError {
    #[error("Region selection was cancelled")]
    SelectionAborted,

    #[error(
        "Frames must have the same size: previous {}x{}, current {}x{}",
        previous.0,
        previous.1,
        current.0,
        current.1
    )]
    DimensionMismatch {
        previous: (u32, u32),
        current: (u32, u32),
    },

    #[error("Capture failed: {0}")]
    CaptureFailure(String),
}

impl MonitorError {
    pub fn from_capture_error(error: &anyhow::Error) -> Self {
        MonitorError::CaptureFailure(format!("{:#}", error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_dimension_mismatch_message_names_both_sizes() {
        let error = MonitorError::DimensionMismatch {
            previous: (100, 50),
            current: (99, 50),
        };

        assert_eq!(
            error.to_string(),
            "Frames must have the same size: previous 100x50, current 99x50"
        );
    }

    #[test]
    fn test_from_capture_error_keeps_context_chain() {
        let source: anyhow::Result<()> = Err(anyhow::anyhow!("display went away"));
        let error = source.context("Unable to capture Monitor").unwrap_err();

        let monitor_error = MonitorError::from_capture_error(&error);

        assert_eq!(
            monitor_error,
            MonitorError::CaptureFailure(
                "Unable to capture Monitor: display went away".to_string()
            )
        );
        assert!(monitor_error.to_string().starts_with("Capture failed:"));
    }
}
