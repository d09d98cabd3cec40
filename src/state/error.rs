//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// No horse selected in the list
    #[error("No horse selected")]
    #[allow(dead_code)]
    HorseNotSelected,

    /// No form active for the current screen
    #[error("No form active for the current screen")]
    #[allow(dead_code)]
    FormNotActive,

    /// Network event channel closed
    #[error("Network event channel closed")]
    #[allow(dead_code)]
    ChannelClosed,

    /// Generic state error
    #[error("State error: {0}")]
    #[allow(dead_code)]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::HorseNotSelected;
        assert!(error.to_string().contains("No horse selected"));

        let error = StateError::FormNotActive;
        assert!(error.to_string().contains("No form active"));

        let error = StateError::ChannelClosed;
        assert!(error.to_string().contains("channel closed"));

        let error = StateError::Other("Generic error".to_string());
        assert!(error.to_string().contains("State error"));
        assert!(error.to_string().contains("Generic error"));
    }
}
