//! Stable API-specific error types.

/// Errors that can occur during stable API operations.
#[derive(Debug, thiserror::Error)]
pub enum StableError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// API returned a non-success response
    #[error("API error (status {status}): {}", detail.as_deref().unwrap_or("no detail"))]
    Api { status: u16, detail: Option<String> },

    /// Failed to serialize a request body
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StableError {
    /// Return the server-provided error detail, when the response carried one.
    ///
    pub fn detail(&self) -> Option<&str> {
        match self {
            StableError::Api {
                detail: Some(detail),
                ..
            } => Some(detail.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_error_display() {
        let error = StableError::Api {
            status: 404,
            detail: Some("Koń nie istnieje".to_string()),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("404"));
        assert!(error_str.contains("Koń nie istnieje"));

        let error = StableError::Api {
            status: 500,
            detail: None,
        };
        assert!(error.to_string().contains("no detail"));
    }

    #[test]
    fn test_stable_error_detail() {
        let error = StableError::Api {
            status: 400,
            detail: Some("Nie można zmieniać rasy konia".to_string()),
        };
        assert_eq!(error.detail(), Some("Nie można zmieniać rasy konia"));

        let error = StableError::Api {
            status: 400,
            detail: None,
        };
        assert_eq!(error.detail(), None);
    }
}
