use thiserror::Error;

/// Errors surfaced while opening windows.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The host refused to create a window for the given URL.
    #[error("window creation rejected for '{url}': {message}")]
    CreationRejected { url: String, message: String },

    /// A launch failure that does not fit a more specific variant.
    #[error("launch failed: {0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_rejected_names_the_url() {
        let error = LaunchError::CreationRejected {
            url: "https://mail.google.com/".to_string(),
            message: "popup blocked".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "window creation rejected for 'https://mail.google.com/': popup blocked"
        );
    }

    #[test]
    fn other_display() {
        let error = LaunchError::Other("host gone".to_string());
        assert_eq!(error.to_string(), "launch failed: host gone");
    }
}
