use thiserror::Error;

/// Failure kinds surfaced by the recipe service and image loader.
///
/// The `Display` text doubles as the user-facing message shown by the
/// list and detail models.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceError {
    /// The request URL could not be constructed
    #[error("The URL is invalid.")]
    InvalidUrl,

    /// Non-success status, or an empty result such as an unknown recipe id
    #[error("The server response was invalid.")]
    BadServerResponse,

    /// The response body did not have the expected shape
    #[error("Failed to decode the response.")]
    DecodingFailure,

    /// Anything else, e.g. a connection failure
    #[error("An unknown error occurred.")]
    Unknown,
}

impl From<serde_json::Error> for ServiceError {
    fn from(_: serde_json::Error) -> Self {
        ServiceError::DecodingFailure
    }
}

/// Errors from setting up a catalog, or from the one-shot fetch helpers
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    /// The configured API base URL does not parse
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// A request made through the one-shot helpers failed
    #[error(transparent)]
    Service(#[from] ServiceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(ServiceError::InvalidUrl.to_string(), "The URL is invalid.");
        assert_eq!(
            ServiceError::BadServerResponse.to_string(),
            "The server response was invalid."
        );
        assert_eq!(
            ServiceError::DecodingFailure.to_string(),
            "Failed to decode the response."
        );
        assert_eq!(ServiceError::Unknown.to_string(), "An unknown error occurred.");
    }

    #[test]
    fn test_json_error_is_decoding_failure() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert_eq!(ServiceError::from(err), ServiceError::DecodingFailure);
    }
}
