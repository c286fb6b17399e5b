#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Error types for hosting platform operations.
///
/// This enum represents the errors that can occur when reading pull request
/// data from a hosting platform like GitHub. Each variant provides specific
/// context about the type of failure encountered.
///
/// # Examples
///
/// ```rust
/// use pr_scout_platforms::errors::Error;
///
/// // Authentication error
/// let auth_error = Error::AuthError("Invalid token".to_string());
/// println!("{}", auth_error);
///
/// // Rate limit error
/// let rate_limit = Error::RateLimitExceeded;
/// assert_eq!(rate_limit.to_string(), "Rate limit exceeded");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Generic API request failure.
    ///
    /// This error indicates that an API call to the hosting platform failed
    /// for an unspecified reason. This is typically used as a fallback when
    /// more specific error information is not available.
    #[error("API request failed")]
    ApiError(),

    /// Authentication failed with the platform.
    ///
    /// This error indicates that the provided credentials are invalid,
    /// expired, or insufficient for the requested operation. The string
    /// parameter contains additional details about the failure.
    #[error("Authentication failed: {0}")]
    AuthError(String),

    /// Invalid response format from platform API.
    ///
    /// This error indicates that the response received from the platform API
    /// was not in the expected format. This could happen due to:
    /// - API version changes
    /// - Malformed JSON responses
    /// - Missing required fields in the response
    #[error("Invalid response format")]
    InvalidResponse,

    /// Platform rate limit exceeded.
    ///
    /// This error indicates that the API rate limit for the hosting platform
    /// has been exceeded. Callers should retry the operation after the rate
    /// limit window resets.
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}
