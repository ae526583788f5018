use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("geocoding request timed out")]
    TimedOut,

    #[error("geocoding service returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("geocoding request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("failed to parse geocoding response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("geocoding response carried a malformed coordinate: {0}")]
    BadCoordinate(#[from] std::num::ParseFloatError),
}

impl From<reqwest::Error> for LookupError {
    /// Transport timeouts get their own variant so callers can report them
    /// distinctly from other request failures.
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LookupError::TimedOut
        } else {
            LookupError::Request(err)
        }
    }
}
