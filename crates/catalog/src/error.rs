//! Discovery failures.

use thiserror::Error;

/// The probe catalog could not be fetched or understood.
///
/// Every variant means "no schema"; an empty catalog is reported as an empty
/// list, never as an error.
#[derive(Debug, Error)]
pub enum UnavailableError {
	/// The request never produced an HTTP response.
	#[error("network error: {0}")]
	Transport(String),

	/// The service refused the request (bad credentials or rate limit).
	#[error("request rejected with status {status}; check GITHUB_TOKEN or rate limits")]
	Unauthorized {
		/// HTTP status code.
		status: u16,
	},

	/// The service answered with a non-success status.
	#[error("status {status}: {body}")]
	Status {
		/// HTTP status code.
		status: u16,
		/// Response body, if it could be read.
		body: String,
	},

	/// The listing was not the expected JSON.
	#[error("invalid listing: {0}")]
	Malformed(#[from] serde_json::Error),

	/// The service returned only part of the tree.
	#[error("listing was truncated by the service; refusing to emit a partial probe set")]
	Truncated,

	/// The probe layout did not compile to a path pattern.
	#[error("invalid probe layout: {0}")]
	Pattern(#[from] regex::Error),
}

/// Result type for discovery.
pub type Result<T> = std::result::Result<T, UnavailableError>;
