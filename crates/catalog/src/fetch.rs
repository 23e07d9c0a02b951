//! Transport for catalog listings.

use tracing::debug;

use crate::error::{Result, UnavailableError};
use crate::source::Credentials;

/// Identifies the tool to the listing service, which rejects anonymous agents.
pub const USER_AGENT: &str = "weighsum (+https://github.com/ossf/scorecard)";

const ACCEPT: &str = "application/vnd.github+json";

/// Fetches the raw body of a listing URL.
pub trait ListingFetcher {
	fn fetch(&self, url: &str, credentials: &Credentials) -> Result<String>;
}

/// Blocking HTTPS fetcher. One request per call, no retries.
pub struct HttpFetcher {
	agent: ureq::Agent,
}

impl Default for HttpFetcher {
	fn default() -> Self {
		Self::new()
	}
}

impl HttpFetcher {
	pub fn new() -> Self {
		let agent = ureq::AgentBuilder::new().https_only(true).user_agent(USER_AGENT).build();
		Self { agent }
	}
}

impl ListingFetcher for HttpFetcher {
	fn fetch(&self, url: &str, credentials: &Credentials) -> Result<String> {
		let mut request = self.agent.get(url).set("Accept", ACCEPT);
		if let Some(auth) = credentials.authorization() {
			request = request.set("Authorization", &auth);
		}
		debug!(url, anonymous = credentials.is_anonymous(), "fetching catalog listing");

		match request.call() {
			Ok(response) => response
				.into_string()
				.map_err(|e| UnavailableError::Transport(e.to_string())),
			Err(ureq::Error::Status(status @ (401 | 403), _)) => Err(UnavailableError::Unauthorized { status }),
			Err(ureq::Error::Status(status, response)) => Err(UnavailableError::Status {
				status,
				body: response.into_string().unwrap_or_default(),
			}),
			Err(ureq::Error::Transport(transport)) => Err(UnavailableError::Transport(transport.to_string())),
		}
	}
}
