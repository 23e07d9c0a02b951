//! Where the catalog lives and how to authenticate against it.

use std::fmt;

/// A repository tree holding one directory per probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSource {
	pub owner: String,
	pub repo: String,
	pub branch: String,
	/// Directory whose immediate children are probes.
	pub probe_dir: String,
	/// File that marks a child directory as a probe definition.
	pub definition_file: String,
}

impl Default for CatalogSource {
	fn default() -> Self {
		Self {
			owner: "ossf".into(),
			repo: "scorecard".into(),
			branch: "main".into(),
			probe_dir: "probes".into(),
			definition_file: "def.yml".into(),
		}
	}
}

impl CatalogSource {
	/// Recursive tree listing endpoint for this source.
	pub fn listing_url(&self) -> String {
		format!(
			"https://api.github.com/repos/{}/{}/git/trees/{}?recursive=1",
			self.owner, self.repo, self.branch
		)
	}
}

impl fmt::Display for CatalogSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}@{}", self.owner, self.repo, self.branch)
	}
}

/// Optional access token sent with discovery requests.
///
/// Resolved once by the caller; the catalog never reads the environment.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
	token: Option<String>,
}

impl Credentials {
	/// No token; the service applies anonymous rate limits.
	pub fn anonymous() -> Self {
		Self::default()
	}

	/// Blank tokens count as anonymous.
	pub fn token(token: impl Into<String>) -> Self {
		let token = token.into();
		let token = (!token.trim().is_empty()).then_some(token);
		Self { token }
	}

	pub fn is_anonymous(&self) -> bool {
		self.token.is_none()
	}

	/// Value for the `Authorization` header, if any.
	pub fn authorization(&self) -> Option<String> {
		self.token.as_deref().map(|token| format!("Bearer {}", token.trim()))
	}
}

impl fmt::Debug for Credentials {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let token = if self.token.is_some() { "<redacted>" } else { "<none>" };
		f.debug_struct("Credentials").field("token", &token).finish()
	}
}
