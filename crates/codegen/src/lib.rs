//! Probe schema generation.
//!
//! Discovers the probe catalog and rewrites the `PROBE_NAMES` source file
//! consumed by `weighsum-metric`. Nothing is written unless discovery succeeds.

pub mod emit;
pub mod write;

use std::env::VarError;
use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};
use weighsum_catalog::{CatalogSource, Credentials, ListingFetcher, discover_with};

/// Where the generated schema lives, relative to the workspace root.
pub const DEFAULT_OUTPUT: &str = "crates/metric/src/probes.rs";

/// Environment variable holding the optional catalog access token.
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Turns the raw `GITHUB_TOKEN` lookup into credentials.
///
/// A missing, blank or non-UTF-8 token falls back to anonymous access with a warning.
pub fn credentials_from_env(value: Result<String, VarError>) -> Credentials {
	match value {
		Ok(token) if !token.trim().is_empty() => Credentials::token(token),
		Ok(_) => {
			warn!("{TOKEN_VAR} is blank; discovery is unauthenticated and rate-limited");
			Credentials::anonymous()
		}
		Err(VarError::NotPresent) => {
			warn!("{TOKEN_VAR} not set; discovery is unauthenticated and rate-limited");
			Credentials::anonymous()
		}
		Err(VarError::NotUnicode(_)) => {
			warn!("{TOKEN_VAR} is not valid UTF-8; ignoring it and running unauthenticated");
			Credentials::anonymous()
		}
	}
}

/// Discovers probes and rewrites `output`. Returns the number of probes written.
pub fn generate(fetcher: &impl ListingFetcher, source: &CatalogSource, credentials: &Credentials, output: &Path) -> anyhow::Result<usize> {
	let probes = discover_with(fetcher, source, credentials).with_context(|| format!("discovering probes from {source}"))?;
	if probes.is_empty() {
		warn!(%source, "catalog lists no probes; emitting an empty schema");
	}

	let module = emit::probe_module(&probes);
	write::write_atomic(output, &module).with_context(|| format!("writing {}", output.display()))?;
	info!(path = %output.display(), count = probes.len(), "wrote probe schema");
	Ok(probes.len())
}

#[cfg(test)]
mod tests;
