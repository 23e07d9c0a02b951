//! Probe catalog discovery.
//!
//! Lists the scorecard repository tree and collects the name of every probe
//! directory that carries a definition file (`probes/<name>/def.yml`). The
//! resulting names fix the shape of the generated metric schema.
//!
//! Discovery is a build-time step: one blocking request, no retries. Failure
//! is always an [`UnavailableError`], so an empty result can only mean the
//! catalog really has no probes.

mod error;
mod fetch;
mod listing;
mod source;

pub use error::{Result, UnavailableError};
pub use fetch::{HttpFetcher, ListingFetcher, USER_AGENT};
pub use listing::{extract_probes, probe_pattern};
pub use source::{CatalogSource, Credentials};

use tracing::{debug, info};

/// Discovers probe identifiers over HTTPS.
pub fn discover(source: &CatalogSource, credentials: &Credentials) -> Result<Vec<String>> {
	discover_with(&HttpFetcher::new(), source, credentials)
}

/// Discovers probe identifiers through `fetcher`.
pub fn discover_with(fetcher: &impl ListingFetcher, source: &CatalogSource, credentials: &Credentials) -> Result<Vec<String>> {
	let url = source.listing_url();
	let body = fetcher.fetch(&url, credentials)?;
	debug!(bytes = body.len(), "received catalog listing");
	let probes = extract_probes(&body, source)?;
	info!(%source, count = probes.len(), "discovered probes");
	Ok(probes)
}
