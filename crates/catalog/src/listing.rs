//! Extracting probe identifiers from a recursive tree listing.

use indexmap::IndexSet;
use regex::Regex;
use serde::Deserialize;

use crate::error::{Result, UnavailableError};
use crate::source::CatalogSource;

#[derive(Debug, Deserialize)]
struct TreeListing {
	tree: Vec<TreeEntry>,
	#[serde(default)]
	truncated: bool,
}

#[derive(Debug, Deserialize)]
struct TreeEntry {
	path: String,
}

/// Compiles `<probe_dir>/<name>/<definition_file>` into a path pattern capturing `name`.
pub fn probe_pattern(source: &CatalogSource) -> Result<Regex> {
	let pattern = format!(
		"^{}/([^/]+)/{}$",
		regex::escape(&source.probe_dir),
		regex::escape(&source.definition_file)
	);
	Ok(Regex::new(&pattern)?)
}

/// Probe identifiers named by a listing body, first-seen order, no repeats.
pub fn extract_probes(body: &str, source: &CatalogSource) -> Result<Vec<String>> {
	let listing: TreeListing = serde_json::from_str(body)?;
	if listing.truncated {
		return Err(UnavailableError::Truncated);
	}
	let pattern = probe_pattern(source)?;
	let names: IndexSet<&str> = listing
		.tree
		.iter()
		.filter_map(|entry| pattern.captures(&entry.path)?.get(1))
		.map(|name| name.as_str())
		.collect();
	Ok(names.into_iter().map(str::to_string).collect())
}
