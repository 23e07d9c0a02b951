use std::fs;

use pretty_assertions::assert_eq;
use weighsum_catalog::{CatalogSource, Credentials, ListingFetcher, UnavailableError};
use weighsum_codegen::emit::probe_module;
use weighsum_codegen::generate;
use weighsum_metric::probes::PROBE_NAMES;

struct Canned(&'static str);

impl ListingFetcher for Canned {
	fn fetch(&self, _url: &str, _credentials: &Credentials) -> weighsum_catalog::Result<String> {
		Ok(self.0.to_string())
	}
}

struct Offline;

impl ListingFetcher for Offline {
	fn fetch(&self, _url: &str, _credentials: &Credentials) -> weighsum_catalog::Result<String> {
		Err(UnavailableError::Transport("connection refused".into()))
	}
}

const LISTING: &str = r#"{
	"tree": [
		{ "path": "probes/archived/def.yml" },
		{ "path": "probes/archived/impl.go" },
		{ "path": "probes/Binary-Artifacts/def.yml" }
	],
	"truncated": false
}"#;

#[test]
fn generation_writes_discovered_probes() {
	let dir = tempfile::tempdir().unwrap();
	let output = dir.path().join("probes.rs");

	let count = generate(&Canned(LISTING), &CatalogSource::default(), &Credentials::anonymous(), &output).unwrap();

	assert_eq!(count, 2);
	assert_eq!(
		fs::read_to_string(&output).unwrap(),
		probe_module(&["archived".into(), "Binary-Artifacts".into()])
	);
}

#[test]
fn failed_discovery_keeps_previous_artifact() {
	let dir = tempfile::tempdir().unwrap();
	let output = dir.path().join("probes.rs");
	fs::write(&output, "previous").unwrap();

	let err = generate(&Offline, &CatalogSource::default(), &Credentials::anonymous(), &output).unwrap_err();

	assert!(format!("{err:#}").contains("connection refused"), "{err:#}");
	assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
	assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn truncated_listing_keeps_previous_artifact() {
	let dir = tempfile::tempdir().unwrap();
	let output = dir.path().join("probes.rs");
	fs::write(&output, "previous").unwrap();

	let listing = r#"{ "tree": [{ "path": "probes/archived/def.yml" }], "truncated": true }"#;
	assert!(generate(&Canned(listing), &CatalogSource::default(), &Credentials::anonymous(), &output).is_err());
	assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}

#[test]
fn empty_catalog_still_writes_a_valid_module() {
	let dir = tempfile::tempdir().unwrap();
	let output = dir.path().join("probes.rs");

	let count = generate(&Canned(r#"{ "tree": [] }"#), &CatalogSource::default(), &Credentials::anonymous(), &output).unwrap();

	assert_eq!(count, 0);
	assert_eq!(fs::read_to_string(&output).unwrap(), probe_module(&[]));
}

#[test]
fn missing_output_directory_is_an_error() {
	let dir = tempfile::tempdir().unwrap();
	let output = dir.path().join("missing").join("probes.rs");
	assert!(generate(&Canned(LISTING), &CatalogSource::default(), &Credentials::anonymous(), &output).is_err());
	assert!(!output.exists());
}

#[test]
fn committed_schema_matches_generator_output() {
	let names: Vec<String> = PROBE_NAMES.iter().map(|name| name.to_string()).collect();
	let committed = include_str!("../../metric/src/probes.rs");
	assert_eq!(probe_module(&names), committed);
}
