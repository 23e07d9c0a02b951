use std::path::PathBuf;

use clap::Parser;
use weighsum_catalog::CatalogSource;
use weighsum_codegen::DEFAULT_OUTPUT;

/// Command-line arguments. Every flag is optional.
#[derive(Parser, Debug)]
#[command(name = "weighsum-codegen")]
#[command(about = "Regenerate the builtin probe schema from the scorecard probe catalog")]
#[command(version)]
pub struct Args {
	/// Generated source file to overwrite
	#[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
	pub output: PathBuf,

	/// Owner of the catalog repository (default: ossf)
	#[arg(long)]
	pub owner: Option<String>,

	/// Catalog repository (default: scorecard)
	#[arg(long)]
	pub repo: Option<String>,

	/// Branch to list (default: main)
	#[arg(long)]
	pub branch: Option<String>,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}

impl Args {
	pub fn source(&self) -> CatalogSource {
		let defaults = CatalogSource::default();
		CatalogSource {
			owner: self.owner.clone().unwrap_or(defaults.owner),
			repo: self.repo.clone().unwrap_or(defaults.repo),
			branch: self.branch.clone().unwrap_or(defaults.branch),
			..CatalogSource::default()
		}
	}
}
