//! Rewrites the builtin probe schema from the live scorecard catalog.
//!
//! Reads `GITHUB_TOKEN` once; without it discovery runs unauthenticated.
//! On failure the diagnostic is printed and the existing file is kept.

mod cli;

use clap::Parser;
use cli::Args;
use tracing::info;
use weighsum_catalog::HttpFetcher;
use weighsum_codegen::{TOKEN_VAR, credentials_from_env, generate};

fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	setup_tracing(args.verbose);

	let credentials = credentials_from_env(std::env::var(TOKEN_VAR));

	let source = args.source();
	info!(%source, output = %args.output.display(), "regenerating probe schema");
	generate(&HttpFetcher::new(), &source, &credentials, &args.output)?;
	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("weighsum_catalog=debug,weighsum_codegen=debug,info")
		} else {
			EnvFilter::new("info")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(verbose)
		.init();
}
