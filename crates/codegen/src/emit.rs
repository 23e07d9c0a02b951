//! Rendering the probe schema as Rust source.

use std::fmt::Write;

const HEADER: &str = "\
//! Probe identifiers discovered from the scorecard probe catalog.
//!
//! Generated by `weighsum-codegen`. Do not edit by hand; rerun the generator instead.

/// Probe identifiers in catalog discovery order.
pub const PROBE_NAMES: &[&str] = &[
";

/// Source of `probes.rs` listing `names` in order.
pub fn probe_module(names: &[String]) -> String {
	let mut out = String::from(HEADER);
	for name in names {
		// Debug formatting yields an escaped string literal.
		let _ = writeln!(out, "\t{name:?},");
	}
	out.push_str("];\n");
	out
}
