//! Weighing scorecard probe findings with a [`Metric`].
//!
//! Only probes the metric weighs take part. The total score maps the weighted
//! sum of `True` outcomes onto `0..=NORM`, where `0` is the worst and `NORM`
//! the best sum reachable with the given findings.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::metric::Metric;

/// Upper bound of a total score.
pub const NORM: f32 = 10.0;

/// Probe output of one scorecard run, as emitted by `scorecard --format probe`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProbeResult {
	pub date: NaiveDate,
	pub repo: Repo,
	pub findings: Vec<ProbeFinding>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Repo {
	pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProbeFinding {
	pub probe: String,
	pub outcome: ProbeOutcome,
}

/// Outcome of one probe finding. Only `True` and `False` contribute to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ProbeOutcome {
	True,
	False,
	NotAvailable,
	Error,
	NotSupported,
	NotApplicable,
}

impl ProbeOutcome {
	pub fn is_boolean(self) -> bool {
		matches!(self, Self::True | Self::False)
	}
}

impl ProbeResult {
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		serde_json::from_str(json)
	}

	/// Total score of this run under `metric`.
	pub fn score(&self, metric: &Metric) -> f32 {
		total_score(&weighed_findings(&self.findings, metric))
	}
}

/// A finding paired with the weight its probe carries in a metric.
#[derive(Debug, Clone, PartialEq)]
pub struct WeighedFinding {
	pub probe: String,
	pub weight: f32,
	pub outcome: ProbeOutcome,
}

/// Findings of weighed probes, heaviest (by absolute weight) first.
///
/// Findings for probes the metric leaves absent are dropped.
pub fn weighed_findings(findings: &[ProbeFinding], metric: &Metric) -> Vec<WeighedFinding> {
	let mut weighed: Vec<WeighedFinding> = findings
		.iter()
		.filter_map(|finding| {
			metric.weight(&finding.probe).map(|weight| WeighedFinding {
				probe: finding.probe.clone(),
				weight,
				outcome: finding.outcome,
			})
		})
		.collect();
	weighed.sort_by(|a, b| b.weight.abs().total_cmp(&a.weight.abs()));
	weighed
}

/// Weighted score normalized to `0..=NORM`.
///
/// Non-boolean outcomes are ignored. Returns `0` when there is nothing to
/// normalize against.
pub fn total_score(findings: &[WeighedFinding]) -> f32 {
	let mut min = 0.0;
	let mut max = 0.0;
	let mut actual = 0.0;
	for finding in findings.iter().filter(|finding| finding.outcome.is_boolean()) {
		if finding.weight < 0.0 {
			min += finding.weight;
		} else {
			max += finding.weight;
		}
		if finding.outcome == ProbeOutcome::True {
			actual += finding.weight;
		}
	}
	let range = max - min;
	if range <= 0.0 {
		return 0.0;
	}
	NORM * ((actual - min) / range)
}

/// Per-probe summary of weighed findings.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulatedOutcome {
	pub probe: String,
	pub weight: f32,
	/// Number of `True` outcomes; `None` once a non-boolean outcome was seen.
	pub true_outcomes: Option<usize>,
}

/// Folds findings into one entry per probe, sorted by probe name.
///
/// A `False` outcome resets the count to zero.
pub fn cumulated_outcomes(findings: &[WeighedFinding]) -> Vec<CumulatedOutcome> {
	let mut by_probe: BTreeMap<&str, (f32, Option<usize>)> = BTreeMap::new();
	for finding in findings {
		let entry = by_probe.entry(&finding.probe).or_insert((finding.weight, None));
		entry.1 = match finding.outcome {
			ProbeOutcome::False => Some(0),
			ProbeOutcome::True => Some(entry.1.map_or(1, |count| count + 1)),
			_ => None,
		};
	}
	by_probe
		.into_iter()
		.map(|(probe, (weight, true_outcomes))| CumulatedOutcome {
			probe: probe.to_string(),
			weight,
			true_outcomes,
		})
		.collect()
}
