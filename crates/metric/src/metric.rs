//! The sparse weighted record: one optional weight per schema field.
//!
//! Metrics travel as flat TOML documents (`probe = weight`). Reading rejects
//! names outside the schema and stores a weight of exactly zero as absent.
//! Writing omits absent slots. The pair is lossy on purpose: `0.0` reads as
//! absent and is never written back, so a zero weight cannot round-trip.
//!
//! ```toml
//! hasBinaryArtifacts = -1.0
//! codeApproved = 0.5
//! ```

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::error::{DeserializeError, MetricError, Result};
use crate::schema::Schema;

/// Optional 32-bit weights, one slot per field of a [`Schema`].
///
/// Values are immutable once built; [`Metric::with_weight`] returns a new record.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
	schema: Arc<Schema>,
	weights: Box<[Option<f32>]>,
}

impl Metric {
	/// A metric with every slot absent.
	pub fn empty(schema: Arc<Schema>) -> Self {
		let weights = vec![None; schema.len()].into_boxed_slice();
		Self { schema, weights }
	}

	/// Returns a copy with `name` set to `weight`.
	///
	/// The weight is stored as given. Unlike [`Metric::deserialize`], an
	/// in-memory `0.0` stays present. NaN and infinities are rejected.
	pub fn with_weight(mut self, name: &str, weight: f32) -> Result<Self> {
		let slot = self
			.schema
			.position(name)
			.ok_or_else(|| MetricError::UnknownField(name.to_string()))?;
		if !weight.is_finite() {
			return Err(MetricError::InvalidValue {
				field: name.to_string(),
				weight,
			});
		}
		self.weights[slot] = Some(weight);
		Ok(self)
	}

	/// Parses a TOML metric document against `schema`.
	///
	/// Missing fields are absent. Weights equal to zero (`0`, `0.0`, `-0.0`)
	/// are absent. Names outside the schema are an error. A value TOML cannot
	/// parse is reported against its field when the line shows which one.
	pub fn deserialize(schema: &Arc<Schema>, text: &str) -> std::result::Result<Self, DeserializeError> {
		let table: toml::Table = toml::from_str(text).map_err(|err| match malformed_value(text, &err) {
			Some((field, _)) if !schema.contains(&field) => DeserializeError::UnknownField(field),
			Some((field, raw)) => DeserializeError::InvalidValue { field, raw },
			None => DeserializeError::Syntax(err),
		})?;
		let mut weights = vec![None; schema.len()].into_boxed_slice();
		for (key, value) in &table {
			let Some(slot) = schema.position(key) else {
				return Err(DeserializeError::UnknownField(key.clone()));
			};
			weights[slot] = zero_to_none(parse_weight(key, value)?);
		}
		debug!(fields = table.len(), schema = schema.len(), "deserialized metric");
		Ok(Self {
			schema: Arc::clone(schema),
			weights,
		})
	}

	/// Parses a metric that is going to be used for scoring.
	///
	/// Same as [`Metric::deserialize`], but a metric weighing nothing is rejected.
	pub fn load(schema: &Arc<Schema>, text: &str) -> Result<Self> {
		let metric = Self::deserialize(schema, text)?;
		if metric.is_empty() {
			return Err(MetricError::Empty);
		}
		Ok(metric)
	}

	/// Reads and [loads](Metric::load) a metric file.
	pub fn from_file(schema: &Arc<Schema>, path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path).map_err(|error| MetricError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		debug!(path = %path.display(), "loading metric file");
		Self::load(schema, &content)
	}

	pub fn schema(&self) -> &Arc<Schema> {
		&self.schema
	}

	/// Weight stored for `name`. `None` when absent or not in the schema.
	pub fn weight(&self, name: &str) -> Option<f32> {
		self.schema.position(name).and_then(|slot| self.weights[slot])
	}

	/// Present `(name, weight)` pairs in schema order.
	///
	/// Absent slots are skipped. The iterator borrows the metric and can be
	/// recreated any number of times.
	pub fn probes(&self) -> impl Iterator<Item = (&str, f32)> + '_ {
		self.schema
			.iter()
			.zip(self.weights.iter())
			.filter_map(|(name, weight)| weight.map(|weight| (name.as_str(), weight)))
	}

	/// True when no slot holds a weight.
	pub fn is_empty(&self) -> bool {
		self.weights.iter().all(Option::is_none)
	}

	/// TOML rendering with absent slots omitted.
	///
	/// Serializer failures are rendered as a message instead of propagated.
	pub fn render(&self) -> String {
		match toml::to_string(self) {
			Ok(toml_str) => toml_str,
			Err(err) => format!("Error serializing to TOML: {err}"),
		}
	}
}

fn parse_weight(field: &str, value: &toml::Value) -> std::result::Result<f32, DeserializeError> {
	let weight = match value {
		toml::Value::Float(float) => *float as f32,
		toml::Value::Integer(int) => *int as f32,
		_ => return Err(invalid_value(field, value)),
	};
	if !weight.is_finite() {
		return Err(invalid_value(field, value));
	}
	Ok(weight)
}

/// Recovers `(key, raw value)` when a parse error lies right of the `=` on a
/// plain `key = value` line.
fn malformed_value(text: &str, err: &toml::de::Error) -> Option<(String, String)> {
	let start = err.span()?.start.min(text.len());
	let line_start = text.get(..start)?.rfind('\n').map_or(0, |i| i + 1);
	let line_end = text.get(start..)?.find('\n').map_or(text.len(), |i| start + i);
	let line = text.get(line_start..line_end)?;
	let eq = line.find('=')?;
	if start <= line_start + eq {
		return None;
	}
	let key = line[..eq].trim();
	let key = key.strip_prefix('"').and_then(|k| k.strip_suffix('"')).unwrap_or(key);
	let raw = line[eq + 1..].split('#').next().unwrap_or_default().trim();
	if key.is_empty() || key.contains(['.', '[', ']']) || raw.is_empty() {
		return None;
	}
	Some((key.to_string(), raw.to_string()))
}

fn invalid_value(field: &str, value: &toml::Value) -> DeserializeError {
	DeserializeError::InvalidValue {
		field: field.to_string(),
		raw: value.to_string(),
	}
}

/// Zero means "not weighed". Matches both signed zeros.
fn zero_to_none(weight: f32) -> Option<f32> {
	(weight != 0.0).then_some(weight)
}

/// Widens through the shortest decimal form of the f32, so `0.7` renders as
/// `0.7` rather than `0.699999988079071`.
fn widen(weight: f32) -> f64 {
	weight.to_string().parse().unwrap_or(f64::from(weight))
}

impl Serialize for Metric {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.probes().count()))?;
		for (name, weight) in self.probes() {
			map.serialize_entry(name, &widen(weight))?;
		}
		map.end()
	}
}

impl fmt::Display for Metric {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}
