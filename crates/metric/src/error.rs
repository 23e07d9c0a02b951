//! Error types for schemas, metric parsing and metric files.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a [`Schema`](crate::Schema).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
	/// A field name was the empty string.
	#[error("field names must not be empty")]
	EmptyName,

	/// The same field name appeared twice.
	#[error("duplicate field name: '{0}'")]
	DuplicateField(String),
}

/// Errors raised while deserializing a metric document.
#[derive(Debug, Error)]
pub enum DeserializeError {
	/// The document names a field the schema does not know.
	#[error("unknown field: '{0}'")]
	UnknownField(String),

	/// A field's value is not a finite 32-bit float.
	#[error("invalid value for '{field}': {raw}")]
	InvalidValue {
		/// Field whose value was rejected.
		field: String,
		/// The offending value as written in TOML.
		raw: String,
	},

	/// The document is not valid TOML.
	#[error("TOML parse error: {0}")]
	Syntax(#[from] toml::de::Error),
}

/// Errors raised by metric construction and metric files.
#[derive(Debug, Error)]
pub enum MetricError {
	/// The document could not be deserialized.
	#[error(transparent)]
	Deserialize(#[from] DeserializeError),

	/// A weight was assigned to a field outside the schema.
	#[error("unknown field: '{0}'")]
	UnknownField(String),

	/// A weight was NaN or infinite.
	#[error("invalid weight for '{field}': {weight}")]
	InvalidValue {
		/// Field the weight was meant for.
		field: String,
		/// The rejected weight.
		weight: f32,
	},

	/// The metric does not weigh a single probe.
	#[error("metric needs to contain at least one probe")]
	Empty,

	/// Reading a metric file failed.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}

/// Result type for metric operations.
pub type Result<T> = std::result::Result<T, MetricError>;
