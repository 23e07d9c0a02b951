//! Sparse probe-weight metrics.
//!
//! A [`Metric`] holds one optional `f32` weight for every field of a
//! [`Schema`]. The builtin schema lists the scorecard probes found by
//! `weighsum-codegen` (see [`probes`]); any other ordered set of names works
//! too.
//!
//! - [`Metric::deserialize`] reads a flat TOML document. Unknown names fail,
//!   and a weight of exactly zero is stored as absent.
//! - [`Metric::render`] writes TOML, omitting absent weights.
//! - [`Metric::probes`] iterates the present `(name, weight)` pairs in schema
//!   order.
//! - [`score`] weighs scorecard probe findings with a metric.

pub mod error;
mod metric;
pub mod probes;
mod schema;
pub mod score;

pub use error::{DeserializeError, MetricError, Result, SchemaError};
pub use metric::Metric;
pub use schema::{FieldName, Schema};
