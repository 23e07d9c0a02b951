//! Field names and the ordered schema that fixes a metric's shape.

use std::borrow::Borrow;
use std::fmt;
use std::sync::{Arc, LazyLock};

use indexmap::IndexSet;
use tracing::error;

use crate::error::SchemaError;
use crate::probes::PROBE_NAMES;

/// A case-sensitive probe identifier naming one weight slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldName(Box<str>);

impl FieldName {
	/// Creates a field name, rejecting the empty string.
	pub fn new(name: impl Into<Box<str>>) -> Result<Self, SchemaError> {
		let name = name.into();
		if name.is_empty() {
			return Err(SchemaError::EmptyName);
		}
		Ok(Self(name))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Borrow<str> for FieldName {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for FieldName {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for FieldName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// The ordered, duplicate-free set of field names a [`Metric`](crate::Metric) is built over.
///
/// Order is discovery order and only affects rendering. Lookups are by exact name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
	fields: IndexSet<FieldName>,
}

static BUILTIN: LazyLock<Arc<Schema>> = LazyLock::new(|| {
	let generated = Schema::new(PROBE_NAMES.iter().copied());
	debug_assert!(generated.is_ok(), "generated probe list is not a valid schema: {generated:?}");
	let schema = generated.unwrap_or_else(|err| {
		error!(%err, "generated probe list is not a valid schema; keeping the unique non-empty names");
		let fields = PROBE_NAMES
			.iter()
			.filter(|name| !name.is_empty())
			.map(|name| FieldName(Box::from(*name)))
			.collect();
		Schema { fields }
	});
	Arc::new(schema)
});

impl Schema {
	/// Builds a schema from names in order, rejecting empty or repeated names.
	pub fn new<I, S>(names: I) -> Result<Self, SchemaError>
	where
		I: IntoIterator<Item = S>,
		S: Into<Box<str>>,
	{
		let mut fields = IndexSet::new();
		for name in names {
			let name = FieldName::new(name)?;
			if fields.contains(&name) {
				return Err(SchemaError::DuplicateField(name.to_string()));
			}
			fields.insert(name);
		}
		Ok(Self { fields })
	}

	/// The schema generated from the scorecard probe catalog.
	pub fn builtin() -> Arc<Schema> {
		Arc::clone(&BUILTIN)
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.fields.contains(name)
	}

	/// Slot index of `name`, if the schema has it.
	pub fn position(&self, name: &str) -> Option<usize> {
		self.fields.get_index_of(name)
	}

	/// Field name at slot `index`.
	pub fn field(&self, index: usize) -> Option<&FieldName> {
		self.fields.get_index(index)
	}

	pub fn iter(&self) -> impl Iterator<Item = &FieldName> + '_ {
		self.fields.iter()
	}
}

#[cfg(test)]
mod tests;
