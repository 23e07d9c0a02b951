use super::*;

#[test]
fn schema_keeps_insertion_order() {
	let schema = Schema::new(["Code-Review", "Binary-Artifacts", "archived"]).unwrap();
	let names: Vec<&str> = schema.iter().map(FieldName::as_str).collect();
	assert_eq!(names, ["Code-Review", "Binary-Artifacts", "archived"]);
	assert_eq!(schema.position("archived"), Some(2));
	assert_eq!(schema.field(0).map(FieldName::as_str), Some("Code-Review"));
}

#[test]
fn schema_rejects_duplicates() {
	let err = Schema::new(["archived", "fuzzed", "archived"]).unwrap_err();
	assert_eq!(err, SchemaError::DuplicateField("archived".into()));
}

#[test]
fn schema_rejects_empty_names() {
	assert_eq!(Schema::new(["archived", ""]).unwrap_err(), SchemaError::EmptyName);
	assert_eq!(FieldName::new("").unwrap_err(), SchemaError::EmptyName);
}

#[test]
fn lookups_are_case_sensitive() {
	let schema = Schema::new(["archived"]).unwrap();
	assert!(schema.contains("archived"));
	assert!(!schema.contains("Archived"));
	assert_eq!(schema.position("ARCHIVED"), None);
}

#[test]
fn empty_schema_is_valid() {
	let schema = Schema::new(Vec::<String>::new()).unwrap();
	assert!(schema.is_empty());
	assert_eq!(schema.len(), 0);
}

#[test]
fn builtin_schema_has_one_slot_per_generated_probe() {
	let schema = Schema::builtin();
	assert_eq!(schema.len(), PROBE_NAMES.len());
	for (field, name) in schema.iter().zip(PROBE_NAMES) {
		assert_eq!(field.as_str(), *name);
	}
}

#[test]
fn generated_names_form_a_valid_schema() {
	assert_eq!(Schema::new(PROBE_NAMES.iter().copied()).map(|schema| schema.len()), Ok(PROBE_NAMES.len()));
}

#[test]
fn builtin_schema_is_shared() {
	assert!(Arc::ptr_eq(&Schema::builtin(), &Schema::builtin()));
}
