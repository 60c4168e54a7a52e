//! Naming conventions for everything the synthesizer derives.
//!
//! Declared type names are trusted as-is (the parser only yields valid
//! GraphQL names); derived names are plain concatenations so two runs can
//! never disagree on spelling.

use crate::synth::decl::ScalarKind;

/// Name of the shared direction enum referenced by every sort input.
pub(crate) const SORT_DIRECTION: &str = "SortDirection";

/// Singular fetch-by-id query: `User` -> `user`.
pub(crate) fn fetch_query_name(type_name: &str) -> String {
  type_name.to_lowercase()
}

/// Plural list query: `User` -> `users`.
pub(crate) fn list_query_name(type_name: &str) -> String {
  format!("{}s", type_name.to_lowercase())
}

pub(crate) fn create_mutation_name(type_name: &str) -> String {
  format!("create{type_name}")
}

pub(crate) fn update_mutation_name(type_name: &str) -> String {
  format!("update{type_name}")
}

pub(crate) fn delete_mutation_name(type_name: &str) -> String {
  format!("delete{type_name}")
}

pub(crate) fn filter_input_name(type_name: &str) -> String {
  format!("{type_name}FilterInput")
}

pub(crate) fn sort_input_name(type_name: &str) -> String {
  format!("{type_name}SortInput")
}

pub(crate) fn create_input_name(type_name: &str) -> String {
  format!("{type_name}CreateInput")
}

pub(crate) fn update_input_name(type_name: &str) -> String {
  format!("{type_name}UpdateInput")
}

/// Shared per-kind filter input: `IDFilterInput`, `IntFilterInput`, ...
pub(crate) fn scalar_filter_name(kind: ScalarKind) -> String {
  format!("{kind}FilterInput")
}
