//! Sort input derivation: one `<T>SortInput` per type, mapping every
//! non-identifier field to an optional `SortDirection`. Whether a caller
//! supplies several directions at once is a query-time concern; derivation
//! performs no conflict validation.

use crate::synth::{
  classifier::{ClassifiedType, FieldClass},
  decl::{FieldDecl, TypeRef},
  naming,
  schema::{EnumDef, InputDef},
};

/// The shared direction enum every sort input references.
pub(crate) fn sort_direction_enum() -> EnumDef {
  EnumDef {
    name: naming::SORT_DIRECTION.to_string(),
    values: vec!["ASC".to_string(), "DESC".to_string()],
  }
}

/// Builds `<T>SortInput`. A type with only an identifier yields an empty
/// input, which is valid.
pub(crate) fn derive_sort_input(classified: &ClassifiedType<'_>) -> InputDef {
  let fields = classified
    .fields()
    .filter(|(_, class)| **class != FieldClass::Identifier)
    .map(|(field, _)| FieldDecl::new(field.name.clone(), TypeRef::named(naming::SORT_DIRECTION)))
    .collect();

  InputDef::new(naming::sort_input_name(&classified.decl.name), fields)
}
