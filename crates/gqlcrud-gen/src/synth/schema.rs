//! The derived schema value: everything synthesis produces, ready for the
//! printer. Declared object types are echoed through as `TypeDecl`s; input
//! fields reuse `FieldDecl` since they are the same name/type/nullability
//! triple.

use crate::synth::decl::{FieldDecl, TypeDecl, TypeRef};

/// A derived input object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InputDef {
  pub(crate) name: String,
  pub(crate) fields: Vec<FieldDecl>,
}

impl InputDef {
  pub(crate) fn new(name: impl Into<String>, fields: Vec<FieldDecl>) -> Self {
    Self {
      name: name.into(),
      fields,
    }
  }
}

/// A derived enum type (the sort direction enum).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EnumDef {
  pub(crate) name: String,
  pub(crate) values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ArgumentDef {
  pub(crate) name: String,
  pub(crate) ty: TypeRef,
}

impl ArgumentDef {
  pub(crate) fn new(name: impl Into<String>, ty: TypeRef) -> Self {
    Self { name: name.into(), ty }
  }
}

/// One root operation: name, argument list, return type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OperationDef {
  pub(crate) name: String,
  pub(crate) args: Vec<ArgumentDef>,
  pub(crate) returns: TypeRef,
}

impl OperationDef {
  pub(crate) fn new(name: impl Into<String>, args: Vec<ArgumentDef>, returns: TypeRef) -> Self {
    Self {
      name: name.into(),
      args,
      returns,
    }
  }
}

/// The assembled schema: root Query and Mutation operations plus every
/// auxiliary type reachable from them, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SchemaDef {
  pub(crate) objects: Vec<TypeDecl>,
  pub(crate) enums: Vec<EnumDef>,
  /// Shared per-scalar-kind filter inputs, only the kinds actually used.
  pub(crate) scalar_filters: Vec<InputDef>,
  /// Per-type filter/sort/create/update inputs, in declaration order.
  pub(crate) inputs: Vec<InputDef>,
  pub(crate) query: Vec<OperationDef>,
  pub(crate) mutation: Vec<OperationDef>,
}
