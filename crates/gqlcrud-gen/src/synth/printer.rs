//! SDL rendering for an assembled schema value.
//!
//! Output order follows the schema value: echoed object types, the sort
//! direction enum, shared scalar filter inputs, per-type derived inputs,
//! then Query and Mutation. Definitions with zero fields render without a
//! fields block, which the SDL grammar allows.

use itertools::Itertools;

use crate::synth::{
  decl::TypeDecl,
  schema::{EnumDef, InputDef, OperationDef, SchemaDef},
};

pub(crate) struct SchemaPrinter;

impl SchemaPrinter {
  /// Renders the schema to SDL text.
  pub(crate) fn render(schema: &SchemaDef) -> String {
    let mut out = String::new();

    Self::section(&mut out, "# Object Types", &schema.objects, Self::render_object);
    Self::section(&mut out, "# Sort Direction", &schema.enums, Self::render_enum);
    Self::section(
      &mut out,
      "# Scalar Filter Inputs",
      &schema.scalar_filters,
      Self::render_input,
    );
    Self::section(&mut out, "# Derived Inputs", &schema.inputs, Self::render_input);

    if !schema.query.is_empty() {
      out.push_str("# Root Operations\n");
      out.push_str(&Self::render_root("Query", &schema.query));
      out.push('\n');
      out.push_str(&Self::render_root("Mutation", &schema.mutation));
    }

    out
  }

  /// Renders with the auto-generated file header naming the input source.
  pub(crate) fn render_with_header(schema: &SchemaDef, source: &str) -> String {
    format!(
      "# AUTO-GENERATED SCHEMA - DO NOT EDIT!\n#\n# Source: {source}\n# Generated by `gqlcrud-gen`\n\n{}",
      Self::render(schema)
    )
  }

  fn section<T>(out: &mut String, heading: &str, items: &[T], render: impl Fn(&T) -> String) {
    if items.is_empty() {
      return;
    }
    out.push_str(heading);
    out.push('\n');
    for item in items {
      out.push_str(&render(item));
      out.push('\n');
    }
  }

  fn render_object(decl: &TypeDecl) -> String {
    if decl.fields.is_empty() {
      return format!("type {}\n", decl.name);
    }
    let fields = decl
      .fields
      .iter()
      .map(|field| format!("  {}: {}", field.name, field.ty))
      .join("\n");
    format!("type {} {{\n{fields}\n}}\n", decl.name)
  }

  fn render_input(input: &InputDef) -> String {
    if input.fields.is_empty() {
      return format!("input {}\n", input.name);
    }
    let fields = input
      .fields
      .iter()
      .map(|field| format!("  {}: {}", field.name, field.ty))
      .join("\n");
    format!("input {} {{\n{fields}\n}}\n", input.name)
  }

  fn render_enum(def: &EnumDef) -> String {
    let values = def.values.iter().map(|value| format!("  {value}")).join("\n");
    format!("enum {} {{\n{values}\n}}\n", def.name)
  }

  fn render_root(name: &str, operations: &[OperationDef]) -> String {
    if operations.is_empty() {
      return format!("type {name}\n");
    }
    let fields = operations
      .iter()
      .map(|op| {
        let args = op.args.iter().map(|arg| format!("{}: {}", arg.name, arg.ty)).join(", ");
        format!("  {}({args}): {}", op.name, op.returns)
      })
      .join("\n");
    format!("type {name} {{\n{fields}\n}}\n")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::synth::{
    decl::{FieldDecl, ScalarKind, TypeDocument, TypeRef},
    metrics::SynthesisStats,
    synthesizer::Synthesizer,
  };

  fn user_schema() -> SchemaDef {
    let user = TypeDecl::new(
      "User",
      vec![
        FieldDecl::new("id", TypeRef::scalar(ScalarKind::Id).required()),
        FieldDecl::new("name", TypeRef::scalar(ScalarKind::String).required()),
        FieldDecl::new("age", TypeRef::scalar(ScalarKind::Int).required()),
      ],
    );
    let mut stats = SynthesisStats::default();
    Synthesizer::new(vec![TypeDocument::new("user.graphql", vec![user])])
      .synthesize(&mut stats)
      .unwrap()
  }

  #[test]
  fn test_rendered_object_type() {
    let sdl = SchemaPrinter::render(&user_schema());
    assert!(sdl.contains("type User {\n  id: ID!\n  name: String!\n  age: Int!\n}\n"));
  }

  #[test]
  fn test_rendered_root_operations() {
    let sdl = SchemaPrinter::render(&user_schema());
    assert!(sdl.contains("  user(id: ID!): User!\n"));
    assert!(sdl.contains("  users(limit: Int, offset: Int, filter: UserFilterInput, sort: UserSortInput): [User!]!\n"));
    assert!(sdl.contains("  createUser(input: UserCreateInput!): User!\n"));
    assert!(sdl.contains("  updateUser(input: UserUpdateInput!): User!\n"));
    assert!(sdl.contains("  deleteUser(id: ID!): User!\n"));
  }

  #[test]
  fn test_rendered_derived_inputs() {
    let sdl = SchemaPrinter::render(&user_schema());
    assert!(sdl.contains("input UserFilterInput {\n  id: IDFilterInput\n  name: StringFilterInput\n  age: IntFilterInput\n}\n"));
    assert!(sdl.contains("input UserUpdateInput {\n  id: ID!\n  name: String\n  age: Int\n}\n"));
    assert!(sdl.contains("input UserCreateInput {\n  name: String!\n  age: Int!\n}\n"));
    assert!(sdl.contains("enum SortDirection {\n  ASC\n  DESC\n}\n"));
  }

  #[test]
  fn test_empty_input_renders_without_fields_block() {
    let input = InputDef::new("MarkerFilterInput", Vec::new());
    assert_eq!(SchemaPrinter::render_input(&input), "input MarkerFilterInput\n");
  }

  #[test]
  fn test_header_names_the_source() {
    let sdl = SchemaPrinter::render_with_header(&user_schema(), "types/user.graphql");
    assert!(sdl.starts_with("# AUTO-GENERATED SCHEMA - DO NOT EDIT!\n"));
    assert!(sdl.contains("# Source: types/user.graphql\n"));
    assert!(sdl.contains("# Generated by `gqlcrud-gen`\n"));
  }

  #[test]
  fn test_empty_schema_renders_empty() {
    let mut stats = SynthesisStats::default();
    let schema = Synthesizer::new(Vec::new()).synthesize(&mut stats).unwrap();
    assert_eq!(SchemaPrinter::render(&schema), "");
  }
}
