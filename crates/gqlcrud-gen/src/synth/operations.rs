//! Root operation synthesis: an additive left-to-right fold over the
//! merged type map. Each step adds five operations for one type; nothing
//! is ever removed. Derived names that collide (two types differing only
//! by case, say) abort synthesis.

use indexmap::IndexMap;

use crate::synth::{
  classifier::ClassifiedType,
  decl::{ScalarKind, TypeRef},
  errors::{RootKind, SynthesisError},
  naming,
  schema::{ArgumentDef, OperationDef},
};

/// The growing Query/Mutation operation maps.
#[derive(Debug, Default)]
pub(crate) struct RootOperations {
  query: IndexMap<String, OperationDef>,
  mutation: IndexMap<String, OperationDef>,
}

impl RootOperations {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  /// One fold step: adds the fetch, list, create, update, and delete
  /// operations for `classified`.
  pub(crate) fn add_type(&mut self, classified: &ClassifiedType<'_>) -> Result<(), SynthesisError> {
    let type_name = &classified.decl.name;
    let identifier = classified.identifier;
    let returns_one = TypeRef::named(type_name.clone()).required();
    let returns_many = TypeRef::list(returns_one.clone()).required();
    let id_arg = || ArgumentDef::new(identifier, TypeRef::scalar(ScalarKind::Id).required());

    self.add_query(
      type_name,
      OperationDef::new(naming::fetch_query_name(type_name), vec![id_arg()], returns_one.clone()),
    )?;
    self.add_query(
      type_name,
      OperationDef::new(
        naming::list_query_name(type_name),
        vec![
          ArgumentDef::new("limit", TypeRef::scalar(ScalarKind::Int)),
          ArgumentDef::new("offset", TypeRef::scalar(ScalarKind::Int)),
          ArgumentDef::new("filter", TypeRef::named(naming::filter_input_name(type_name))),
          ArgumentDef::new("sort", TypeRef::named(naming::sort_input_name(type_name))),
        ],
        returns_many,
      ),
    )?;

    self.add_mutation(
      type_name,
      OperationDef::new(
        naming::create_mutation_name(type_name),
        vec![ArgumentDef::new(
          "input",
          TypeRef::named(naming::create_input_name(type_name)).required(),
        )],
        returns_one.clone(),
      ),
    )?;
    self.add_mutation(
      type_name,
      OperationDef::new(
        naming::update_mutation_name(type_name),
        vec![ArgumentDef::new(
          "input",
          TypeRef::named(naming::update_input_name(type_name)).required(),
        )],
        returns_one.clone(),
      ),
    )?;
    self.add_mutation(
      type_name,
      OperationDef::new(naming::delete_mutation_name(type_name), vec![id_arg()], returns_one),
    )?;

    Ok(())
  }

  pub(crate) fn into_parts(self) -> (Vec<OperationDef>, Vec<OperationDef>) {
    (
      self.query.into_values().collect(),
      self.mutation.into_values().collect(),
    )
  }

  fn add_query(&mut self, type_name: &str, op: OperationDef) -> Result<(), SynthesisError> {
    Self::insert(&mut self.query, RootKind::Query, type_name, op)
  }

  fn add_mutation(&mut self, type_name: &str, op: OperationDef) -> Result<(), SynthesisError> {
    Self::insert(&mut self.mutation, RootKind::Mutation, type_name, op)
  }

  fn insert(
    map: &mut IndexMap<String, OperationDef>,
    root: RootKind,
    type_name: &str,
    op: OperationDef,
  ) -> Result<(), SynthesisError> {
    if map.contains_key(&op.name) {
      return Err(SynthesisError::DuplicateOperation {
        root,
        operation: op.name.clone(),
        type_name: type_name.to_string(),
      });
    }
    map.insert(op.name.clone(), op);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::synth::{
    classifier::FieldClassifier,
    decl::{FieldDecl, TypeDecl},
    merger::TypeMap,
  };

  fn classified_map(decls: Vec<TypeDecl>) -> TypeMap {
    decls.into_iter().map(|d| (d.name.clone(), d)).collect()
  }

  fn user() -> TypeDecl {
    TypeDecl::new(
      "User",
      vec![
        FieldDecl::new("id", TypeRef::scalar(ScalarKind::Id).required()),
        FieldDecl::new("name", TypeRef::scalar(ScalarKind::String).required()),
      ],
    )
  }

  fn signature(op: &OperationDef) -> String {
    let args: Vec<String> = op.args.iter().map(|a| format!("{}: {}", a.name, a.ty)).collect();
    format!("{}({}): {}", op.name, args.join(", "), op.returns)
  }

  #[test]
  fn test_operations_per_type() {
    let map = classified_map(vec![user()]);
    let classifier = FieldClassifier::new(&map);
    let classified = classifier.classify_type(&map["User"]).unwrap();

    let mut ops = RootOperations::new();
    ops.add_type(&classified).unwrap();
    let (query, mutation) = ops.into_parts();

    let queries: Vec<String> = query.iter().map(signature).collect();
    assert_eq!(
      queries,
      vec![
        "user(id: ID!): User!",
        "users(limit: Int, offset: Int, filter: UserFilterInput, sort: UserSortInput): [User!]!",
      ]
    );

    let mutations: Vec<String> = mutation.iter().map(signature).collect();
    assert_eq!(
      mutations,
      vec![
        "createUser(input: UserCreateInput!): User!",
        "updateUser(input: UserUpdateInput!): User!",
        "deleteUser(id: ID!): User!",
      ]
    );
  }

  #[test]
  fn test_fetch_argument_uses_declared_identifier_name() {
    let widget = TypeDecl::new(
      "Widget",
      vec![FieldDecl::new("serial", TypeRef::scalar(ScalarKind::Id).required())],
    );
    let map = classified_map(vec![widget]);
    let classifier = FieldClassifier::new(&map);
    let classified = classifier.classify_type(&map["Widget"]).unwrap();

    let mut ops = RootOperations::new();
    ops.add_type(&classified).unwrap();
    let (query, mutation) = ops.into_parts();

    assert_eq!(signature(&query[0]), "widget(serial: ID!): Widget!");
    assert_eq!(signature(&mutation[2]), "deleteWidget(serial: ID!): Widget!");
  }

  #[test]
  fn test_case_colliding_types_are_rejected() {
    let upper = user();
    let lower = TypeDecl::new(
      "USER",
      vec![FieldDecl::new("id", TypeRef::scalar(ScalarKind::Id).required())],
    );
    let map = classified_map(vec![upper, lower]);
    let classifier = FieldClassifier::new(&map);

    let mut ops = RootOperations::new();
    ops.add_type(&classifier.classify_type(&map["User"]).unwrap()).unwrap();
    let err = ops
      .add_type(&classifier.classify_type(&map["USER"]).unwrap())
      .unwrap_err();

    assert_eq!(
      err,
      SynthesisError::DuplicateOperation {
        root: RootKind::Query,
        operation: "user".to_string(),
        type_name: "USER".to_string(),
      }
    );
  }

  #[test]
  fn test_fold_is_additive_across_types() {
    let post = TypeDecl::new(
      "Post",
      vec![FieldDecl::new("id", TypeRef::scalar(ScalarKind::Id).required())],
    );
    let map = classified_map(vec![user(), post]);
    let classifier = FieldClassifier::new(&map);

    let mut ops = RootOperations::new();
    for decl in map.values() {
      ops.add_type(&classifier.classify_type(decl).unwrap()).unwrap();
    }
    let (query, mutation) = ops.into_parts();
    assert_eq!(query.len(), 4);
    assert_eq!(mutation.len(), 6);
    // Declaration order is preserved across fold steps.
    assert_eq!(query[0].name, "user");
    assert_eq!(query[2].name, "post");
  }
}
