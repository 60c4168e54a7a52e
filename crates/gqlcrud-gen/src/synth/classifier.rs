use crate::synth::{
  decl::{DeclaredType, FieldDecl, ScalarKind, TypeDecl, TypeRef},
  errors::SynthesisError,
  merger::TypeMap,
};

/// Closed classification of a declared field, decided once per field and
/// reused by every deriver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FieldClass {
  /// The type's non-null ID primary-lookup field.
  Identifier,
  Scalar(ScalarKind),
  Reference(String),
  List(Box<FieldClass>),
}

impl FieldClass {
  pub(crate) fn scalar_kind(&self) -> Option<ScalarKind> {
    match self {
      FieldClass::Identifier => Some(ScalarKind::Id),
      FieldClass::Scalar(kind) => Some(*kind),
      FieldClass::Reference(_) | FieldClass::List(_) => None,
    }
  }
}

/// A type declaration with its classification computed up front: the
/// resolved identifier field plus one `FieldClass` per field, in field
/// order.
#[derive(Debug, Clone)]
pub(crate) struct ClassifiedType<'a> {
  pub(crate) decl: &'a TypeDecl,
  pub(crate) identifier: &'a str,
  pub(crate) classes: Vec<FieldClass>,
}

impl<'a> ClassifiedType<'a> {
  pub(crate) fn fields(&self) -> impl Iterator<Item = (&'a FieldDecl, &FieldClass)> {
    self.decl.fields.iter().zip(self.classes.iter())
  }
}

/// Inspects fields of the merged type map and classifies them.
pub(crate) struct FieldClassifier<'a> {
  types: &'a TypeMap,
}

impl<'a> FieldClassifier<'a> {
  pub(crate) fn new(types: &'a TypeMap) -> Self {
    Self { types }
  }

  /// Resolves the identifier field of `decl`: the single field typed as
  /// non-null `ID`. Zero or several candidates abort synthesis; ambiguity
  /// is never auto-resolved.
  pub(crate) fn resolve_identifier(&self, decl: &'a TypeDecl) -> Result<&'a str, SynthesisError> {
    let candidates: Vec<&FieldDecl> = decl.fields.iter().filter(|field| field.ty.is_non_null_id()).collect();

    match candidates.as_slice() {
      [field] => Ok(&field.name),
      found => Err(SynthesisError::MissingIdentifier {
        type_name: decl.name.clone(),
        found: found.len(),
      }),
    }
  }

  pub(crate) fn classify(&self, decl: &TypeDecl, field: &FieldDecl) -> Result<FieldClass, SynthesisError> {
    if field.ty.is_non_null_id() {
      return Ok(FieldClass::Identifier);
    }
    self.classify_ref(decl, field, &field.ty)
  }

  fn classify_ref(&self, decl: &TypeDecl, field: &FieldDecl, ty: &TypeRef) -> Result<FieldClass, SynthesisError> {
    match &ty.ty {
      DeclaredType::Named(name) => {
        if let Some(kind) = ScalarKind::from_name(name) {
          Ok(FieldClass::Scalar(kind))
        } else if self.types.contains_key(name) {
          Ok(FieldClass::Reference(name.clone()))
        } else {
          Err(SynthesisError::UnsupportedFieldKind {
            type_name: decl.name.clone(),
            field_name: field.name.clone(),
            type_ref: field.ty.to_string(),
          })
        }
      }
      DeclaredType::List(element) => {
        let inner = self.classify_ref(decl, field, element)?;
        Ok(FieldClass::List(Box::new(inner)))
      }
    }
  }

  /// Classifies the entire type in one pass: identifier resolution first,
  /// then one `FieldClass` per field.
  pub(crate) fn classify_type(&self, decl: &'a TypeDecl) -> Result<ClassifiedType<'a>, SynthesisError> {
    let identifier = self.resolve_identifier(decl)?;
    let classes = decl
      .fields
      .iter()
      .map(|field| self.classify(decl, field))
      .collect::<Result<Vec<_>, _>>()?;

    Ok(ClassifiedType {
      decl,
      identifier,
      classes,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::synth::decl::TypeRef;

  fn type_map(decls: Vec<TypeDecl>) -> TypeMap {
    decls.into_iter().map(|decl| (decl.name.clone(), decl)).collect()
  }

  fn user() -> TypeDecl {
    TypeDecl::new(
      "User",
      vec![
        FieldDecl::new("id", TypeRef::scalar(ScalarKind::Id).required()),
        FieldDecl::new("name", TypeRef::scalar(ScalarKind::String).required()),
        FieldDecl::new("age", TypeRef::scalar(ScalarKind::Int).required()),
      ],
    )
  }

  #[test]
  fn test_resolve_identifier() {
    let map = type_map(vec![user()]);
    let classifier = FieldClassifier::new(&map);
    assert_eq!(classifier.resolve_identifier(&map["User"]).unwrap(), "id");
  }

  #[test]
  fn test_missing_identifier_names_the_type() {
    let decl = TypeDecl::new(
      "Draft",
      vec![FieldDecl::new("title", TypeRef::scalar(ScalarKind::String))],
    );
    let map = type_map(vec![decl]);
    let classifier = FieldClassifier::new(&map);
    let err = classifier.resolve_identifier(&map["Draft"]).unwrap_err();
    assert_eq!(
      err,
      SynthesisError::MissingIdentifier {
        type_name: "Draft".to_string(),
        found: 0,
      }
    );
  }

  #[test]
  fn test_two_id_fields_is_ambiguous() {
    let decl = TypeDecl::new(
      "Pair",
      vec![
        FieldDecl::new("left", TypeRef::scalar(ScalarKind::Id).required()),
        FieldDecl::new("right", TypeRef::scalar(ScalarKind::Id).required()),
      ],
    );
    let map = type_map(vec![decl]);
    let classifier = FieldClassifier::new(&map);
    let err = classifier.resolve_identifier(&map["Pair"]).unwrap_err();
    assert_eq!(
      err,
      SynthesisError::MissingIdentifier {
        type_name: "Pair".to_string(),
        found: 2,
      }
    );
  }

  #[test]
  fn test_nullable_id_is_not_an_identifier() {
    let decl = TypeDecl::new("Ghost", vec![FieldDecl::new("id", TypeRef::scalar(ScalarKind::Id))]);
    let map = type_map(vec![decl]);
    let classifier = FieldClassifier::new(&map);
    assert!(classifier.resolve_identifier(&map["Ghost"]).is_err());
  }

  #[test]
  fn test_classify_variants() {
    let author = TypeDecl::new(
      "Author",
      vec![FieldDecl::new("id", TypeRef::scalar(ScalarKind::Id).required())],
    );
    let post = TypeDecl::new(
      "Post",
      vec![
        FieldDecl::new("id", TypeRef::scalar(ScalarKind::Id).required()),
        FieldDecl::new("views", TypeRef::scalar(ScalarKind::Int)),
        FieldDecl::new("author", TypeRef::named("Author").required()),
        FieldDecl::new("tags", TypeRef::list(TypeRef::scalar(ScalarKind::String).required()).required()),
      ],
    );
    let map = type_map(vec![author, post]);
    let classifier = FieldClassifier::new(&map);
    let classified = classifier.classify_type(&map["Post"]).unwrap();

    assert_eq!(classified.identifier, "id");
    assert_eq!(classified.classes[0], FieldClass::Identifier);
    assert_eq!(classified.classes[1], FieldClass::Scalar(ScalarKind::Int));
    assert_eq!(classified.classes[2], FieldClass::Reference("Author".to_string()));
    assert_eq!(
      classified.classes[3],
      FieldClass::List(Box::new(FieldClass::Scalar(ScalarKind::String)))
    );
  }

  #[test]
  fn test_unknown_named_type_is_unsupported() {
    let decl = TypeDecl::new(
      "Event",
      vec![
        FieldDecl::new("id", TypeRef::scalar(ScalarKind::Id).required()),
        FieldDecl::new("when", TypeRef::named("DateTime").required()),
      ],
    );
    let map = type_map(vec![decl]);
    let classifier = FieldClassifier::new(&map);
    let err = classifier.classify_type(&map["Event"]).unwrap_err();
    assert_eq!(
      err,
      SynthesisError::UnsupportedFieldKind {
        type_name: "Event".to_string(),
        field_name: "when".to_string(),
        type_ref: "DateTime!".to_string(),
      }
    );
  }

  #[test]
  fn test_list_of_id_is_not_an_identifier() {
    let decl = TypeDecl::new(
      "Bundle",
      vec![
        FieldDecl::new("id", TypeRef::scalar(ScalarKind::Id).required()),
        FieldDecl::new("refs", TypeRef::list(TypeRef::scalar(ScalarKind::Id).required()).required()),
      ],
    );
    let map = type_map(vec![decl]);
    let classifier = FieldClassifier::new(&map);
    let classified = classifier.classify_type(&map["Bundle"]).unwrap();
    assert_eq!(classified.identifier, "id");
    assert_eq!(
      classified.classes[1],
      FieldClass::List(Box::new(FieldClass::Scalar(ScalarKind::Id)))
    );
  }
}
