use indexmap::IndexMap;

use crate::synth::{
  decl::{TypeDecl, TypeDocument},
  errors::SynthesisError,
};

/// Merged declaration map, keyed by type name in declaration order.
pub(crate) type TypeMap = IndexMap<String, TypeDecl>;

/// Combines independently-parsed declaration documents into one type map.
///
/// Identical redeclarations are deduplicated silently, so merging is
/// idempotent and commutative over non-conflicting documents. A type name
/// redeclared with a different field set is a hard error naming both
/// source documents.
pub(crate) fn merge_documents(documents: &[TypeDocument]) -> Result<TypeMap, SynthesisError> {
  let mut merged = TypeMap::new();
  let mut origins: IndexMap<String, String> = IndexMap::new();

  for document in documents {
    for decl in &document.types {
      match merged.get(&decl.name) {
        None => {
          origins.insert(decl.name.clone(), document.source.clone());
          merged.insert(decl.name.clone(), decl.clone());
        }
        Some(existing) if existing == decl => {}
        Some(_) => {
          return Err(SynthesisError::DuplicateType {
            name: decl.name.clone(),
            first_source: origins[&decl.name].clone(),
            second_source: document.source.clone(),
          });
        }
      }
    }
  }

  Ok(merged)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::synth::decl::{FieldDecl, ScalarKind, TypeRef};

  fn user_decl() -> TypeDecl {
    TypeDecl::new(
      "User",
      vec![
        FieldDecl::new("id", TypeRef::scalar(ScalarKind::Id).required()),
        FieldDecl::new("name", TypeRef::scalar(ScalarKind::String).required()),
      ],
    )
  }

  fn post_decl() -> TypeDecl {
    TypeDecl::new(
      "Post",
      vec![
        FieldDecl::new("id", TypeRef::scalar(ScalarKind::Id).required()),
        FieldDecl::new("title", TypeRef::scalar(ScalarKind::String)),
      ],
    )
  }

  #[test]
  fn test_merge_is_idempotent() {
    let doc = TypeDocument::new("user.graphql", vec![user_decl()]);
    let once = merge_documents(std::slice::from_ref(&doc)).unwrap();
    let twice = merge_documents(&[doc.clone(), doc]).unwrap();
    assert_eq!(once, twice);
  }

  #[test]
  fn test_merge_is_commutative_over_non_conflicting_documents() {
    let a = TypeDocument::new("a.graphql", vec![user_decl()]);
    let b = TypeDocument::new("b.graphql", vec![post_decl()]);
    let ab = merge_documents(&[a.clone(), b.clone()]).unwrap();
    let ba = merge_documents(&[b, a]).unwrap();
    // Same content; only insertion order differs.
    assert_eq!(ab.len(), ba.len());
    for (name, decl) in &ab {
      assert_eq!(ba.get(name), Some(decl));
    }
  }

  #[test]
  fn test_conflicting_redeclaration_is_an_error() {
    let a = TypeDocument::new("a.graphql", vec![user_decl()]);
    let conflicting = TypeDecl::new(
      "User",
      vec![FieldDecl::new("id", TypeRef::scalar(ScalarKind::Id).required())],
    );
    let b = TypeDocument::new("b.graphql", vec![conflicting]);

    let err = merge_documents(&[a, b]).unwrap_err();
    assert_eq!(
      err,
      SynthesisError::DuplicateType {
        name: "User".to_string(),
        first_source: "a.graphql".to_string(),
        second_source: "b.graphql".to_string(),
      }
    );
  }

  #[test]
  fn test_identical_redeclaration_merges_silently() {
    let a = TypeDocument::new("a.graphql", vec![user_decl()]);
    let b = TypeDocument::new("b.graphql", vec![user_decl(), post_decl()]);
    let merged = merge_documents(&[a, b]).unwrap();
    assert_eq!(merged.len(), 2);
  }

  #[test]
  fn test_conflict_within_a_single_document() {
    let conflicting = TypeDecl::new("User", vec![]);
    let doc = TypeDocument::new("a.graphql", vec![user_decl(), conflicting]);
    let err = merge_documents(&[doc]).unwrap_err();
    assert!(matches!(err, SynthesisError::DuplicateType { ref name, .. } if name == "User"));
  }

  #[test]
  fn test_merge_preserves_declaration_order() {
    let a = TypeDocument::new("a.graphql", vec![post_decl()]);
    let b = TypeDocument::new("b.graphql", vec![user_decl()]);
    let merged = merge_documents(&[a, b]).unwrap();
    let names: Vec<&str> = merged.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["Post", "User"]);
  }
}
