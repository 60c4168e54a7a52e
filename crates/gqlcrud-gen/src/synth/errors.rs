use thiserror::Error;

/// Synthesis failures. All are fatal for the whole invocation: there is
/// no partial-schema output, only a schema value or one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum SynthesisError {
  #[error(
    "type '{name}' is declared with conflicting field sets (first in {first_source}, again in {second_source})"
  )]
  DuplicateType {
    name: String,
    first_source: String,
    second_source: String,
  },

  #[error("type '{type_name}' must declare exactly one non-null ID field, found {found}")]
  MissingIdentifier { type_name: String, found: usize },

  #[error("derived {root} operation '{operation}' for type '{type_name}' collides with an existing operation")]
  DuplicateOperation {
    root: RootKind,
    operation: String,
    type_name: String,
  },

  #[error("field '{type_name}.{field_name}' has unsupported type '{type_ref}'")]
  UnsupportedFieldKind {
    type_name: String,
    field_name: String,
    type_ref: String,
  },
}

/// Which root-operation map a collision was detected in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub(crate) enum RootKind {
  #[strum(to_string = "Query")]
  Query,
  #[strum(to_string = "Mutation")]
  Mutation,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_errors_name_the_offender() {
    let err = SynthesisError::MissingIdentifier {
      type_name: "Draft".to_string(),
      found: 0,
    };
    assert!(err.to_string().contains("'Draft'"));
    assert!(err.to_string().contains("found 0"));

    let err = SynthesisError::UnsupportedFieldKind {
      type_name: "Post".to_string(),
      field_name: "when".to_string(),
      type_ref: "DateTime!".to_string(),
    };
    assert!(err.to_string().contains("'Post.when'"));
    assert!(err.to_string().contains("'DateTime!'"));
  }

  #[test]
  fn test_duplicate_operation_names_the_root() {
    let err = SynthesisError::DuplicateOperation {
      root: RootKind::Mutation,
      operation: "createUser".to_string(),
      type_name: "User".to_string(),
    };
    assert!(err.to_string().contains("Mutation"));
    assert!(err.to_string().contains("'createUser'"));
  }
}
