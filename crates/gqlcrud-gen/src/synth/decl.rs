use strum::Display;

/// The five scalar leaf kinds a declaration may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub(crate) enum ScalarKind {
  #[strum(to_string = "ID")]
  Id,
  #[strum(to_string = "Boolean")]
  Boolean,
  #[strum(to_string = "Int")]
  Int,
  #[strum(to_string = "Float")]
  Float,
  #[strum(to_string = "String")]
  String,
}

impl ScalarKind {
  /// All kinds in the order derived per-kind types are emitted.
  pub(crate) const ALL: [ScalarKind; 5] = [
    ScalarKind::Id,
    ScalarKind::Boolean,
    ScalarKind::Int,
    ScalarKind::Float,
    ScalarKind::String,
  ];

  pub(crate) fn from_name(name: &str) -> Option<Self> {
    match name {
      "ID" => Some(ScalarKind::Id),
      "Boolean" => Some(ScalarKind::Boolean),
      "Int" => Some(ScalarKind::Int),
      "Float" => Some(ScalarKind::Float),
      "String" => Some(ScalarKind::String),
      _ => None,
    }
  }

  /// Kinds whose values form a total order, and therefore take the
  /// full comparison algebra rather than bare equality.
  pub(crate) fn is_ordered(self) -> bool {
    matches!(self, ScalarKind::Int | ScalarKind::Float | ScalarKind::String)
  }
}

/// A declared type shape: a name, or a list wrapping another reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DeclaredType {
  Named(String),
  List(Box<TypeRef>),
}

/// Type reference with its nullability. `required: true` renders as `T!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TypeRef {
  pub(crate) ty: DeclaredType,
  pub(crate) required: bool,
}

impl TypeRef {
  pub(crate) fn named(name: impl Into<String>) -> Self {
    Self {
      ty: DeclaredType::Named(name.into()),
      required: false,
    }
  }

  pub(crate) fn scalar(kind: ScalarKind) -> Self {
    Self::named(kind.to_string())
  }

  pub(crate) fn list(element: TypeRef) -> Self {
    Self {
      ty: DeclaredType::List(Box::new(element)),
      required: false,
    }
  }

  pub(crate) fn required(mut self) -> Self {
    self.required = true;
    self
  }

  pub(crate) fn optional(mut self) -> Self {
    self.required = false;
    self
  }

  /// True for the exact identifier shape: `ID!`, not list-wrapped.
  pub(crate) fn is_non_null_id(&self) -> bool {
    self.required && matches!(&self.ty, DeclaredType::Named(name) if name == "ID")
  }
}

impl std::fmt::Display for TypeRef {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match &self.ty {
      DeclaredType::Named(name) => write!(f, "{name}")?,
      DeclaredType::List(element) => write!(f, "[{element}]")?,
    }
    if self.required {
      write!(f, "!")?;
    }
    Ok(())
  }
}

/// One field of an object type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldDecl {
  pub(crate) name: String,
  pub(crate) ty: TypeRef,
}

impl FieldDecl {
  pub(crate) fn new(name: impl Into<String>, ty: TypeRef) -> Self {
    Self { name: name.into(), ty }
  }
}

/// A declared object type: the unit CRUD operations are derived for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TypeDecl {
  pub(crate) name: String,
  pub(crate) fields: Vec<FieldDecl>,
}

impl TypeDecl {
  pub(crate) fn new(name: impl Into<String>, fields: Vec<FieldDecl>) -> Self {
    Self {
      name: name.into(),
      fields,
    }
  }
}

/// One parsed declaration document, tagged with where it came from so
/// merge conflicts can name both sides.
#[derive(Debug, Clone)]
pub(crate) struct TypeDocument {
  pub(crate) source: String,
  pub(crate) types: Vec<TypeDecl>,
}

impl TypeDocument {
  pub(crate) fn new(source: impl Into<String>, types: Vec<TypeDecl>) -> Self {
    Self {
      source: source.into(),
      types,
    }
  }
}
