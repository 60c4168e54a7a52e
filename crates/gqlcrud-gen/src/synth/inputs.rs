//! Create/update input derivation.
//!
//! Create inputs drop the server-generated identifier and keep every other
//! field at its declared nullability. Update inputs lead with the required
//! identifier and force every other field optional so partial updates
//! never resupply unrelated fields. In both, a field referencing another
//! object type degrades to that type's identifier scalar: inputs stay
//! flat, and nested-object creation is not expressible. The substitution
//! applies element-wise through lists.

use crate::synth::{
  classifier::{ClassifiedType, FieldClass},
  decl::{DeclaredType, FieldDecl, ScalarKind, TypeRef},
  naming,
  schema::InputDef,
};

/// Builds `<T>CreateInput`.
pub(crate) fn derive_create_input(classified: &ClassifiedType<'_>) -> InputDef {
  let fields = classified
    .fields()
    .filter(|(_, class)| **class != FieldClass::Identifier)
    .map(|(field, class)| FieldDecl::new(field.name.clone(), degrade_field(&field.ty, class)))
    .collect();

  InputDef::new(naming::create_input_name(&classified.decl.name), fields)
}

/// Builds `<T>UpdateInput`: the identifier first and required, everything
/// else optional.
pub(crate) fn derive_update_input(classified: &ClassifiedType<'_>) -> InputDef {
  let mut fields = vec![FieldDecl::new(
    classified.identifier,
    TypeRef::scalar(ScalarKind::Id).required(),
  )];

  fields.extend(
    classified
      .fields()
      .filter(|(_, class)| **class != FieldClass::Identifier)
      .map(|(field, class)| FieldDecl::new(field.name.clone(), degrade_field(&field.ty, class).optional())),
  );

  InputDef::new(naming::update_input_name(&classified.decl.name), fields)
}

/// Field-position substitution: a reference becomes a non-null `ID`; a
/// list keeps its own nullability and substitutes its element.
fn degrade_field(ty: &TypeRef, class: &FieldClass) -> TypeRef {
  match class {
    FieldClass::Reference(_) => TypeRef::scalar(ScalarKind::Id).required(),
    FieldClass::List(inner) => degrade_list(ty, inner),
    FieldClass::Identifier | FieldClass::Scalar(_) => ty.clone(),
  }
}

/// Element-position substitution: nullability is preserved at every level,
/// only reference names turn into `ID`.
fn degrade_element(ty: &TypeRef, class: &FieldClass) -> TypeRef {
  match class {
    FieldClass::Reference(_) => TypeRef {
      ty: DeclaredType::Named("ID".to_string()),
      required: ty.required,
    },
    FieldClass::List(inner) => degrade_list(ty, inner),
    FieldClass::Identifier | FieldClass::Scalar(_) => ty.clone(),
  }
}

fn degrade_list(ty: &TypeRef, element_class: &FieldClass) -> TypeRef {
  let DeclaredType::List(element) = &ty.ty else {
    // Classifier guarantees a List class only for list-shaped references.
    return ty.clone();
  };
  TypeRef {
    ty: DeclaredType::List(Box::new(degrade_element(element, element_class))),
    required: ty.required,
  }
}
