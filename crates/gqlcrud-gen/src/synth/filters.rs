//! The equality-operator algebra and per-type filter input derivation.
//!
//! Each scalar kind has exactly one filter shape, looked up through
//! `filter_shape_for`. The shape is the closed set of comparison variants a
//! query may supply; ordered kinds get the full ten-variant algebra
//! (six single bounds plus the four open-range pairs), ID and Boolean get
//! bare equality. Strings additionally carry independent substring
//! predicates that combine freely with any equality variant.
//!
//! GraphQL input types cannot express unions, so rendering flattens a
//! shape to one optional field per base operator; an open-range variant is
//! supplied as a lower-bound field together with an upper-bound field.

use std::collections::HashSet;

use crate::synth::{
  classifier::ClassifiedType,
  decl::{FieldDecl, ScalarKind, TypeRef},
  naming,
  schema::InputDef,
};

/// One mutually-exclusive comparison variant of an equality shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EqualityVariant {
  Eq,
  Ne,
  Le,
  Lt,
  Ge,
  Gt,
  LeGe,
  LeGt,
  LtGe,
  LtGt,
}

impl EqualityVariant {
  /// The base operator field(s) a caller sets to select this variant.
  pub(crate) fn operators(self) -> &'static [&'static str] {
    match self {
      EqualityVariant::Eq => &["eq"],
      EqualityVariant::Ne => &["ne"],
      EqualityVariant::Le => &["le"],
      EqualityVariant::Lt => &["lt"],
      EqualityVariant::Ge => &["ge"],
      EqualityVariant::Gt => &["gt"],
      EqualityVariant::LeGe => &["le", "ge"],
      EqualityVariant::LeGt => &["le", "gt"],
      EqualityVariant::LtGe => &["lt", "ge"],
      EqualityVariant::LtGt => &["lt", "gt"],
    }
  }
}

/// Substring predicates carried by the String shape, combinable with each
/// other and with any equality variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SubstringPredicate {
  Contains,
  NotContains,
  BeginsWith,
}

impl SubstringPredicate {
  pub(crate) fn field_name(self) -> &'static str {
    match self {
      SubstringPredicate::Contains => "contains",
      SubstringPredicate::NotContains => "notContains",
      SubstringPredicate::BeginsWith => "beginsWith",
    }
  }
}

const EQUALITY_ONLY: &[EqualityVariant] = &[EqualityVariant::Eq, EqualityVariant::Ne];

const FULL_ALGEBRA: &[EqualityVariant] = &[
  EqualityVariant::Eq,
  EqualityVariant::Ne,
  EqualityVariant::Le,
  EqualityVariant::Lt,
  EqualityVariant::Ge,
  EqualityVariant::Gt,
  EqualityVariant::LeGe,
  EqualityVariant::LeGt,
  EqualityVariant::LtGe,
  EqualityVariant::LtGt,
];

const STRING_SUBSTRINGS: &[SubstringPredicate] = &[
  SubstringPredicate::Contains,
  SubstringPredicate::NotContains,
  SubstringPredicate::BeginsWith,
];

/// The filter shape of one scalar kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FilterShape {
  pub(crate) kind: ScalarKind,
  pub(crate) variants: &'static [EqualityVariant],
  pub(crate) substrings: &'static [SubstringPredicate],
}

/// The canonical kind -> shape table. Total over the five supported kinds;
/// reference and list fields never reach here (they are not filterable).
pub(crate) fn filter_shape_for(kind: ScalarKind) -> FilterShape {
  FilterShape {
    kind,
    variants: if kind.is_ordered() { FULL_ALGEBRA } else { EQUALITY_ONLY },
    substrings: if kind == ScalarKind::String { STRING_SUBSTRINGS } else { &[] },
  }
}

impl FilterShape {
  /// Base operator fields in canonical order, deduplicated across
  /// variants.
  pub(crate) fn operator_fields(&self) -> Vec<&'static str> {
    let mut fields = Vec::new();
    for variant in self.variants {
      for operator in variant.operators() {
        if !fields.contains(operator) {
          fields.push(*operator);
        }
      }
    }
    fields
  }

  /// The shared input type this shape renders to, e.g. `IntFilterInput`.
  /// Every field is optional; choosing a variant is the caller's concern.
  pub(crate) fn input_def(&self) -> InputDef {
    let mut fields: Vec<FieldDecl> = self
      .operator_fields()
      .into_iter()
      .map(|operator| FieldDecl::new(operator, TypeRef::scalar(self.kind)))
      .collect();

    fields.extend(
      self
        .substrings
        .iter()
        .map(|predicate| FieldDecl::new(predicate.field_name(), TypeRef::scalar(ScalarKind::String))),
    );

    InputDef::new(naming::scalar_filter_name(self.kind), fields)
  }
}

/// Derives per-type filter inputs and remembers which per-kind filter
/// types were referenced, so the assembled schema only carries the shapes
/// it uses. One deriver value lives per synthesis invocation; there is no
/// cross-invocation state.
#[derive(Debug, Default)]
pub(crate) struct FilterDeriver {
  used: HashSet<ScalarKind>,
}

impl FilterDeriver {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  /// Builds `<T>FilterInput`: one optional per-kind filter field for every
  /// scalar-typed field (the identifier included). Reference and list
  /// fields are excluded. A type with no filterable fields yields an
  /// empty input, which is valid.
  pub(crate) fn derive_filter_input(&mut self, classified: &ClassifiedType<'_>) -> InputDef {
    let fields = classified
      .fields()
      .filter_map(|(field, class)| {
        let kind = class.scalar_kind()?;
        self.used.insert(kind);
        Some(FieldDecl::new(
          field.name.clone(),
          TypeRef::named(naming::scalar_filter_name(kind)),
        ))
      })
      .collect();

    InputDef::new(naming::filter_input_name(&classified.decl.name), fields)
  }

  /// The shared per-kind filter inputs actually referenced, in kind order.
  pub(crate) fn scalar_filter_inputs(&self) -> Vec<InputDef> {
    ScalarKind::ALL
      .into_iter()
      .filter(|kind| self.used.contains(kind))
      .map(|kind| filter_shape_for(kind).input_def())
      .collect()
  }
}
