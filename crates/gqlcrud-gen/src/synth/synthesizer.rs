//! Pipeline orchestration: merge the documents, classify each type once,
//! run every deriver over the classification, fold the root operations,
//! and assemble the schema value. Synthesis is pure and all-or-nothing;
//! the first error aborts the whole schema.

use crate::synth::{
  classifier::FieldClassifier,
  decl::TypeDocument,
  errors::SynthesisError,
  filters::FilterDeriver,
  inputs::{derive_create_input, derive_update_input},
  merger::merge_documents,
  metrics::SynthesisStats,
  operations::RootOperations,
  schema::SchemaDef,
  sort::{derive_sort_input, sort_direction_enum},
};

pub(crate) struct Synthesizer {
  documents: Vec<TypeDocument>,
}

impl Synthesizer {
  pub(crate) fn new(documents: Vec<TypeDocument>) -> Self {
    Self { documents }
  }

  /// Runs the whole pipeline. Iteration order is declaration order, so
  /// the same documents always produce the same schema value.
  pub(crate) fn synthesize(&self, stats: &mut SynthesisStats) -> Result<SchemaDef, SynthesisError> {
    let merged = merge_documents(&self.documents)?;
    stats.record_documents(self.documents.len());

    let classifier = FieldClassifier::new(&merged);
    let mut filter_deriver = FilterDeriver::new();
    let mut derived_inputs = Vec::new();
    let mut operations = RootOperations::new();

    for decl in merged.values() {
      let classified = classifier.classify_type(decl)?;

      derived_inputs.push(filter_deriver.derive_filter_input(&classified));
      derived_inputs.push(derive_sort_input(&classified));
      derived_inputs.push(derive_create_input(&classified));
      derived_inputs.push(derive_update_input(&classified));

      operations.add_type(&classified)?;
      stats.record_type();
    }

    let scalar_filters = filter_deriver.scalar_filter_inputs();
    let (query, mutation) = operations.into_parts();

    stats.record_operations(query.len(), mutation.len());
    stats.record_inputs(derived_inputs.len());
    stats.record_scalar_filters(scalar_filters.len());

    let enums = if merged.is_empty() {
      Vec::new()
    } else {
      vec![sort_direction_enum()]
    };

    Ok(SchemaDef {
      objects: merged.into_values().collect(),
      enums,
      scalar_filters,
      inputs: derived_inputs,
      query,
      mutation,
    })
  }
}
