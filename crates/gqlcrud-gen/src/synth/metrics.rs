use strum::Display;

/// Counters describing one synthesis run, printed by the CLI afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct SynthesisStats {
  pub(crate) documents_merged: usize,
  pub(crate) types_synthesized: usize,
  pub(crate) query_operations: usize,
  pub(crate) mutation_operations: usize,
  pub(crate) inputs_derived: usize,
  pub(crate) scalar_filters_emitted: usize,
  pub(crate) warnings: Vec<SynthesisWarning>,
}

impl SynthesisStats {
  pub(crate) fn record_documents(&mut self, count: usize) {
    self.documents_merged += count;
  }

  pub(crate) fn record_type(&mut self) {
    self.types_synthesized += 1;
  }

  pub(crate) fn record_operations(&mut self, query: usize, mutation: usize) {
    self.query_operations += query;
    self.mutation_operations += mutation;
  }

  pub(crate) fn record_inputs(&mut self, count: usize) {
    self.inputs_derived += count;
  }

  pub(crate) fn record_scalar_filters(&mut self, count: usize) {
    self.scalar_filters_emitted += count;
  }

  pub(crate) fn record_warning(&mut self, warning: SynthesisWarning) {
    self.warnings.push(warning);
  }
}

/// Non-fatal observations from the frontend; synthesis itself is
/// all-or-nothing and never warns.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub(crate) enum SynthesisWarning {
  #[strum(to_string = "{source}: skipped {kind} definition '{name}' (only object types are synthesized)")]
  SkippedDefinition {
    source: String,
    kind: String,
    name: String,
  },
}
