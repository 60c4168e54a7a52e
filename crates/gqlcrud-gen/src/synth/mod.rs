pub(crate) mod classifier;
pub(crate) mod decl;
pub(crate) mod errors;
pub(crate) mod filters;
pub(crate) mod inputs;
pub(crate) mod merger;
pub(crate) mod metrics;
pub(crate) mod naming;
pub(crate) mod operations;
pub(crate) mod printer;
pub(crate) mod schema;
pub(crate) mod sort;
pub(crate) mod synthesizer;
