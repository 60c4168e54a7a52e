pub mod documents;

pub(crate) use documents::{DocumentLoader, collect_paths};
