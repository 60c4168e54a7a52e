use std::path::PathBuf;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};
use serde::Serialize;

use crate::{
  synth::{classifier::FieldClassifier, merger::merge_documents, metrics::SynthesisStats, naming},
  ui::{Colors, ListFormat, colors::IntoComfyColor, term_width},
  utils::{DocumentLoader, collect_paths},
};

#[derive(Debug, Serialize)]
struct TypeRow {
  #[serde(rename = "type")]
  name: String,
  identifier: String,
  #[serde(rename = "fields")]
  field_count: usize,
  operations: Vec<String>,
}

async fn collect_rows(inputs: &[PathBuf]) -> anyhow::Result<Vec<TypeRow>> {
  let paths = collect_paths(inputs).await?;
  anyhow::ensure!(!paths.is_empty(), "no .graphql or .gql declaration files found");

  let mut stats = SynthesisStats::default();
  let mut documents = Vec::with_capacity(paths.len());
  for path in &paths {
    documents.push(DocumentLoader::open(path).await?.parse(&mut stats)?);
  }

  let merged = merge_documents(&documents)?;
  let classifier = FieldClassifier::new(&merged);

  let mut rows = Vec::with_capacity(merged.len());
  for decl in merged.values() {
    let classified = classifier.classify_type(decl)?;
    rows.push(TypeRow {
      name: decl.name.clone(),
      identifier: classified.identifier.to_string(),
      field_count: decl.fields.len(),
      operations: vec![
        naming::fetch_query_name(&decl.name),
        naming::list_query_name(&decl.name),
        naming::create_mutation_name(&decl.name),
        naming::update_mutation_name(&decl.name),
        naming::delete_mutation_name(&decl.name),
      ],
    });
  }
  Ok(rows)
}

pub async fn list_types(inputs: &[PathBuf], format: ListFormat, colors: &Colors) -> anyhow::Result<()> {
  let rows = collect_rows(inputs).await?;

  match format {
    ListFormat::Table => print_table(&rows, colors),
    ListFormat::Json => print_json(&rows)?,
  }

  Ok(())
}

fn print_table(rows: &[TypeRow], colors: &Colors) {
  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  header.add_cell(Cell::new("TYPE").fg(IntoComfyColor::into(colors.label())));
  header.add_cell(Cell::new("IDENTIFIER").fg(IntoComfyColor::into(colors.label())));
  header.add_cell(Cell::new("FIELDS").fg(IntoComfyColor::into(colors.label())));
  header.add_cell(Cell::new("OPERATIONS").fg(IntoComfyColor::into(colors.label())));
  table.set_header(header);

  for entry in rows {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(&entry.name)
        .fg(IntoComfyColor::into(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(&entry.identifier).fg(IntoComfyColor::into(colors.accent())));
    row.add_cell(
      Cell::new(entry.field_count)
        .fg(IntoComfyColor::into(colors.primary()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(entry.operations.join(", ")).fg(IntoComfyColor::into(colors.primary())));
    table.add_row(row);
  }

  println!("{table}");
}

fn print_json(rows: &[TypeRow]) -> anyhow::Result<()> {
  println!("{}", serde_json::to_string_pretty(rows)?);
  Ok(())
}
