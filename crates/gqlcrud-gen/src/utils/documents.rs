use std::path::{Path, PathBuf};

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use graphql_parser::schema::{self, Definition, TypeDefinition};

use crate::synth::{
  decl::{FieldDecl, TypeDecl, TypeDocument, TypeRef},
  metrics::{SynthesisStats, SynthesisWarning},
};

/// Memory-mapped declaration file. Parsing happens lazily through
/// `parse`, so a bad file surfaces with its path attached.
pub(crate) struct DocumentLoader {
  path: PathBuf,
  file: AsyncMmapFile,
}

impl DocumentLoader {
  pub(crate) async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("failed to open '{}'", path.display()))?;

    Ok(Self {
      path: path.to_path_buf(),
      file,
    })
  }

  pub(crate) fn parse(&self, stats: &mut SynthesisStats) -> anyhow::Result<TypeDocument> {
    let text = std::str::from_utf8(self.file.as_slice())
      .with_context(|| format!("'{}' is not valid UTF-8", self.path.display()))?;
    parse_document(&self.path.display().to_string(), text, stats)
  }
}

/// Parses SDL text into a `TypeDocument`. Object type definitions become
/// declarations; everything else in the document is skipped with a
/// warning, in keeping with synthesis operating on plain object types
/// only.
pub(crate) fn parse_document(source: &str, text: &str, stats: &mut SynthesisStats) -> anyhow::Result<TypeDocument> {
  let document = schema::parse_schema::<String>(text).with_context(|| format!("failed to parse '{source}'"))?;

  let mut types = Vec::new();
  for definition in &document.definitions {
    match definition {
      Definition::TypeDefinition(TypeDefinition::Object(object)) => {
        let fields = object
          .fields
          .iter()
          .map(|field| FieldDecl::new(field.name.clone(), convert_type(&field.field_type)))
          .collect();
        types.push(TypeDecl::new(object.name.clone(), fields));
      }
      other => stats.record_warning(SynthesisWarning::SkippedDefinition {
        source: source.to_string(),
        kind: definition_kind(other).to_string(),
        name: definition_name(other),
      }),
    }
  }

  Ok(TypeDocument::new(source, types))
}

/// Maps the parser's outside-in non-null wrapping onto `TypeRef`'s
/// per-reference `required` flag.
fn convert_type(ty: &schema::Type<'_, String>) -> TypeRef {
  match ty {
    schema::Type::NamedType(name) => TypeRef::named(name.clone()),
    schema::Type::ListType(element) => TypeRef::list(convert_type(element)),
    schema::Type::NonNullType(inner) => convert_type(inner).required(),
  }
}

fn definition_kind(definition: &Definition<'_, String>) -> &'static str {
  match definition {
    Definition::SchemaDefinition(_) => "schema",
    Definition::TypeDefinition(TypeDefinition::Scalar(_)) => "scalar",
    Definition::TypeDefinition(TypeDefinition::Object(_)) => "object",
    Definition::TypeDefinition(TypeDefinition::Interface(_)) => "interface",
    Definition::TypeDefinition(TypeDefinition::Union(_)) => "union",
    Definition::TypeDefinition(TypeDefinition::Enum(_)) => "enum",
    Definition::TypeDefinition(TypeDefinition::InputObject(_)) => "input",
    Definition::TypeExtension(_) => "extension",
    Definition::DirectiveDefinition(_) => "directive",
  }
}

fn definition_name(definition: &Definition<'_, String>) -> String {
  match definition {
    Definition::SchemaDefinition(_) => "schema".to_string(),
    Definition::TypeDefinition(TypeDefinition::Scalar(t)) => t.name.clone(),
    Definition::TypeDefinition(TypeDefinition::Object(t)) => t.name.clone(),
    Definition::TypeDefinition(TypeDefinition::Interface(t)) => t.name.clone(),
    Definition::TypeDefinition(TypeDefinition::Union(t)) => t.name.clone(),
    Definition::TypeDefinition(TypeDefinition::Enum(t)) => t.name.clone(),
    Definition::TypeDefinition(TypeDefinition::InputObject(t)) => t.name.clone(),
    Definition::TypeExtension(extension) => match extension {
      schema::TypeExtension::Scalar(t) => t.name.clone(),
      schema::TypeExtension::Object(t) => t.name.clone(),
      schema::TypeExtension::Interface(t) => t.name.clone(),
      schema::TypeExtension::Union(t) => t.name.clone(),
      schema::TypeExtension::Enum(t) => t.name.clone(),
      schema::TypeExtension::InputObject(t) => t.name.clone(),
    },
    Definition::DirectiveDefinition(t) => t.name.clone(),
  }
}

/// Expands each input path: files pass through, directories contribute
/// their `.graphql`/`.gql` entries in name order.
pub(crate) async fn collect_paths(inputs: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
  let mut paths = Vec::new();
  for input in inputs {
    let metadata = tokio::fs::metadata(input)
      .await
      .with_context(|| format!("cannot read '{}'", input.display()))?;
    if metadata.is_dir() {
      let mut entries = Vec::new();
      let mut dir = tokio::fs::read_dir(input).await?;
      while let Some(entry) = dir.next_entry().await? {
        let path = entry.path();
        let is_sdl = path
          .extension()
          .and_then(|ext| ext.to_str())
          .is_some_and(|ext| ext == "graphql" || ext == "gql");
        if is_sdl && entry.file_type().await?.is_file() {
          entries.push(path);
        }
      }
      entries.sort();
      paths.extend(entries);
    } else {
      paths.push(input.clone());
    }
  }
  Ok(paths)
}
