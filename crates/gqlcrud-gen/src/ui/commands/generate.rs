use std::path::PathBuf;

use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use itertools::Itertools;

use crate::{
  synth::{decl::TypeDocument, metrics::SynthesisStats, printer::SchemaPrinter, synthesizer::Synthesizer},
  ui::{Colors, GenerateCommand},
  utils::{DocumentLoader, collect_paths},
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub inputs: Vec<PathBuf>,
  pub output: PathBuf,
  pub include_header: bool,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> Self {
    let GenerateCommand {
      input,
      output,
      no_header,
      verbose,
      quiet,
    } = command;

    Self {
      inputs: input,
      output,
      include_header: !no_header,
      verbose,
      quiet,
    }
  }

  /// Expands the input paths and parses each file. The returned label
  /// names every source and feeds the generated-file header.
  async fn load_documents(&self, stats: &mut SynthesisStats) -> anyhow::Result<(Vec<TypeDocument>, String)> {
    let paths = collect_paths(&self.inputs).await?;
    anyhow::ensure!(!paths.is_empty(), "no .graphql or .gql declaration files found");

    let mut documents = Vec::with_capacity(paths.len());
    for path in &paths {
      documents.push(DocumentLoader::open(path).await?.parse(stats)?);
    }

    let label = paths.iter().map(|path| path.display().to_string()).join(", ");
    Ok((documents, label))
  }

  async fn write_output(&self, sdl: String) -> anyhow::Result<()> {
    if let Some(parent) = self.output.parent() {
      tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&self.output, sdl).await?;
    Ok(())
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self, label: &str) {
    self.info(
      &format!("Loading type declarations from: {label}")
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_synthesizing(&self) {
    self.info(&"Synthesizing CRUD schema...".with(self.colors.primary()).to_string());
  }

  fn print_statistics(&self, stats: &SynthesisStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Documents merged:", stats.documents_merged.to_string());
    self.stat("Types synthesized:", stats.types_synthesized.to_string());
    self.stat(
      "Operations derived:",
      (stats.query_operations + stats.mutation_operations).to_string(),
    );
    self.stat("", format!("{} queries", stats.query_operations));
    self.stat("", format!("{} mutations", stats.mutation_operations));
    self.stat("Inputs derived:", stats.inputs_derived.to_string());
    self.stat("Scalar filters:", stats.scalar_filters_emitted.to_string());
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_warnings(stats);
  }

  fn print_warnings(&self, stats: &SynthesisStats) {
    if stats.warnings.is_empty() || !self.config.verbose {
      return;
    }

    println!();
    for warning in &stats.warnings {
      eprintln!(
        "{} {}",
        "Skipped:".with(self.colors.accent()),
        format!("{warning}").with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully synthesized CRUD schema".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_schema(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);
  let mut stats = SynthesisStats::default();

  let (documents, source_label) = config.load_documents(&mut stats).await?;
  logger.log_loading(&source_label);

  logger.log_synthesizing();
  let schema = Synthesizer::new(documents).synthesize(&mut stats)?;

  let sdl = if config.include_header {
    SchemaPrinter::render_with_header(&schema, &source_label)
  } else {
    SchemaPrinter::render(&schema)
  };

  logger.print_statistics(&stats);
  logger.log_writing();
  config.write_output(sdl).await?;

  logger.log_success();
  Ok(())
}
