use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "gqlcrud-gen")]
#[command(author, version, about = "CRUD GraphQL schema synthesizer")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from type declaration files
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Synthesize a CRUD schema from type declaration files
  Generate(GenerateCommand),
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// Declaration files or directories holding .graphql/.gql files
  #[arg(short, long, value_name = "PATH", required = true, num_args = 1..)]
  pub input: Vec<PathBuf>,

  /// Path where the synthesized schema will be written
  #[arg(short, long, value_name = "FILE")]
  pub output: PathBuf,

  /// Omit the generated-file header comment
  #[arg(long, default_value_t = false)]
  pub no_header: bool,

  /// Enable verbose output with per-warning detail
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List the declared object types and what each one synthesizes
  Types {
    /// Declaration files or directories holding .graphql/.gql files
    #[arg(short, long, value_name = "PATH", required = true, num_args = 1..)]
    input: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: ListFormat,
  },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ListFormat {
  Table,
  Json,
}
