//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Autowire - Resolve component options to implementations and emit metadata
#[derive(Parser, Debug)]
#[command(name = "autowire")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate the binding file and configuration metadata
    ///
    /// Settings are read from autowire.toml in the project directory;
    /// flags given here override them.
    ///
    /// Examples:
    ///   autowire generate
    ///   autowire generate --log-unmapped
    ///   autowire generate --exclude 'kafka.*,jms'
    ///   autowire generate --mapping 'com.example.Engine=#skip#'
    Generate(GenerateArgs),

    /// Print the resolved mapping table
    Mappings(MappingArgs),
}

/// Options shared by every command that resolves mappings.
#[derive(Args, Debug, Clone, PartialEq, Eq, Default)]
pub struct MappingArgs {
    /// Project root containing autowire.toml
    #[arg(short = 'C', long, default_value = ".", env = "AUTOWIRE_PROJECT_DIR")]
    pub project_dir: PathBuf,

    /// Inline mapping override, `<abstract type>=<candidates>`
    #[arg(short, long = "mapping")]
    pub mappings: Vec<String>,

    /// Project-local mappings file
    #[arg(long)]
    pub mappings_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub mapping: MappingArgs,

    /// Component catalog (TOML, JSON or YAML)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Static type index (TOML, JSON or YAML)
    #[arg(long)]
    pub type_index: Option<PathBuf>,

    /// Base metadata document to extend
    #[arg(long)]
    pub base_metadata: Option<PathBuf>,

    /// Prefix of generated property keys
    #[arg(long)]
    pub key_prefix: Option<String>,

    /// Do not resolve implementations
    #[arg(long)]
    pub no_autowire: bool,

    /// Do not write configuration metadata
    #[arg(long)]
    pub no_metadata: bool,

    /// Do not use documentation comments in descriptions
    #[arg(long)]
    pub no_doc_lookup: bool,

    /// List competing implementations of ambiguous options
    #[arg(long)]
    pub log_unmapped: bool,

    /// Option name patterns to skip (`*` wildcard)
    #[arg(short, long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Option name patterns to allow; everything else is skipped
    #[arg(short, long, value_delimiter = ',')]
    pub include: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn no_command() {
        let cli = parse(&["autowire"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn generate_defaults() {
        let cli = parse(&["autowire", "generate"]);
        match cli.command {
            Some(Commands::Generate(args)) => {
                assert_eq!(args.mapping.project_dir, PathBuf::from("."));
                assert!(args.exclude.is_empty());
                assert!(!args.no_autowire);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn generate_splits_comma_lists() {
        let cli = parse(&[
            "autowire",
            "generate",
            "--exclude",
            "kafka.*,jms",
            "-e",
            "foo*",
            "--include",
            "header*",
        ]);
        let Some(Commands::Generate(args)) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.exclude, vec!["kafka.*", "jms", "foo*"]);
        assert_eq!(args.include, vec!["header*"]);
    }

    #[test]
    fn mapping_is_repeatable_and_keeps_commas() {
        let cli = parse(&[
            "autowire",
            "mappings",
            "-m",
            "x.A=x.B;x.C",
            "--mapping",
            "x.D=#skip#",
        ]);
        let Some(Commands::Mappings(args)) = cli.command else {
            panic!("expected mappings");
        };
        assert_eq!(args.mappings, vec!["x.A=x.B;x.C", "x.D=#skip#"]);
    }

    #[test]
    fn verbose_is_global() {
        let cli = parse(&["autowire", "generate", "--verbose"]);
        assert!(cli.verbose);
    }
}
