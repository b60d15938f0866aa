//! Generate the binding file and configuration metadata

use colored::Colorize;

use crate::cli::GenerateArgs;
use crate::error::Result;
use autowire_core::{GenerateOptions, GenerateReport, generate};

use super::load_settings;

/// Settings file values with command-line flags applied on top.
pub fn resolve_options(args: &GenerateArgs) -> Result<GenerateOptions> {
    let mut options = load_settings(&args.mapping)?;

    if let Some(path) = &args.catalog {
        options.catalog = path.clone();
    }
    if let Some(path) = &args.type_index {
        options.type_index = path.clone();
    }
    if let Some(path) = &args.base_metadata {
        options.base_metadata = path.clone();
    }
    if let Some(prefix) = &args.key_prefix {
        options.key_prefix = prefix.clone();
    }
    if args.no_autowire {
        options.autowire_enabled = false;
    }
    if args.no_metadata {
        options.metadata_enabled = false;
    }
    if args.no_doc_lookup {
        options.doc_lookup_enabled = false;
    }
    if args.log_unmapped {
        options.log_unmapped = true;
    }
    if !args.exclude.is_empty() {
        options.exclude = args.exclude.clone();
    }
    if !args.include.is_empty() {
        options.include = args.include.clone();
    }

    Ok(options.rooted_at(&args.mapping.project_dir))
}

/// Run the generate command
pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    let options = resolve_options(args)?;
    tracing::debug!(?options, "Resolved options");

    let report = generate::run(&options)?;
    print_report(&report, options.log_unmapped);
    Ok(())
}

fn print_report(report: &GenerateReport, log_unmapped: bool) {
    println!(
        "{} {} bindings, {} properties, {} groups",
        "=>".blue().bold(),
        report.bindings,
        report.properties,
        report.groups
    );
    if log_unmapped && report.unmapped > 0 {
        println!(
            "   {} {} options with several implementations",
            "!".yellow().bold(),
            report.unmapped
        );
    }

    let written: Vec<_> = [&report.bindings_file, &report.metadata_file]
        .into_iter()
        .flatten()
        .collect();
    if written.is_empty() {
        println!("   {} Nothing to write.", "-".dimmed());
    }
    for path in written {
        println!("   {} {}", "+".green(), path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::MappingArgs;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn args(root: &Path) -> GenerateArgs {
        GenerateArgs {
            mapping: MappingArgs {
                project_dir: root.to_path_buf(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn flags_override_settings_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("autowire.toml"),
            r#"
[generate]
exclude = ["kafka"]
include = ["jms"]
log_unmapped = false
key_prefix = "app.component"
"#,
        )
        .unwrap();
        let args = GenerateArgs {
            exclude: vec!["foo*".into()],
            log_unmapped: true,
            no_metadata: true,
            catalog: Some("other/catalog.json".into()),
            ..args(temp.path())
        };

        let options = resolve_options(&args).unwrap();

        assert_eq!(options.exclude, vec!["foo*"]);
        assert_eq!(options.include, vec!["jms"]);
        assert!(options.log_unmapped);
        assert!(!options.metadata_enabled);
        assert!(options.autowire_enabled);
        assert_eq!(options.key_prefix, "app.component");
        assert_eq!(options.catalog, temp.path().join("other/catalog.json"));
    }

    #[test]
    fn defaults_are_rooted_at_project() {
        let temp = TempDir::new().unwrap();

        let options = resolve_options(&args(temp.path())).unwrap();

        assert_eq!(options.type_index, temp.path().join("types.toml"));
        assert_eq!(
            options.mappings_file,
            temp.path().join("camel-main-mappings.properties")
        );
    }
}
