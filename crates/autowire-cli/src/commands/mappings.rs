//! Print the resolved mapping table

use crate::cli::MappingArgs;
use crate::error::Result;
use autowire_core::{MappingResolver, MappingTable};

use super::load_settings;

/// Resolve builtins, inline overrides and the mappings file into one table.
pub fn resolve_table(args: &MappingArgs) -> Result<MappingTable> {
    let options = load_settings(args)?.rooted_at(&args.project_dir);
    let table = MappingResolver::new()
        .with_inline(options.mappings)
        .with_file(options.mappings_file)
        .resolve()?;
    Ok(table)
}

/// Run the mappings command
pub fn run_mappings(args: &MappingArgs) -> Result<()> {
    let table = resolve_table(args)?;
    print!("{table}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(root: &TempDir) -> MappingArgs {
        MappingArgs {
            project_dir: root.path().to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn builtins_only() {
        let temp = TempDir::new().unwrap();

        let table = resolve_table(&args(&temp)).unwrap();

        assert!(table.get("javax.sql.DataSource").is_some());
    }

    #[test]
    fn flag_wins_over_settings_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("autowire.toml"),
            "[generate]\nmappings = [\"x.Api=x.FromSettings\"]\n",
        )
        .unwrap();
        let args = MappingArgs {
            mappings: vec!["x.Api=x.FromFlag".into()],
            ..args(&temp)
        };

        let table = resolve_table(&args).unwrap();

        assert_eq!(table.get("x.Api").unwrap().raw, "x.FromFlag");
    }

    #[test]
    fn mappings_file_flag_is_relative_to_project() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("custom.properties"), "x.Api=#skip#\n").unwrap();
        let args = MappingArgs {
            mappings: vec!["x.Api=x.FromFlag".into()],
            mappings_file: Some("custom.properties".into()),
            ..args(&temp)
        };

        let table = resolve_table(&args).unwrap();

        assert_eq!(table.get("x.Api").unwrap().raw, "#skip#");
    }

    #[test]
    fn missing_project_dir_is_a_user_error() {
        let temp = TempDir::new().unwrap();
        let args = MappingArgs {
            project_dir: temp.path().join("nope"),
            ..Default::default()
        };

        let err = resolve_table(&args).unwrap_err();
        assert!(err.to_string().contains("Project directory not found"));
    }
}
