//! Command implementations for autowire-cli

pub mod generate;
pub mod mappings;

pub use generate::run_generate;
pub use mappings::run_mappings;

use crate::cli::MappingArgs;
use crate::error::{CliError, Result};
use autowire_core::{GenerateOptions, SettingsResolver};

/// Load project settings and apply the mapping flags, leaving paths relative.
fn load_settings(args: &MappingArgs) -> Result<GenerateOptions> {
    if !args.project_dir.is_dir() {
        return Err(CliError::user(format!(
            "Project directory not found: {}",
            args.project_dir.display()
        )));
    }

    let mut options = SettingsResolver::new(&args.project_dir).resolve()?;
    options.mappings.extend(args.mappings.iter().cloned());
    if let Some(path) = &args.mappings_file {
        options.mappings_file = path.clone();
    }
    Ok(options)
}
