//! Rendering and writing the generated files
//!
//! Both outputs are rendered before anything touches disk, so a missing or
//! broken base metadata document leaves no files behind. Each file is then
//! written once, atomically. The two writes are independent.

use super::{Binding, Collected};
use crate::config::GenerateOptions;
use crate::{Error, Result};
use autowire_fs::io;
use autowire_meta::MetadataDocument;
use autowire_meta::metadata::merge;
use std::path::{Path, PathBuf};

const GENERATED_HEADER: &str = "# Generated by autowire";

/// Summary of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// Path of the binding file, when one was written
    pub bindings_file: Option<PathBuf>,
    /// Path of the metadata document, when one was written
    pub metadata_file: Option<PathBuf>,
    pub bindings: usize,
    pub properties: usize,
    pub groups: usize,
    pub unmapped: usize,
}

/// Render the binding file: a header line, then one `key=value` per binding.
pub fn render_bindings(bindings: &[Binding]) -> String {
    let mut out = String::from(GENERATED_HEADER);
    out.push('\n');
    for binding in bindings {
        out.push_str(&binding.to_string());
        out.push('\n');
    }
    out
}

/// Write the binding file and metadata document for `collected`.
///
/// The binding file is skipped when there are no bindings; the metadata
/// document when metadata is disabled or no property was collected.
pub fn write_outputs(collected: &Collected, options: &GenerateOptions) -> Result<GenerateReport> {
    let bindings_text =
        (!collected.bindings.is_empty()).then(|| render_bindings(&collected.bindings));

    let metadata_text = if options.metadata_enabled && !collected.properties.is_empty() {
        let base = MetadataDocument::load(&options.base_metadata)?;
        Some(merge(base, &collected.properties, &collected.groups)?)
    } else {
        None
    };

    let mut report = GenerateReport {
        bindings: collected.bindings.len(),
        properties: collected.properties.len(),
        groups: collected.groups.len(),
        unmapped: collected.unmapped.len(),
        ..Default::default()
    };

    if let Some(text) = bindings_text {
        let path = options.bindings_path();
        write_file(&path, &text)?;
        tracing::info!(
            "Created file: {} (autowire by classpath: {})",
            path.display(),
            collected.bindings.len()
        );
        report.bindings_file = Some(path);
    }

    if let Some(text) = metadata_text {
        let path = options.metadata_path();
        write_file(&path, &text)?;
        tracing::info!("Created file: {}", path.display());
        report.metadata_file = Some(path);
    }

    Ok(report)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    io::write_text(path, content).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
