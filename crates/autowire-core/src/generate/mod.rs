//! Catalog scan and output generation
//!
//! [`Generator::scan`] walks every component option once, in catalog order:
//!
//! - every option yields a property descriptor and a group descriptor
//!   (when metadata is enabled)
//! - `object` options that pass the name filter and point at an interface
//!   are resolved to an implementation; each winner yields a binding plus one
//!   derived property per setter of the winning type
//!
//! [`output::write_outputs`] then renders everything and writes the two
//! output files.

mod engine;
mod output;

pub use engine::Generator;
pub use output::{GenerateReport, render_bindings, write_outputs};

use crate::config::GenerateOptions;
use crate::mapping::{BindingKind, MappingResolver};
use crate::registry::TypeIndex;
use crate::Result;
use autowire_fs::ConfigStore;
use autowire_meta::{ComponentCatalog, GroupDescriptor, PropertyDescriptor};
use std::fmt;

/// A resolved property: key and tagged implementation name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub key: String,
    pub target: String,
    pub kind: BindingKind,
}

impl Binding {
    /// Value as written to the binding file, e.g. `#class:com.example.Impl`.
    pub fn value(&self) -> String {
        format!("{}{}", self.kind.tag(), self.target)
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value())
    }
}

/// An option left unbound because several implementations compete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmappedOption {
    pub key: String,
    pub interface: String,
    /// Competing implementations; empty unless unmapped reporting is enabled
    pub candidates: Vec<String>,
}

/// Everything gathered during one scan, in discovery order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collected {
    pub bindings: Vec<Binding>,
    pub properties: Vec<PropertyDescriptor>,
    pub groups: Vec<GroupDescriptor>,
    pub unmapped: Vec<UnmappedOption>,
}

/// Run a full generation with a static type index.
///
/// `options` must already be rooted (see [`GenerateOptions::rooted_at`]).
/// Configuration problems fail before the scan starts.
pub fn run(options: &GenerateOptions) -> Result<GenerateReport> {
    let mapping = MappingResolver::new()
        .with_inline(options.mappings.iter().cloned())
        .with_file(&options.mappings_file)
        .resolve()?;

    let catalog: ComponentCatalog = ConfigStore::new().load(&options.catalog)?;
    let index = TypeIndex::load(&options.type_index)?;
    tracing::debug!(
        components = catalog.components.len(),
        types = index.len(),
        mappings = mapping.len(),
        "Starting scan"
    );

    let generator = Generator::new(&index, options, &mapping).with_docs(&index);
    let collected = generator.scan(&catalog);

    write_outputs(&collected, options)
}
