//! Type resolution and metadata aggregation engine
//!
//! Given a catalog of configurable options and a registry of the types visible
//! to the build, this crate decides which concrete implementation to bind to
//! each interface-typed option and gathers the configuration metadata that
//! downstream tooling consumes.
//!
//! - **Mapping resolution**: layers built-in, inline and file mappings into one
//!   read-only table
//! - **Name filtering**: include/exclude glob patterns over option names
//! - **Candidate selection**: deterministic single-winner choice per option
//! - **Generation**: walks the catalog, collects bindings and descriptors, and
//!   writes the binding file and merged metadata document
//!
//! # Architecture
//!
//! ```text
//!                 autowire-cli
//!                      |
//!                autowire-core
//!                      |
//!          +-----------+-----------+
//!          |                       |
//!     autowire-meta           autowire-fs
//! ```
//!
//! # Example
//!
//! ```ignore
//! use autowire_core::{SettingsResolver, generate};
//! use std::path::Path;
//!
//! let root = Path::new("/path/to/project");
//! let options = SettingsResolver::new(root).resolve()?.rooted_at(root);
//! let report = generate::run(&options)?;
//! println!("{} bindings", report.bindings);
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod generate;
pub mod introspect;
pub mod mapping;
pub mod naming;
pub mod registry;
pub mod selector;

pub use config::{GenerateOptions, SettingsResolver};
pub use error::{Error, Result};
pub use filter::{NameFilter, is_eligible, matches_pattern};
pub use generate::{Binding, Collected, GenerateReport, Generator, UnmappedOption};
pub use mapping::{BindingKind, CandidateRef, MappingResolver, MappingTable, SKIP_SENTINEL};
pub use registry::{DocLookup, TypeIndex, TypeRegistry};
pub use selector::{Candidate, CandidateSelector, Selection};
