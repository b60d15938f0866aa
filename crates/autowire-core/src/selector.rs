//! Choosing one implementation for an abstract type
//!
//! Selection is deterministic: only the mapping's explicit order breaks ties,
//! never the order candidates happen to be enumerated in.

use crate::mapping::{BindingKind, CandidateRef, MappingTable};
use autowire_meta::TypeInfo;
use std::collections::BTreeSet;

/// A concrete type that implements the abstract type being resolved.
///
/// Ordered by name so candidate sets iterate alphabetically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Candidate {
    pub name: String,
    pub is_class: bool,
    pub is_public: bool,
    pub is_abstract: bool,
    pub is_top_level: bool,
    /// False for types in one of the system's own namespaces
    pub eligible: bool,
}

impl Candidate {
    /// Build a candidate record, marking types under any of `own_namespaces`
    /// as ineligible.
    pub fn from_type(info: &TypeInfo, own_namespaces: &[String]) -> Self {
        Self {
            name: info.name.clone(),
            is_class: !info.is_interface(),
            is_public: info.is_public(),
            is_abstract: info.is_abstract,
            is_top_level: info.is_top_level(),
            eligible: !own_namespaces
                .iter()
                .any(|ns| info.name.starts_with(ns.as_str())),
        }
    }

    /// A public, concrete, top-level class outside the system's namespaces.
    pub fn is_selectable(&self) -> bool {
        self.is_class && self.is_public && !self.is_abstract && self.is_top_level && self.eligible
    }
}

/// Outcome of selecting an implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A single winner
    Selected { candidate: Candidate, kind: BindingKind },
    /// Several candidates and no mapping to decide between them.
    ///
    /// Carries every candidate name when unmapped reporting is enabled, and
    /// is empty otherwise.
    Ambiguous(Vec<String>),
    /// Nothing to bind, or resolution explicitly skipped
    None,
}

/// Picks the best candidate using the mapping table.
#[derive(Debug, Clone, Copy)]
pub struct CandidateSelector<'a> {
    mapping: &'a MappingTable,
    report_unmapped: bool,
}

impl<'a> CandidateSelector<'a> {
    pub fn new(mapping: &'a MappingTable, report_unmapped: bool) -> Self {
        Self {
            mapping,
            report_unmapped,
        }
    }

    /// Select the implementation to bind for `abstract_type`.
    ///
    /// 1. Walk the mapping for `abstract_type` in order; `#skip#` ends with
    ///    [`Selection::None`], the first name present among the candidates wins.
    /// 2. Otherwise a sole candidate wins.
    /// 3. Several candidates are [`Selection::Ambiguous`].
    /// 4. No candidates is [`Selection::None`].
    ///
    /// Candidates that are not selectable are ignored. The caller reports
    /// ambiguity, since only it knows the full property key.
    pub fn select_best(
        &self,
        owner: &str,
        property: &str,
        abstract_type: &str,
        candidates: &BTreeSet<Candidate>,
    ) -> Selection {
        let selectable: Vec<&Candidate> =
            candidates.iter().filter(|c| c.is_selectable()).collect();

        if let Some(entry) = self.mapping.get(abstract_type) {
            for candidate_ref in &entry.candidates {
                match candidate_ref {
                    CandidateRef::Skip => {
                        tracing::debug!(abstract_type, "Mapping skips resolution");
                        return Selection::None;
                    }
                    CandidateRef::Named { name, kind } => {
                        if let Some(found) = selectable.iter().find(|c| c.name == *name) {
                            return Selection::Selected {
                                candidate: (*found).clone(),
                                kind: *kind,
                            };
                        }
                    }
                }
            }
        }

        match selectable.as_slice() {
            [] => Selection::None,
            [only] => Selection::Selected {
                candidate: (*only).clone(),
                kind: BindingKind::Class,
            },
            many => {
                if !self.report_unmapped {
                    return Selection::Ambiguous(Vec::new());
                }
                let names: Vec<String> = many.iter().map(|c| c.name.clone()).collect();
                tracing::debug!(
                    owner,
                    property,
                    abstract_type,
                    count = names.len(),
                    candidates = ?names,
                    "Cannot choose best type"
                );
                Selection::Ambiguous(names)
            }
        }
    }
}
