//! Registry queries used while resolving an option
//!
//! Candidate discovery, setter collection along the super-type chain, and
//! documentation lookup with the same fallback.

use crate::registry::{DocLookup, TypeRegistry};
use crate::selector::Candidate;
use autowire_meta::{MethodInfo, TypeInfo};
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

static INLINE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{@\w+\s+([^}]*)\}").expect("valid inline tag regex"));
static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[a-zA-Z][^>]*>").expect("valid html tag regex"));

/// Whether a type is worth autowiring: not a primitive and not under one of
/// the platform namespaces.
pub fn is_complex_user_type(info: &TypeInfo, platform_namespaces: &[String]) -> bool {
    !info.is_primitive()
        && !platform_namespaces
            .iter()
            .any(|ns| info.name.starts_with(ns.as_str()))
}

/// Candidate records for every subtype of `abstract_type`.
pub fn candidates_for(
    registry: &dyn TypeRegistry,
    abstract_type: &TypeInfo,
    own_namespaces: &[String],
) -> BTreeSet<Candidate> {
    registry
        .subtypes_of(abstract_type)
        .iter()
        .map(|info| Candidate::from_type(info, own_namespaces))
        .collect()
}

/// The type followed by its super types, as far as the registry knows them.
fn type_chain(registry: &dyn TypeRegistry, start: &TypeInfo) -> Vec<TypeInfo> {
    let mut chain = vec![start.clone()];
    let mut seen = HashSet::from([start.name.clone()]);
    let mut next = start.super_type.clone();

    while let Some(name) = next {
        if !seen.insert(name.clone()) {
            break;
        }
        match registry.load_type(&name) {
            Ok(info) => {
                next = info.super_type.clone();
                chain.push(info);
            }
            Err(e) => {
                tracing::debug!(%name, error = %e, "Stopping super type walk");
                break;
            }
        }
    }
    chain
}

/// Setters declared on `ty` or inherited from its super types.
///
/// Overridden setters appear once. The result is sorted case-insensitively by
/// method name.
pub fn collect_setters(registry: &dyn TypeRegistry, ty: &TypeInfo) -> Vec<MethodInfo> {
    let mut seen = HashSet::new();
    let mut setters: Vec<MethodInfo> = type_chain(registry, ty)
        .into_iter()
        .flat_map(|info| info.methods)
        .filter(MethodInfo::is_setter)
        .filter(|m| seen.insert((m.name.clone(), m.parameters.clone())))
        .collect();
    setters.sort_by_key(|m| m.name.to_lowercase());
    setters
}

/// Documentation for `member`, looked up on `ty` and then up its super types.
pub fn find_doc(
    registry: &dyn TypeRegistry,
    docs: &dyn DocLookup,
    ty: &TypeInfo,
    member: &str,
) -> Option<String> {
    type_chain(registry, ty)
        .iter()
        .find_map(|info| docs.doc_for(&info.name, member))
}

/// Reduce a documentation comment to a single plain-text sentence run.
///
/// Block tags (`@param`, `@return`, ...) and everything after the first one
/// are dropped, inline tags keep their text, HTML tags are removed and
/// whitespace is collapsed. Returns `None` when nothing is left.
pub fn sanitize_description(doc: &str) -> Option<String> {
    let mut body = Vec::new();
    for line in doc.lines() {
        let line = line.trim_start();
        let line = line.strip_prefix('*').unwrap_or(line).trim();
        if line.starts_with('@') {
            break;
        }
        body.push(line);
    }

    let text = body.join(" ");
    let text = INLINE_TAG.replace_all(&text, "$1");
    let text = HTML_TAG.replace_all(&text, "");
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

    (!text.is_empty()).then_some(text)
}
