//! Tests for deterministic candidate selection

use autowire_core::mapping::resolve_layers;
use autowire_core::{BindingKind, Candidate, CandidateSelector, MappingTable, Selection};
use autowire_fs::Properties;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn candidate(name: &str) -> Candidate {
    Candidate {
        name: name.into(),
        is_class: true,
        is_public: true,
        is_abstract: false,
        is_top_level: true,
        eligible: true,
    }
}

fn mapping(entries: &[&str]) -> MappingTable {
    let inline: Vec<String> = entries.iter().map(|s| s.to_string()).collect();
    resolve_layers(&Properties::new(), &inline, &Properties::new())
}

fn winner(selection: &Selection) -> Option<&str> {
    match selection {
        Selection::Selected { candidate, .. } => Some(candidate.name.as_str()),
        _ => None,
    }
}

#[test]
fn sole_candidate_without_mapping_wins() {
    let table = mapping(&[]);
    let set = BTreeSet::from([candidate("x.Only")]);

    let selection = CandidateSelector::new(&table, false).select_best("c", "p", "x.Api", &set);

    assert_eq!(
        selection,
        Selection::Selected {
            candidate: candidate("x.Only"),
            kind: BindingKind::Class
        }
    );
}

#[test]
fn zero_candidates_is_none() {
    let table = mapping(&["x.Api=x.Missing"]);

    let selection =
        CandidateSelector::new(&table, true).select_best("c", "p", "x.Api", &BTreeSet::new());

    assert_eq!(selection, Selection::None);
}

#[test]
fn skip_before_match_stops_iteration() {
    let table = mapping(&["x.Api=#skip#;x.A"]);
    let set = BTreeSet::from([candidate("x.A")]);

    let selection = CandidateSelector::new(&table, false).select_best("c", "p", "x.Api", &set);

    assert_eq!(selection, Selection::None);
}

#[test]
fn match_before_skip_wins() {
    let table = mapping(&["x.Api=x.B;#skip#"]);
    let set = BTreeSet::from([candidate("x.A"), candidate("x.B")]);

    let selection = CandidateSelector::new(&table, false).select_best("c", "p", "x.Api", &set);

    assert_eq!(winner(&selection), Some("x.B"));
}

#[test]
fn first_present_mapping_entry_wins() {
    let table = mapping(&["x.Api=#class:x.Missing;#class:x.C;x.A"]);
    let set = BTreeSet::from([candidate("x.A"), candidate("x.B"), candidate("x.C")]);

    let selection = CandidateSelector::new(&table, false).select_best("c", "p", "x.Api", &set);

    assert_eq!(winner(&selection), Some("x.C"));
}

#[test]
fn unmapped_pair_reports_all_names_when_enabled() {
    let table = mapping(&[]);
    let set = BTreeSet::from([candidate("x.B"), candidate("x.A")]);

    let selection = CandidateSelector::new(&table, true).select_best("c", "p", "x.Api", &set);

    assert_eq!(
        selection,
        Selection::Ambiguous(vec!["x.A".to_string(), "x.B".to_string()])
    );
}

#[test]
fn mapping_to_unselectable_candidate_is_ignored() {
    let table = mapping(&["x.Api=x.Abstract"]);
    let mut abstract_impl = candidate("x.Abstract");
    abstract_impl.is_abstract = true;
    let set = BTreeSet::from([abstract_impl, candidate("x.Concrete")]);

    let selection = CandidateSelector::new(&table, false).select_best("c", "p", "x.Api", &set);

    assert_eq!(winner(&selection), Some("x.Concrete"));
}

proptest! {
    #[test]
    fn mapped_winner_ignores_insertion_order(
        names in prop::collection::btree_set("x\\.[A-Z][a-z]{1,5}", 2..8),
        pick in any::<prop::sample::Index>(),
        reverse in any::<bool>(),
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let chosen = names[pick.index(names.len())].clone();
        let table = mapping(&[&format!("x.Api=x.NotThere;{chosen}")]);

        let mut ordered = names.clone();
        if reverse {
            ordered.reverse();
        }
        let mut set = BTreeSet::new();
        for name in &ordered {
            set.insert(candidate(name));
        }

        let selection = CandidateSelector::new(&table, false).select_best("c", "p", "x.Api", &set);
        prop_assert_eq!(winner(&selection), Some(chosen.as_str()));
    }

    #[test]
    fn unmapped_sets_are_always_ambiguous(
        names in prop::collection::btree_set("x\\.[A-Z][a-z]{1,5}", 2..8),
    ) {
        let table = mapping(&[]);
        let set: BTreeSet<Candidate> = names.iter().map(|n| candidate(n)).collect();

        let selection = CandidateSelector::new(&table, true).select_best("c", "p", "x.Api", &set);

        let expected: Vec<String> = names.into_iter().collect();
        prop_assert_eq!(selection, Selection::Ambiguous(expected));
    }
}
