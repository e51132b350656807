//! Structural invariants every returned build must satisfy, independent of
//! which objective or constraints produced it.

mod support;

use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;

use runeforge_api::{search_builds, SearchContext, SearchRequest};
use runeforge_kernel::legality::validate_build;
use runeforge_kernel::rune::{Rune, RuneId, SlotId};
use runeforge_kernel::set::SetId;
use runeforge_kernel::stat::StatId;

use support::s1_inventory;

fn run(inventory: Vec<Rune>, constraints: BTreeMap<String, f64>, set_constraints: BTreeMap<String, u8>) -> runeforge_api::SearchResponse {
    let ctx = SearchContext::new();
    let mut request = SearchRequest::new(inventory, 900, 104, 10_000, 500);
    request.constraints = constraints;
    request.set_constraints = set_constraints;
    let cancel = AtomicBool::new(false);
    search_builds(&ctx, &request, &cancel).expect("valid policy")
}

#[test]
fn every_build_names_all_six_slots_exactly_once() {
    let response = run(s1_inventory(), BTreeMap::new(), BTreeMap::new());
    assert!(!response.builds.is_empty());
    for build in &response.builds {
        let mut keys: Vec<u8> = build.slots.keys().copied().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec![1, 2, 3, 4, 5, 6]);
    }
}

#[test]
fn every_build_uses_six_distinct_rune_ids_drawn_from_the_inventory() {
    let inventory = s1_inventory();
    let valid_ids: std::collections::BTreeSet<u64> = inventory.iter().map(|r| r.id.0).collect();
    let response = run(inventory, BTreeMap::new(), BTreeMap::new());

    for build in &response.builds {
        let ids: std::collections::BTreeSet<u64> = build.slots.values().map(|s| s.rune_id).collect();
        assert_eq!(ids.len(), 6, "six slots must carry six distinct rune ids");
        for id in &ids {
            assert!(valid_ids.contains(id), "returned rune id must come from the submitted inventory");
        }
    }
}

#[test]
fn every_returned_build_passes_full_build_legality() {
    let inventory = s1_inventory();
    let by_id: BTreeMap<u64, &Rune> = inventory.iter().map(|r| (r.id.0, r)).collect();
    let response = run(inventory.clone(), BTreeMap::new(), BTreeMap::new());

    for build in &response.builds {
        let mut runes: [Option<&Rune>; 6] = [None; 6];
        for (&slot_number, slot_record) in &build.slots {
            let rune = by_id[&slot_record.rune_id];
            runes[usize::from(slot_number - 1)] = Some(rune);
        }
        let runes: [&Rune; 6] = runes.map(|r| r.expect("every slot filled"));
        assert!(validate_build(&runes));
    }
}

#[test]
fn every_build_satisfies_every_requested_stat_floor() {
    let mut constraints = BTreeMap::new();
    constraints.insert("CD".to_string(), 80.0);
    let response = run(s1_inventory(), constraints, BTreeMap::new());

    assert!(!response.builds.is_empty());
    for build in &response.builds {
        assert!(build.cd_total >= 80, "build with cd_total={} violates the CD floor", build.cd_total);
    }
}

#[test]
fn every_build_satisfies_every_requested_set_floor_after_intangible_merge() {
    let inventory = s1_inventory();
    let mut set_constraints = BTreeMap::new();
    set_constraints.insert("Rage".to_string(), 3);
    let response = run(inventory.clone(), BTreeMap::new(), set_constraints);

    assert!(!response.builds.is_empty());
    for build in &response.builds {
        let count = build.slots.values().filter(|s| s.set_name == "Rage").count();
        assert!(count >= 3, "build does not actually carry 3 Rage-set runes: {count}");
    }
}

#[test]
fn intangible_rune_is_reported_with_its_resolved_set_not_the_wildcard_name() {
    let mut inventory = s1_inventory();
    inventory[0] = Rune {
        id: RuneId(1),
        slot: SlotId::Slot1,
        set: SetId::Intangible,
        main: (StatId::Atk, 100),
        prefix: None,
        subs: [None, None, None, None],
    };

    let response = run(inventory, BTreeMap::new(), BTreeMap::new());
    assert!(!response.builds.is_empty());
    let build = &response.builds[0];
    let slot1 = &build.slots[&1];
    assert_ne!(slot1.set_name, "Intangible", "an intangible rune must always resolve to a concrete set in the record");
}

#[test]
fn unresolved_names_are_dropped_as_diagnostics_not_errors() {
    let mut constraints = BTreeMap::new();
    constraints.insert("NOT_A_REAL_STAT".to_string(), 1.0);
    let response = run(s1_inventory(), constraints, BTreeMap::new());

    assert!(response
        .diagnostics
        .iter()
        .any(|d| matches!(d, runeforge_search::search::Diagnostic::UnknownStatName(name) if name == "NOT_A_REAL_STAT")));
    assert!(!response.builds.is_empty(), "an unknown stat name is a no-op, not a search failure");
}
