//! Repeated calls with identical input must produce identical, identically
//! ordered output — no reliance on map/set iteration order or timing.

mod support;

use std::sync::atomic::AtomicBool;

use runeforge_api::{search_builds, SearchContext, SearchRequest};

use support::s1_inventory;

#[test]
fn identical_requests_produce_identical_ranked_output() {
    let ctx = SearchContext::new();
    let inventory = s1_inventory();

    let run = |inventory: Vec<_>| {
        let request = SearchRequest::new(inventory, 900, 104, 10_000, 500);
        let cancel = AtomicBool::new(false);
        search_builds(&ctx, &request, &cancel).expect("valid policy")
    };

    let first = run(inventory.clone());
    let second = run(inventory);

    assert_eq!(first.termination, second.termination);
    assert_eq!(first.builds.len(), second.builds.len());
    for (a, b) in first.builds.iter().zip(second.builds.iter()) {
        assert_eq!(a.score, b.score);
        assert_eq!(a.cd_total, b.cd_total);
        let a_ids: Vec<u64> = a.slots.values().map(|s| s.rune_id).collect();
        let b_ids: Vec<u64> = b.slots.values().map(|s| s.rune_id).collect();
        assert_eq!(a_ids, b_ids, "tie-break by rune-id sequence must be stable across runs");
    }
}

#[test]
fn repeated_calls_on_a_shared_context_do_not_drift() {
    let ctx = SearchContext::new();
    let inventory = s1_inventory();
    let mut previous_top_score = None;

    for _ in 0..5 {
        let request = SearchRequest::new(inventory.clone(), 900, 104, 10_000, 500);
        let cancel = AtomicBool::new(false);
        let response = search_builds(&ctx, &request, &cancel).expect("valid policy");
        let top_score = response.builds[0].score;
        if let Some(prev) = previous_top_score {
            assert_eq!(prev, top_score, "the same context and input must keep returning the same top score");
        }
        previous_top_score = Some(top_score);
    }
}
