//! On a fixture small enough to brute-force, exhaustive mode must find the
//! same optimum brute-force enumeration finds — the pruning oracle must
//! never discard the true best build.

mod support;

use std::sync::atomic::AtomicBool;

use runeforge_api::{search_builds, SearchContext, SearchRequest};
use runeforge_kernel::objective::Score;
use runeforge_search::constraints::{Constraints, SetConstraints};
use runeforge_search::policy::{ReturnPolicy, SearchMode, SearchPolicy};

use support::{brute_force_score, run_search, s1_inventory, default_base};

#[test]
fn exhaustive_mode_matches_brute_force_optimum() {
    let inventory = s1_inventory();
    let base = (900, 104, 10_000, 500);
    let reference = brute_force_score(&inventory, &runeforge_kernel::monster::MonsterBaseStats::new(base.2, base.0, base.3, base.1));

    let ctx = SearchContext::new();
    let mut request = SearchRequest::new(inventory, base.0, base.1, base.2, base.3);
    request.top_n = 64;
    request.return_all = true;
    let cancel = AtomicBool::new(false);
    let response = search_builds(&ctx, &request, &cancel).expect("valid policy");

    assert_eq!(response.builds.len(), reference.len());
    assert!((response.builds[0].score - reference[0].1).abs() < f64::EPSILON);

    let mut response_scores: Vec<f64> = response.builds.iter().map(|b| b.score).collect();
    let mut reference_scores: Vec<f64> = reference.iter().map(|(_, s)| *s).collect();
    response_scores.sort_by(f64::total_cmp);
    reference_scores.sort_by(f64::total_cmp);
    assert_eq!(response_scores, reference_scores, "exhaustive search must return exactly the brute-force score multiset");
}

/// `s1_inventory`'s 64 legal combinations all score identically under
/// `SCORE`, so the admissible upper bound for every unexplored subtree is
/// exactly equal to the best build found so far. `AllAtBest` must keep
/// expanding past that exact-equal bound until it has collected `top_n`
/// tied builds — a regression here means the collector started pruning
/// before it was full, or used a non-strict comparison that treats an
/// exact tie as prunable.
#[test]
fn all_at_best_collects_every_tied_build_up_to_top_n_even_when_every_bound_ties_the_best() {
    let inventory = s1_inventory();
    let reference = brute_force_score(&inventory, &default_base());
    assert_eq!(reference.len(), 64);
    assert!(
        reference.iter().all(|(_, score)| (*score - reference[0].1).abs() < f64::EPSILON),
        "fixture precondition: every legal combination must score identically"
    );

    let policy = SearchPolicy {
        mode: SearchMode::Exhaustive,
        top_n: 10,
        return_policy: ReturnPolicy::AllAtBest,
        return_all: false,
        ..SearchPolicy::default()
    };
    let outcome = run_search(
        &inventory,
        &default_base(),
        &Score,
        &Constraints::new(),
        &SetConstraints::new(),
        &policy,
    );

    assert_eq!(outcome.builds.len(), 10, "must return the full top_n of tied builds, not stop at the first one");
    assert!(outcome.builds.iter().all(|b| (b.stats.score - reference[0].1).abs() < f64::EPSILON));
}

#[test]
fn exhaustive_mode_never_returns_more_builds_than_exist() {
    let inventory = s1_inventory();
    let ctx = SearchContext::new();
    let mut request = SearchRequest::new(inventory, 900, 104, 10_000, 500);
    request.top_n = 1000;
    request.return_all = true;
    let cancel = AtomicBool::new(false);
    let response = search_builds(&ctx, &request, &cancel).expect("valid policy");
    assert_eq!(response.builds.len(), 64);
}
