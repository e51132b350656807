//! Tightening a stat floor must never increase the feasible result count;
//! relaxing one must never decrease it.

mod support;

use std::sync::atomic::AtomicBool;

use runeforge_api::{search_builds, SearchContext, SearchRequest};

use support::s1_inventory;

fn count_with_cd_floor(floor: f64) -> usize {
    let ctx = SearchContext::new();
    let mut request = SearchRequest::new(s1_inventory(), 900, 104, 10_000, 500);
    request.top_n = 64;
    request.return_all = true;
    request.constraints.insert("CD".to_string(), floor);
    let cancel = AtomicBool::new(false);
    search_builds(&ctx, &request, &cancel).expect("valid policy").builds.len()
}

#[test]
fn raising_a_stat_floor_never_grows_the_result_set() {
    let loose = count_with_cd_floor(0.0);
    let tight = count_with_cd_floor(90.0);
    let impossible = count_with_cd_floor(10_000.0);

    assert!(tight <= loose, "a stricter floor must not admit more builds than a looser one");
    assert!(impossible <= tight);
    assert_eq!(impossible, 0, "a floor above every achievable value must admit nothing");
}

#[test]
fn the_loosest_floor_admits_every_legal_combination() {
    assert_eq!(count_with_cd_floor(0.0), 64);
}

#[test]
fn requiring_more_pieces_of_a_set_never_grows_the_result_set() {
    let run = |count: u8| {
        let ctx = SearchContext::new();
        let mut request = SearchRequest::new(s1_inventory(), 900, 104, 10_000, 500);
        request.top_n = 64;
        request.return_all = true;
        request.set_constraints.insert("Rage".to_string(), u8::from(count));
        let cancel = AtomicBool::new(false);
        search_builds(&ctx, &request, &cancel).expect("valid policy").builds.len()
    };

    let none_required = run(0);
    let two_required = run(2);
    let four_required = run(4);
    assert!(two_required <= none_required);
    assert!(four_required <= two_required);
}
