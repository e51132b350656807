//! The intangible-rune resolver.
//!
//! At most one `Intangible` rune may appear in a build. It carries no set
//! of its own; this module enumerates which real set it should be merged
//! into (or left unassigned) so the stats engine can apply set bonuses as
//! if the rune actually belonged to that set.

use std::collections::BTreeMap;

use runeforge_kernel::monster::MonsterBaseStats;
use runeforge_kernel::rune::{Rune, RuneId};
use runeforge_kernel::set::{SetBonusDefinition, SetId};
use runeforge_kernel::stats::{compute_stats, count_sets, Stats};

use crate::constraints::{Constraints, SetConstraints};

/// The sets an `Intangible` rune may be merged into: every non-proc set
/// plus any set named in a `set_constraints` requirement (so a caller can
/// demand, say, a 2-piece `Despair` even though the engine does not model
/// its proc payload).
fn candidate_targets(set_constraints: &SetConstraints) -> Vec<SetId> {
    let mut targets: Vec<SetId> = SetId::ALL
        .into_iter()
        .filter(|&s| s != SetId::Intangible && !s.is_proc())
        .collect();
    for (set, _) in set_constraints.iter() {
        if !targets.contains(&set) {
            targets.push(set);
        }
    }
    targets
}

/// Resolve the best feasible assignment for a build's single `Intangible`
/// rune (if any), returning the `(assignment, stats)` pair with the
/// highest `stats.score` among feasible candidates, or `None` if no
/// assignment (including leaving it unassigned) satisfies every
/// constraint.
///
/// `runes` must contain at most one `Intangible` rune; the caller enforces
/// that invariant before search ever reaches this point.
#[must_use]
pub fn resolve(
    runes: &[&Rune; 6],
    base: &MonsterBaseStats,
    bonus_table: &BTreeMap<SetId, SetBonusDefinition>,
    score: impl Fn(&Stats) -> f64,
    constraints: &Constraints,
    set_constraints: &SetConstraints,
) -> Option<(BTreeMap<RuneId, SetId>, Stats)> {
    let intangible = runes.iter().find(|r| r.set == SetId::Intangible);

    let Some(intangible) = intangible else {
        let assignment = BTreeMap::new();
        let stats = with_score(compute_stats(runes, base, &assignment, bonus_table), &score);
        return feasible(runes, &assignment, &stats, constraints, set_constraints)
            .then_some((assignment, stats));
    };

    let mut best: Option<(BTreeMap<RuneId, SetId>, Stats)> = None;

    // Unassigned is always a candidate: the rune contributes nothing to
    // any set, matching `compute_stats`'s treatment of an absent mapping.
    let unassigned = BTreeMap::new();
    let unassigned_stats = with_score(compute_stats(runes, base, &unassigned, bonus_table), &score);
    if feasible(runes, &unassigned, &unassigned_stats, constraints, set_constraints) {
        best = Some((unassigned, unassigned_stats));
    }

    for target in candidate_targets(set_constraints) {
        let mut assignment = BTreeMap::new();
        assignment.insert(intangible.id, target);
        let stats = with_score(compute_stats(runes, base, &assignment, bonus_table), &score);
        if !feasible(runes, &assignment, &stats, constraints, set_constraints) {
            continue;
        }
        let is_better = match &best {
            Some((_, previous)) => stats.score > previous.score,
            None => true,
        };
        if is_better {
            best = Some((assignment, stats));
        }
    }

    best
}

fn with_score(mut stats: Stats, score: &impl Fn(&Stats) -> f64) -> Stats {
    stats.score = score(&stats);
    stats
}

fn feasible(
    runes: &[&Rune; 6],
    assignment: &BTreeMap<RuneId, SetId>,
    stats: &Stats,
    constraints: &Constraints,
    set_constraints: &SetConstraints,
) -> bool {
    if !constraints.passes(stats) {
        return false;
    }
    if set_constraints.is_empty() {
        return true;
    }
    let counts = count_sets(runes, assignment);
    set_constraints.passes(&counts)
}
