//! The branch-and-bound DFS driver.
//!
//! Always returns a `SearchOutcome` — never `Err` — for any in-domain
//! termination. `SearchPolicy::validate` is the only legitimate error path,
//! and it runs before any DFS step (see `policy.rs`).

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use runeforge_kernel::monster::MonsterBaseStats;
use runeforge_kernel::objective::Objective;
use runeforge_kernel::rune::{Rune, SlotId};
use runeforge_kernel::set::{SetBonusDefinition, SetId};

use crate::constraints::{Constraints, SetConstraints};
use crate::intangible;
use crate::leaf::ScoredBuild;
use crate::oracle::PruningOracle;
use crate::policy::{SearchMode, SearchPolicy};
use crate::topk::ResultCollector;

/// Non-fatal tags accumulated while resolving caller-supplied names, or
/// while falling back to a default when a lookup misses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    UnknownSetName(String),
    UnknownStatName(String),
    UnknownObjective(String),
}

/// Why a search call stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    Completed,
    EmptyInventoryForSlot { slot: SlotId },
    InfeasibleConstraints,
    Cancelled { expansions_done: u64 },
}

/// The result of a single `search` call: always produced, tagged with why
/// it stopped rather than surfaced as an error.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub builds: Vec<ScoredBuild>,
    pub termination: TerminationReason,
    pub diagnostics: Vec<Diagnostic>,
}

/// Group legal runes by slot. Illegal runes (failing `validate_rune`) are
/// silently discarded, matching the pre-filter the driver assumes.
fn bucket_by_slot(inventory: &[Rune]) -> [Vec<&Rune>; 6] {
    let mut buckets: [Vec<&Rune>; 6] = Default::default();
    for rune in inventory {
        if runeforge_kernel::legality::validate_rune(rune) {
            buckets[usize::from(rune.slot.number() - 1)].push(rune);
        }
    }
    buckets
}

/// Cheap per-rune heuristic for `fast` mode's candidate trim: the sum of
/// every numeric value the rune carries (main + prefix + substats). Not
/// objective-aware; `fast` mode makes no optimality guarantee.
fn fast_heuristic(rune: &Rune) -> i64 {
    let mut total = rune.main.1;
    if let Some((_, value)) = rune.prefix {
        total += value;
    }
    for sub in rune.present_subs() {
        total += sub.value;
    }
    total
}

fn apply_fast_trim(candidates_per_slot: &mut [Vec<&Rune>; 6], cap: u64) {
    let cap = usize::try_from(cap).unwrap_or(usize::MAX);
    for bucket in candidates_per_slot.iter_mut() {
        bucket.sort_by_key(|r| std::cmp::Reverse(fast_heuristic(r)));
        bucket.truncate(cap);
    }
}

struct DfsContext<'a> {
    candidates_per_slot: &'a [Vec<&'a Rune>; 6],
    order: [usize; 6],
    oracle: &'a PruningOracle<'a>,
    base: &'a MonsterBaseStats,
    bonus_table: &'a BTreeMap<SetId, SetBonusDefinition>,
    objective: &'a dyn Objective,
    score_family_prunable: bool,
    constraints: &'a Constraints,
    set_constraints: &'a SetConstraints,
    cancel: &'a AtomicBool,
    max_expansions: u64,
    expansions: u64,
    cancelled: bool,
}

impl<'a> DfsContext<'a> {
    fn run(&mut self, depth: usize, chosen: &mut [Option<&'a Rune>; 6], collector: &mut ResultCollector) {
        if self.cancelled {
            return;
        }
        if self.cancel.load(Ordering::Relaxed) {
            self.cancelled = true;
            return;
        }
        self.expansions += 1;
        if self.expansions > self.max_expansions {
            self.cancelled = true;
            return;
        }

        if depth == 6 {
            let runes: [&Rune; 6] = std::array::from_fn(|i| chosen[i].expect("all six slots filled"));
            let resolved = intangible::resolve(
                &runes,
                self.base,
                self.bonus_table,
                |stats| self.objective.evaluate(stats),
                self.constraints,
                self.set_constraints,
            );
            if let Some((assignment, stats)) = resolved {
                if stats.score > 0.0 {
                    let runes_owned: [Rune; 6] = std::array::from_fn(|i| runes[i].clone());
                    collector.offer(ScoredBuild { runes: runes_owned, intangible_assignment: assignment, stats });
                }
            }
            return;
        }

        let remaining = &self.order[depth..];
        if !self.oracle.feasible(chosen, remaining, self.base, self.constraints, self.set_constraints) {
            return;
        }
        if self.score_family_prunable {
            let upper_bound = self.oracle.score_upper_bound(chosen, remaining, self.base);
            if collector.should_prune(upper_bound) {
                return;
            }
        }

        let slot = self.order[depth];
        for rune in &self.candidates_per_slot[slot] {
            if rune.set == SetId::Intangible && chosen.iter().flatten().any(|r| r.set == SetId::Intangible) {
                continue;
            }
            chosen[slot] = Some(rune);
            self.run(depth + 1, chosen, collector);
            if self.cancelled {
                chosen[slot] = None;
                return;
            }
        }
        chosen[slot] = None;
    }
}

/// Run the full branch-and-bound search described in §4.7.
#[must_use]
pub fn search(
    inventory: &[Rune],
    base: &MonsterBaseStats,
    objective: &dyn Objective,
    constraints: &Constraints,
    set_constraints: &SetConstraints,
    bonus_table: &BTreeMap<SetId, SetBonusDefinition>,
    policy: &SearchPolicy,
    cancel: &AtomicBool,
    diagnostics: Vec<Diagnostic>,
) -> SearchOutcome {
    let mut candidates_per_slot = bucket_by_slot(inventory);

    for slot in SlotId::ALL {
        if candidates_per_slot[usize::from(slot.number() - 1)].is_empty() {
            return SearchOutcome { builds: Vec::new(), termination: TerminationReason::EmptyInventoryForSlot { slot }, diagnostics };
        }
    }

    if policy.mode == SearchMode::Fast {
        apply_fast_trim(&mut candidates_per_slot, policy.fast_candidates_per_slot);
    }

    let mut order: [usize; 6] = [0, 1, 2, 3, 4, 5];
    order.sort_by_key(|&slot| candidates_per_slot[slot].len());

    let oracle = PruningOracle::new(&candidates_per_slot, bonus_table);
    let mut collector = ResultCollector::new(policy.return_policy, policy.return_all, policy.top_n);

    let mut ctx = DfsContext {
        candidates_per_slot: &candidates_per_slot,
        order,
        oracle: &oracle,
        base,
        bonus_table,
        objective,
        score_family_prunable: objective.name() == "SCORE",
        constraints,
        set_constraints,
        cancel,
        max_expansions: policy.max_expansions,
        expansions: 0,
        cancelled: false,
    };

    let mut chosen: [Option<&Rune>; 6] = [None; 6];
    ctx.run(0, &mut chosen, &mut collector);

    let builds = collector.finish();
    let termination = if ctx.cancelled {
        TerminationReason::Cancelled { expansions_done: ctx.expansions }
    } else if builds.is_empty() {
        TerminationReason::InfeasibleConstraints
    } else {
        TerminationReason::Completed
    };

    SearchOutcome { builds, termination, diagnostics }
}
