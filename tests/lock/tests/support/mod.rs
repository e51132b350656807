//! Shared fixtures and a brute-force reference solver for cross-cutting
//! property tests.

use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;

use runeforge_kernel::legality::validate_build;
use runeforge_kernel::monster::MonsterBaseStats;
use runeforge_kernel::objective::{Objective, Score};
use runeforge_kernel::rune::{Rune, RuneId, SlotId, SubStat};
use runeforge_kernel::set::{default_set_bonus_table, SetId};
use runeforge_kernel::stat::StatId;
use runeforge_kernel::stats::compute_stats;
use runeforge_search::constraints::{Constraints, SetConstraints};
use runeforge_search::policy::SearchPolicy;
use runeforge_search::search::{self, SearchOutcome};

#[allow(dead_code)]
pub fn plain_rune(id: u64, slot: SlotId, set: SetId, main: StatId) -> Rune {
    Rune { id: RuneId(id), slot, set, main: (main, 100), subs: [None, None, None, None], prefix: None }
}

#[allow(dead_code)]
pub fn plain_rune_with_subs(id: u64, slot: SlotId, set: SetId, main: (StatId, i64), subs: [Option<SubStat>; 4]) -> Rune {
    Rune { id: RuneId(id), slot, set, main, subs, prefix: None }
}

#[allow(dead_code)]
pub fn default_base() -> MonsterBaseStats {
    MonsterBaseStats::new(10_000, 900, 500, 104)
}

/// Scenario S1: twelve runes, two per slot, all `Rage` except slots 5/6
/// `Blade`.
#[allow(dead_code)]
pub fn s1_inventory() -> Vec<Rune> {
    vec![
        plain_rune(1, SlotId::Slot1, SetId::Rage, StatId::Atk),
        plain_rune(2, SlotId::Slot1, SetId::Rage, StatId::Atk),
        plain_rune(3, SlotId::Slot2, SetId::Rage, StatId::AtkPct),
        plain_rune(4, SlotId::Slot2, SetId::Rage, StatId::AtkPct),
        plain_rune(5, SlotId::Slot3, SetId::Rage, StatId::Def),
        plain_rune(6, SlotId::Slot3, SetId::Rage, StatId::Def),
        plain_rune(7, SlotId::Slot4, SetId::Rage, StatId::Cd),
        plain_rune(8, SlotId::Slot4, SetId::Rage, StatId::Cd),
        plain_rune(9, SlotId::Slot5, SetId::Blade, StatId::Hp),
        plain_rune(10, SlotId::Slot5, SetId::Blade, StatId::Hp),
        plain_rune(11, SlotId::Slot6, SetId::Blade, StatId::AtkPct),
        plain_rune(12, SlotId::Slot6, SetId::Blade, StatId::AtkPct),
    ]
}

#[allow(dead_code)]
pub fn run_search(
    inventory: &[Rune],
    base: &MonsterBaseStats,
    objective: &dyn Objective,
    constraints: &Constraints,
    set_constraints: &SetConstraints,
    policy: &SearchPolicy,
) -> SearchOutcome {
    let table = default_set_bonus_table();
    let cancel = AtomicBool::new(false);
    search::search(inventory, base, objective, constraints, set_constraints, &table, policy, &cancel, Vec::new())
}

/// Brute-force every legal six-rune combination (one rune per slot,
/// respecting I2), score with `SCORE`, and return the full ranked list —
/// the reference the exhaustive-mode driver must match on small fixtures.
#[allow(dead_code)]
pub fn brute_force_score(inventory: &[Rune], base: &MonsterBaseStats) -> Vec<(Vec<u64>, f64)> {
    let table = default_set_bonus_table();
    let mut by_slot: [Vec<&Rune>; 6] = Default::default();
    for rune in inventory {
        by_slot[usize::from(rune.slot.number() - 1)].push(rune);
    }

    let mut results = Vec::new();
    for &r0 in &by_slot[0] {
        for &r1 in &by_slot[1] {
            for &r2 in &by_slot[2] {
                for &r3 in &by_slot[3] {
                    for &r4 in &by_slot[4] {
                        for &r5 in &by_slot[5] {
                            let runes = [r0, r1, r2, r3, r4, r5];
                            if !validate_build(&runes) {
                                continue;
                            }
                            let stats = compute_stats(&runes, base, &BTreeMap::new(), &table);
                            let score = Score.evaluate(&stats);
                            let ids = runes.iter().map(|r| r.id.0).collect();
                            results.push((ids, score));
                        }
                    }
                }
            }
        }
    }
    results.sort_by(|a, b| b.1.total_cmp(&a.1));
    results
}
