//! The stats engine: `compute_stats`.
//!
//! Step A accumulates rune contributions, step B counts sets (including
//! the intangible assignment), step C applies set bonuses, step D derives
//! the `_total`/`_bonus` fields using floor-division integer arithmetic.

use std::collections::BTreeMap;

use crate::monster::MonsterBaseStats;
use crate::rune::{Rune, RuneId};
use crate::set::{SetBonusDefinition, SetId};
use crate::stat::StatId;

/// The derived stats record produced by a completed six-rune build.
///
/// All totals are integers after the floor-division rounding rule. `score`
/// is the selected objective's output and is `f64` because not every
/// built-in objective (`EHP`, `DAMAGE_PROXY`) is integer-valued; it is left
/// at `0.0` by `compute_stats` and set by the caller once an objective has
/// been evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub cr_total: i64,
    pub cd_total: i64,
    pub atk_pct_total: i64,
    pub atk_flat_total: i64,
    pub atk_bonus: i64,
    pub atk_total: i64,
    pub hp_pct_total: i64,
    pub hp_flat_total: i64,
    pub hp_bonus: i64,
    pub hp_total: i64,
    pub def_pct_total: i64,
    pub def_flat_total: i64,
    pub def_bonus: i64,
    pub def_total: i64,
    pub spd_flat_total: i64,
    /// Swift's 2-set `SPD_PCT` bonus, applied to base SPD only. Kept as a
    /// distinct field rather than folded into `spd_total`'s derivation.
    pub spd_pct_from_swift: i64,
    pub spd_total: i64,
    pub res_total: i64,
    pub acc_total: i64,
    pub score: f64,
}

/// Accumulate one stat contribution into the matching additive bucket.
fn accumulate(totals: &mut BTreeMap<StatId, i64>, stat: StatId, value: i64) {
    *totals.entry(stat).or_insert(0) += value;
}

/// Step A: sum main + prefix + substats across all six runes into the
/// eleven additive buckets, seeded with the monster's base CR/CD.
fn accumulate_rune_contributions(runes: &[&Rune; 6], base: &MonsterBaseStats) -> BTreeMap<StatId, i64> {
    let mut totals = BTreeMap::new();
    totals.insert(StatId::Cr, base.cr);
    totals.insert(StatId::Cd, base.cd);

    for rune in runes {
        let (main_stat, main_value) = rune.main;
        accumulate(&mut totals, main_stat, main_value);

        if let Some((prefix_stat, prefix_value)) = rune.prefix {
            accumulate(&mut totals, prefix_stat, prefix_value);
        }

        for sub in rune.present_subs() {
            accumulate(&mut totals, sub.stat, sub.value);
        }
    }

    totals
}

/// Step B: count real-set runes plus intangible assignments into a
/// `SetId -> count` map. Intangible runes absent from the assignment
/// contribute to no set.
#[must_use]
pub fn count_sets(
    runes: &[&Rune; 6],
    intangible_assignment: &BTreeMap<RuneId, SetId>,
) -> BTreeMap<SetId, u8> {
    let mut counts = BTreeMap::new();
    for rune in runes {
        let effective_set = if rune.set == SetId::Intangible {
            match intangible_assignment.get(&rune.id) {
                Some(target) => *target,
                None => continue,
            }
        } else {
            rune.set
        };
        *counts.entry(effective_set).or_insert(0) += 1;
    }
    counts
}

/// Step C: apply stat-affecting set bonuses for every `(set, count)` pair
/// that clears its 2-piece/4-piece threshold. Proc sets are skipped.
/// Swift's `SPD_PCT` goes to `spd_pct_from_swift`, never `spd_total`.
fn apply_set_bonuses(
    totals: &mut BTreeMap<StatId, i64>,
    spd_pct_from_swift: &mut i64,
    set_counts: &BTreeMap<SetId, u8>,
    bonus_table: &BTreeMap<SetId, SetBonusDefinition>,
) {
    for (&set, &count) in set_counts {
        let Some(def) = bonus_table.get(&set) else {
            continue;
        };
        if def.is_proc {
            continue;
        }
        if count >= 2 {
            for (&stat, &value) in &def.bonus_2 {
                if set == SetId::Swift && stat == StatId::Spd {
                    *spd_pct_from_swift += value;
                } else {
                    accumulate(totals, stat, value);
                }
            }
        }
        if count >= 4 {
            for (&stat, &value) in &def.bonus_4 {
                accumulate(totals, stat, value);
            }
        }
    }
}

/// Step D: derive `_bonus`/`_total` fields using floor-division (truncate
/// toward zero) integer arithmetic.
///
/// Exposed so the pruning oracle can derive an admissible upper bound with
/// the exact same rounding rule rather than approximating it.
#[must_use]
pub fn derive_bonus_total(base: i64, pct_total: i64, flat_total: i64) -> (i64, i64) {
    let bonus = (base * pct_total) / 100 + flat_total;
    (bonus, base + bonus)
}

/// Compute the full `Stats` record for a completed six-rune build.
///
/// A pure function of the six runes, the intangible assignment, the base
/// stats, and the set-bonus table. `score` is left at `0.0` — objectives
/// are evaluated separately by `runeforge_kernel::objective` once the
/// full record is available.
#[must_use]
pub fn compute_stats(
    runes: &[&Rune; 6],
    base: &MonsterBaseStats,
    intangible_assignment: &BTreeMap<RuneId, SetId>,
    bonus_table: &BTreeMap<SetId, SetBonusDefinition>,
) -> Stats {
    let mut totals = accumulate_rune_contributions(runes, base);
    let set_counts = count_sets(runes, intangible_assignment);
    let mut spd_pct_from_swift = 0;
    apply_set_bonuses(&mut totals, &mut spd_pct_from_swift, &set_counts, bonus_table);

    let get = |s: StatId| totals.get(&s).copied().unwrap_or(0);

    let (atk_bonus, atk_total) = derive_bonus_total(base.atk, get(StatId::AtkPct), get(StatId::Atk));
    let (hp_bonus, hp_total) = derive_bonus_total(base.hp, get(StatId::HpPct), get(StatId::Hp));
    let (def_bonus, def_total) = derive_bonus_total(base.def, get(StatId::DefPct), get(StatId::Def));
    let spd_bonus = (base.spd * spd_pct_from_swift) / 100 + get(StatId::Spd);
    let spd_total = base.spd + spd_bonus;

    Stats {
        cr_total: get(StatId::Cr),
        cd_total: get(StatId::Cd),
        atk_pct_total: get(StatId::AtkPct),
        atk_flat_total: get(StatId::Atk),
        atk_bonus,
        atk_total,
        hp_pct_total: get(StatId::HpPct),
        hp_flat_total: get(StatId::Hp),
        hp_bonus,
        hp_total,
        def_pct_total: get(StatId::DefPct),
        def_flat_total: get(StatId::Def),
        def_bonus,
        def_total,
        spd_flat_total: get(StatId::Spd),
        spd_pct_from_swift,
        spd_total,
        res_total: get(StatId::Res),
        acc_total: get(StatId::Acc),
        score: 0.0,
    }
}
