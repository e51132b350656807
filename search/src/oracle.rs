//! Pruning oracle: feasibility and admissible upper-bound tests over a
//! partial six-slot assignment.
//!
//! Per-slot max-contribution tables are precomputed once per search call
//! (teacher convention: read-only tables shared across the hot path rather
//! than recomputed per node) so both `feasible` and `upper_bound` are O(1)
//! amortized per call once construction is paid for.

use std::collections::BTreeMap;

use runeforge_kernel::objective::Objective as _;
use runeforge_kernel::rune::Rune;
use runeforge_kernel::set::{SetBonusDefinition, SetId};
use runeforge_kernel::stat::StatId;
use runeforge_kernel::stats::derive_bonus_total;
use runeforge_kernel::stats::Stats;

use crate::constraints::{Constraints, SetConstraints};

/// Precomputed per-slot tables plus a read-only reference to the set-bonus
/// table, built once at the start of a `search_builds` call.
pub struct PruningOracle<'a> {
    bonus_table: &'a BTreeMap<SetId, SetBonusDefinition>,
    /// `max_stat_contrib[slot][stat]`: the best single-rune contribution to
    /// `stat` achievable from slot `slot` (0-indexed).
    max_stat_contrib: [BTreeMap<StatId, i64>; 6],
    /// `slot_has_set[slot][set]`: whether any candidate rune in `slot` is
    /// that exact set, or is `Intangible` (and so could be merged into it).
    slot_has_set: [BTreeMap<SetId, bool>; 6],
}

fn rune_contribution(rune: &Rune, stat: StatId) -> i64 {
    let mut total = 0;
    if rune.main.0 == stat {
        total += rune.main.1;
    }
    if let Some((prefix_stat, prefix_value)) = rune.prefix {
        if prefix_stat == stat {
            total += prefix_value;
        }
    }
    for sub in rune.present_subs() {
        if sub.stat == stat {
            total += sub.value;
        }
    }
    total
}

impl<'a> PruningOracle<'a> {
    #[must_use]
    pub fn new(
        candidates_per_slot: &[Vec<&Rune>; 6],
        bonus_table: &'a BTreeMap<SetId, SetBonusDefinition>,
    ) -> Self {
        let max_stat_contrib = std::array::from_fn(|slot_idx| {
            let mut table = BTreeMap::new();
            for stat in StatId::ALL {
                let best = candidates_per_slot[slot_idx]
                    .iter()
                    .map(|r| rune_contribution(r, stat))
                    .max()
                    .unwrap_or(0);
                table.insert(stat, best);
            }
            table
        });

        let slot_has_set = std::array::from_fn(|slot_idx| {
            let mut table = BTreeMap::new();
            for set in SetId::ALL {
                let has = candidates_per_slot[slot_idx]
                    .iter()
                    .any(|r| r.set == set || r.set == SetId::Intangible);
                table.insert(set, has);
            }
            table
        });

        Self { bonus_table, max_stat_contrib, slot_has_set }
    }

    /// The maximum piece count each set could reach given the runes chosen
    /// so far plus whatever the remaining slots could optimistically add
    /// (each remaining slot counts as `+1` if any of its candidates is the
    /// target set or `Intangible`).
    fn max_possible_by_set(
        &self,
        chosen: &[Option<&Rune>; 6],
        remaining: &[usize],
    ) -> BTreeMap<SetId, u8> {
        let mut counts = BTreeMap::new();
        for set in SetId::ALL {
            let current = chosen
                .iter()
                .flatten()
                .filter(|r| r.set == set || r.set == SetId::Intangible)
                .count();
            let potential = remaining
                .iter()
                .filter(|&&slot_idx| self.slot_has_set[slot_idx][&set])
                .count();
            #[allow(clippy::cast_possible_truncation)]
            counts.insert(set, (current + potential) as u8);
        }
        counts
    }

    /// An admissible (never underestimating) stats record: current direct
    /// contributions, plus the best achievable per-slot addition for every
    /// remaining slot, plus every set bonus that could still complete.
    fn optimistic_stats(&self, chosen: &[Option<&Rune>; 6], remaining: &[usize]) -> Stats {
        let max_possible = self.max_possible_by_set(chosen, remaining);

        let mut totals: BTreeMap<StatId, i64> = StatId::ALL.iter().map(|&s| (s, 0)).collect();
        for rune in chosen.iter().flatten() {
            for stat in StatId::ALL {
                *totals.get_mut(&stat).unwrap() += rune_contribution(rune, stat);
            }
        }
        for &slot_idx in remaining {
            for stat in StatId::ALL {
                *totals.get_mut(&stat).unwrap() += self.max_stat_contrib[slot_idx][&stat];
            }
        }

        let mut spd_pct_from_swift = 0;
        for (&set, &count) in &max_possible {
            let Some(def) = self.bonus_table.get(&set) else { continue };
            if def.is_proc {
                continue;
            }
            if count >= 2 {
                for (&stat, &value) in &def.bonus_2 {
                    if set == SetId::Swift && stat == StatId::Spd {
                        spd_pct_from_swift += value;
                    } else {
                        *totals.get_mut(&stat).unwrap() += value;
                    }
                }
            }
            if count >= 4 {
                for (&stat, &value) in &def.bonus_4 {
                    *totals.get_mut(&stat).unwrap() += value;
                }
            }
        }

        let get = |s: StatId| totals.get(&s).copied().unwrap_or(0);
        Stats {
            cr_total: get(StatId::Cr),
            cd_total: get(StatId::Cd),
            atk_pct_total: get(StatId::AtkPct),
            atk_flat_total: get(StatId::Atk),
            atk_bonus: 0,
            atk_total: 0,
            hp_pct_total: get(StatId::HpPct),
            hp_flat_total: get(StatId::Hp),
            hp_bonus: 0,
            hp_total: 0,
            def_pct_total: get(StatId::DefPct),
            def_flat_total: get(StatId::Def),
            def_bonus: 0,
            def_total: 0,
            spd_flat_total: get(StatId::Spd),
            spd_pct_from_swift,
            spd_total: 0,
            res_total: get(StatId::Res),
            acc_total: get(StatId::Acc),
            score: 0.0,
        }
    }

    /// An admissible upper-bound `Stats` record, with base stats folded in
    /// through the same floor-division derivation the scoring engine uses.
    fn optimistic_stats_with_base(
        &self,
        chosen: &[Option<&Rune>; 6],
        remaining: &[usize],
        base: &runeforge_kernel::monster::MonsterBaseStats,
    ) -> Stats {
        let mut stats = self.optimistic_stats(chosen, remaining);
        stats.cr_total += base.cr;
        stats.cd_total += base.cd;
        let (atk_bonus, atk_total) = derive_bonus_total(base.atk, stats.atk_pct_total, stats.atk_flat_total);
        let (hp_bonus, hp_total) = derive_bonus_total(base.hp, stats.hp_pct_total, stats.hp_flat_total);
        let (def_bonus, def_total) = derive_bonus_total(base.def, stats.def_pct_total, stats.def_flat_total);
        let spd_bonus = (base.spd * stats.spd_pct_from_swift) / 100 + stats.spd_flat_total;
        stats.atk_bonus = atk_bonus;
        stats.atk_total = atk_total;
        stats.hp_bonus = hp_bonus;
        stats.hp_total = hp_total;
        stats.def_bonus = def_bonus;
        stats.def_total = def_total;
        stats.spd_total = base.spd + spd_bonus;
        stats.score = runeforge_kernel::objective::Score.evaluate(&stats);
        stats
    }

    /// `true` if some completion of `chosen` could still satisfy every set
    /// and stat constraint.
    #[must_use]
    pub fn feasible(
        &self,
        chosen: &[Option<&Rune>; 6],
        remaining: &[usize],
        base: &runeforge_kernel::monster::MonsterBaseStats,
        constraints: &Constraints,
        set_constraints: &SetConstraints,
    ) -> bool {
        if !set_constraints.is_empty() {
            let max_possible = self.max_possible_by_set(chosen, remaining);
            if !set_constraints.passes(&max_possible) {
                return false;
            }
        }
        let optimistic = self.optimistic_stats_with_base(chosen, remaining, base);
        constraints.passes(&optimistic)
    }

    /// Admissible upper bound on the `SCORE` objective for any completion
    /// of `chosen`. Only meaningful for `SCORE`-family objectives; callers
    /// must not use it to prune under a different objective.
    #[must_use]
    pub fn score_upper_bound(
        &self,
        chosen: &[Option<&Rune>; 6],
        remaining: &[usize],
        base: &runeforge_kernel::monster::MonsterBaseStats,
    ) -> f64 {
        self.optimistic_stats_with_base(chosen, remaining, base).score
    }
}
