//! `BuildRecord`: the wire shape of a scored build, identical at every call
//! site per the external-interface contract.

use std::collections::BTreeMap;

use runeforge_kernel::rune::Rune;
use runeforge_kernel::set::SetId;
use runeforge_kernel::stat::StatId;
use runeforge_search::leaf::ScoredBuild;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SlotRecord {
    pub rune_id: u64,
    pub set_name: String,
    pub main: String,
    pub prefix: Option<String>,
    pub subs: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildRecord {
    pub score: f64,
    pub cr_total: i64,
    pub cd_total: i64,
    pub atk_pct_total: i64,
    pub atk_flat_total: i64,
    pub atk_bonus: i64,
    pub atk_total: i64,
    pub hp_pct_total: i64,
    pub hp_total: i64,
    pub def_pct_total: i64,
    pub def_total: i64,
    pub spd_total: i64,
    pub intangible_assignment: String,
    pub slots: BTreeMap<u8, SlotRecord>,
}

fn format_stat(stat: StatId, value: i64) -> String {
    format!("{} {value}", stat.name())
}

fn slot_record(rune: &Rune, effective_set: SetId) -> SlotRecord {
    let (main_stat, main_value) = rune.main;
    SlotRecord {
        rune_id: rune.id.0,
        set_name: effective_set.name().to_string(),
        main: format_stat(main_stat, main_value),
        prefix: rune.prefix.map(|(stat, value)| format_stat(stat, value)),
        subs: rune.present_subs().map(|sub| format_stat(sub.stat, sub.value)).collect(),
    }
}

impl From<&ScoredBuild> for BuildRecord {
    fn from(build: &ScoredBuild) -> Self {
        let intangible_assignment = build
            .intangible_assignment
            .values()
            .next()
            .map_or_else(|| "none".to_string(), |set| set.name().to_string());

        let mut slots = BTreeMap::new();
        for rune in &build.runes {
            let effective_set = if rune.set == SetId::Intangible {
                build.intangible_assignment.get(&rune.id).copied().unwrap_or(SetId::Intangible)
            } else {
                rune.set
            };
            slots.insert(rune.slot.number(), slot_record(rune, effective_set));
        }

        Self {
            score: build.stats.score,
            cr_total: build.stats.cr_total,
            cd_total: build.stats.cd_total,
            atk_pct_total: build.stats.atk_pct_total,
            atk_flat_total: build.stats.atk_flat_total,
            atk_bonus: build.stats.atk_bonus,
            atk_total: build.stats.atk_total,
            hp_pct_total: build.stats.hp_pct_total,
            hp_total: build.stats.hp_total,
            def_pct_total: build.stats.def_pct_total,
            def_total: build.stats.def_total,
            spd_total: build.stats.spd_total,
            intangible_assignment,
            slots,
        }
    }
}
