//! `SearchContext`: the caller-constructed bundle of tunables the core
//! needs but never loads itself — no global singleton state (per the
//! redesign guidance against server-wide loaded-rune/monster-registry
//! caches).

use std::collections::BTreeMap;

use runeforge_kernel::objective::{self, Objective};
use runeforge_kernel::set::{default_set_bonus_table, SetBonusDefinition, SetId};
use runeforge_search::search::Diagnostic;

/// Bonus table plus objective registry, constructed once by the caller and
/// passed to every `search_builds` call.
pub struct SearchContext {
    bonus_table: BTreeMap<SetId, SetBonusDefinition>,
    objectives: BTreeMap<String, Box<dyn Objective>>,
}

impl SearchContext {
    /// The default bonus table and the ten built-in objectives, no overlay.
    #[must_use]
    pub fn new() -> Self {
        let mut objectives: BTreeMap<String, Box<dyn Objective>> = BTreeMap::new();
        for name in [
            "SCORE", "ATK_TOTAL", "ATK_BONUS", "HP_TOTAL", "DEF_TOTAL", "CR", "CD", "SPD", "EHP",
            "DAMAGE_PROXY",
        ] {
            if let Some(built_in) = objective::by_name(name) {
                objectives.insert(name.to_string(), built_in);
            }
        }
        Self { bonus_table: default_set_bonus_table(), objectives }
    }

    /// Replace entries in the bonus table. Never mutates the static
    /// default in place — each `new()` call and each overlay starts from
    /// a fresh owned copy.
    pub fn overlay_bonus(&mut self, set: SetId, definition: SetBonusDefinition) {
        self.bonus_table.insert(set, definition);
    }

    #[must_use]
    pub fn bonus_table(&self) -> &BTreeMap<SetId, SetBonusDefinition> {
        &self.bonus_table
    }

    /// Register an additional objective, or replace a built-in under the
    /// same name.
    pub fn register_objective(&mut self, name: impl Into<String>, objective: Box<dyn Objective>) {
        self.objectives.insert(name.into(), objective);
    }

    /// Resolve an objective by name, falling back to `SCORE` with a
    /// diagnostic tag when the name is unregistered.
    #[must_use]
    pub fn resolve_objective(&self, name: &str) -> (&dyn Objective, Option<Diagnostic>) {
        if let Some(objective) = self.objectives.get(name) {
            return (objective.as_ref(), None);
        }
        (
            self.objectives["SCORE"].as_ref(),
            Some(Diagnostic::UnknownObjective(name.to_string())),
        )
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}
