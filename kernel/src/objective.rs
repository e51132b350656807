//! Pluggable scoring objectives: the `Objective` trait plus the built-in
//! named objectives evaluated against a completed `Stats` record.

use crate::stats::Stats;

/// A scoring function over a completed build's stats.
///
/// Implementations are stateless and side-effect free; `evaluate` must
/// give the same output for the same `Stats` input every time so search
/// results stay deterministic across runs.
pub trait Objective {
    /// The name this objective is registered and selected under.
    fn name(&self) -> &'static str;

    fn evaluate(&self, stats: &Stats) -> f64;
}

/// `cd_total * 10 + atk_bonus + 200`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Score;

impl Objective for Score {
    fn name(&self) -> &'static str {
        "SCORE"
    }

    fn evaluate(&self, stats: &Stats) -> f64 {
        (stats.cd_total * 10 + stats.atk_bonus + 200) as f64
    }
}

/// Total attack, including base.
#[derive(Debug, Clone, Copy, Default)]
pub struct AtkTotal;

impl Objective for AtkTotal {
    fn name(&self) -> &'static str {
        "ATK_TOTAL"
    }

    fn evaluate(&self, stats: &Stats) -> f64 {
        stats.atk_total as f64
    }
}

/// Attack gained from runes and set bonuses alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct AtkBonus;

impl Objective for AtkBonus {
    fn name(&self) -> &'static str {
        "ATK_BONUS"
    }

    fn evaluate(&self, stats: &Stats) -> f64 {
        stats.atk_bonus as f64
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HpTotal;

impl Objective for HpTotal {
    fn name(&self) -> &'static str {
        "HP_TOTAL"
    }

    fn evaluate(&self, stats: &Stats) -> f64 {
        stats.hp_total as f64
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefTotal;

impl Objective for DefTotal {
    fn name(&self) -> &'static str {
        "DEF_TOTAL"
    }

    fn evaluate(&self, stats: &Stats) -> f64 {
        stats.def_total as f64
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CriticalRate;

impl Objective for CriticalRate {
    fn name(&self) -> &'static str {
        "CR"
    }

    fn evaluate(&self, stats: &Stats) -> f64 {
        stats.cr_total as f64
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CriticalDamage;

impl Objective for CriticalDamage {
    fn name(&self) -> &'static str {
        "CD"
    }

    fn evaluate(&self, stats: &Stats) -> f64 {
        stats.cd_total as f64
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Speed;

impl Objective for Speed {
    fn name(&self) -> &'static str {
        "SPD"
    }

    fn evaluate(&self, stats: &Stats) -> f64 {
        stats.spd_total as f64
    }
}

/// Effective HP: `hp_total * (1 + def_total / 1000)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EffectiveHp;

impl Objective for EffectiveHp {
    fn name(&self) -> &'static str {
        "EHP"
    }

    fn evaluate(&self, stats: &Stats) -> f64 {
        stats.hp_total as f64 * (1.0 + stats.def_total as f64 / 1000.0)
    }
}

/// A single-target damage proxy:
/// `atk_total * (1 + cd_total / 100) * (1 + min(cr_total, 100) / 100)`.
///
/// Critical rate is capped at 100 (the in-game cap) before contributing
/// to the multiplier; `cr_total` itself is left uncapped in `Stats`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DamageProxy;

impl Objective for DamageProxy {
    fn name(&self) -> &'static str {
        "DAMAGE_PROXY"
    }

    fn evaluate(&self, stats: &Stats) -> f64 {
        let capped_cr = stats.cr_total.min(100) as f64;
        stats.atk_total as f64 * (1.0 + stats.cd_total as f64 / 100.0) * (1.0 + capped_cr / 100.0)
    }
}

/// Resolve a built-in objective by its registered name.
#[must_use]
pub fn by_name(name: &str) -> Option<Box<dyn Objective>> {
    match name {
        "SCORE" => Some(Box::new(Score)),
        "ATK_TOTAL" => Some(Box::new(AtkTotal)),
        "ATK_BONUS" => Some(Box::new(AtkBonus)),
        "HP_TOTAL" => Some(Box::new(HpTotal)),
        "DEF_TOTAL" => Some(Box::new(DefTotal)),
        "CR" => Some(Box::new(CriticalRate)),
        "CD" => Some(Box::new(CriticalDamage)),
        "SPD" => Some(Box::new(Speed)),
        "EHP" => Some(Box::new(EffectiveHp)),
        "DAMAGE_PROXY" => Some(Box::new(DamageProxy)),
        _ => None,
    }
}
