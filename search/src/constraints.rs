//! Typed per-stat floors and per-set piece-count requirements.
//!
//! Name resolution (constraint name -> `ConstraintKey`, set name -> `SetId`)
//! happens once at the `runeforge-api` boundary; this crate only ever sees
//! the resolved, closed keys.

use std::collections::BTreeMap;

use runeforge_kernel::set::SetId;
use runeforge_kernel::stats::Stats;

/// The closed set of stat floors a caller may constrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConstraintKey {
    Cr,
    Cd,
    Spd,
    AtkTotal,
    AtkBonus,
    AtkPct,
    AtkFlat,
    HpTotal,
    DefTotal,
    MinScore,
}

impl ConstraintKey {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "CR" => Some(Self::Cr),
            "CD" => Some(Self::Cd),
            "SPD" => Some(Self::Spd),
            "ATK_TOTAL" => Some(Self::AtkTotal),
            "ATK_BONUS" => Some(Self::AtkBonus),
            "ATK_PCT" => Some(Self::AtkPct),
            "ATK_FLAT" => Some(Self::AtkFlat),
            "HP_TOTAL" => Some(Self::HpTotal),
            "DEF_TOTAL" => Some(Self::DefTotal),
            "MIN_SCORE" => Some(Self::MinScore),
            _ => None,
        }
    }

    /// Read the matching field off a stats record, as `f64` so every key
    /// shares one comparison with the floor value.
    ///
    /// `MinScore` always re-evaluates the literal `SCORE` formula rather
    /// than reading `stats.score`, since that field holds whatever
    /// objective the caller selected for ranking — which may not be
    /// `SCORE` at all.
    #[must_use]
    fn read(self, stats: &Stats) -> f64 {
        match self {
            Self::Cr => stats.cr_total as f64,
            Self::Cd => stats.cd_total as f64,
            Self::Spd => stats.spd_total as f64,
            Self::AtkTotal => stats.atk_total as f64,
            Self::AtkBonus => stats.atk_bonus as f64,
            Self::AtkPct => stats.atk_pct_total as f64,
            Self::AtkFlat => stats.atk_flat_total as f64,
            Self::HpTotal => stats.hp_total as f64,
            Self::DefTotal => stats.def_total as f64,
            Self::MinScore => {
                use runeforge_kernel::objective::Objective as _;
                runeforge_kernel::objective::Score.evaluate(stats)
            }
        }
    }
}

/// A set of stat floors, all of which must hold for a build to pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constraints {
    floors: BTreeMap<ConstraintKey, f64>,
}

impl Constraints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_floor(&mut self, key: ConstraintKey, floor: f64) {
        self.floors.insert(key, floor);
    }

    #[must_use]
    pub fn floor(&self, key: ConstraintKey) -> Option<f64> {
        self.floors.get(&key).copied()
    }

    /// `true` if every floor holds against `stats`.
    #[must_use]
    pub fn passes(&self, stats: &Stats) -> bool {
        self.floors.iter().all(|(&key, &floor)| key.read(stats) >= floor)
    }
}

/// Per-set required piece count (including any intangible merge).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetConstraints {
    required: BTreeMap<SetId, u8>,
}

impl SetConstraints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(&mut self, set: SetId, count: u8) {
        self.required.insert(set, count);
    }

    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (SetId, u8)> + '_ {
        self.required.iter().map(|(&s, &c)| (s, c))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
    }

    /// `true` if every required count is met by `set_counts`.
    #[must_use]
    pub fn passes(&self, set_counts: &BTreeMap<SetId, u8>) -> bool {
        self.required
            .iter()
            .all(|(set, &required)| set_counts.get(set).copied().unwrap_or(0) >= required)
    }
}
