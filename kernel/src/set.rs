//! `SetId`, `SetBonusDefinition`, and the canonical set-bonus table.
//!
//! Two versions of the source ecosystem disagree on the numbering of
//! Blade, Rage, and Fatal. A single numbering is pinned here and covered
//! by a pinning test in `lock-tests`; nothing in this crate hardcodes an
//! alternate numbering.

use std::collections::BTreeMap;

use crate::stat::StatId;

/// A set identifier, including the `Intangible` wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SetId {
    Energy,
    Guard,
    Swift,
    Blade,
    Rage,
    Focus,
    Endure,
    Fatal,
    Despair,
    Vampire,
    Violent,
    Nemesis,
    Will,
    Shield,
    Revenge,
    Destroy,
    Fight,
    Determination,
    Enhance,
    Accuracy,
    Tolerance,
    Intangible,
}

impl SetId {
    /// Every set id, including `Intangible`.
    pub const ALL: [SetId; 22] = [
        SetId::Energy,
        SetId::Guard,
        SetId::Swift,
        SetId::Blade,
        SetId::Rage,
        SetId::Focus,
        SetId::Endure,
        SetId::Fatal,
        SetId::Despair,
        SetId::Vampire,
        SetId::Violent,
        SetId::Nemesis,
        SetId::Will,
        SetId::Shield,
        SetId::Revenge,
        SetId::Destroy,
        SetId::Fight,
        SetId::Determination,
        SetId::Enhance,
        SetId::Accuracy,
        SetId::Tolerance,
        SetId::Intangible,
    ];

    /// The wire-stable integer id used at the API boundary.
    #[must_use]
    pub const fn wire_id(self) -> u8 {
        match self {
            SetId::Energy => 1,
            SetId::Guard => 2,
            SetId::Swift => 3,
            SetId::Blade => 4,
            SetId::Rage => 5,
            SetId::Focus => 6,
            SetId::Endure => 7,
            SetId::Fatal => 8,
            SetId::Despair => 9,
            SetId::Vampire => 10,
            SetId::Violent => 11,
            SetId::Nemesis => 12,
            SetId::Will => 13,
            SetId::Shield => 14,
            SetId::Revenge => 15,
            SetId::Destroy => 16,
            SetId::Fight => 17,
            SetId::Determination => 18,
            SetId::Enhance => 19,
            SetId::Accuracy => 20,
            SetId::Tolerance => 21,
            SetId::Intangible => 25,
        }
    }

    /// Resolve a wire-stable integer id back to a `SetId`.
    #[must_use]
    pub const fn from_wire_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(SetId::Energy),
            2 => Some(SetId::Guard),
            3 => Some(SetId::Swift),
            4 => Some(SetId::Blade),
            5 => Some(SetId::Rage),
            6 => Some(SetId::Focus),
            7 => Some(SetId::Endure),
            8 => Some(SetId::Fatal),
            9 => Some(SetId::Despair),
            10 => Some(SetId::Vampire),
            11 => Some(SetId::Violent),
            12 => Some(SetId::Nemesis),
            13 => Some(SetId::Will),
            14 => Some(SetId::Shield),
            15 => Some(SetId::Revenge),
            16 => Some(SetId::Destroy),
            17 => Some(SetId::Fight),
            18 => Some(SetId::Determination),
            19 => Some(SetId::Enhance),
            20 => Some(SetId::Accuracy),
            21 => Some(SetId::Tolerance),
            25 => Some(SetId::Intangible),
            _ => None,
        }
    }

    /// Resolve a case-insensitive set name used at the `runeforge-api`
    /// boundary for `set_constraints` parsing.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// The canonical display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SetId::Energy => "Energy",
            SetId::Guard => "Guard",
            SetId::Swift => "Swift",
            SetId::Blade => "Blade",
            SetId::Rage => "Rage",
            SetId::Focus => "Focus",
            SetId::Endure => "Endure",
            SetId::Fatal => "Fatal",
            SetId::Despair => "Despair",
            SetId::Vampire => "Vampire",
            SetId::Violent => "Violent",
            SetId::Nemesis => "Nemesis",
            SetId::Will => "Will",
            SetId::Shield => "Shield",
            SetId::Revenge => "Revenge",
            SetId::Destroy => "Destroy",
            SetId::Fight => "Fight",
            SetId::Determination => "Determination",
            SetId::Enhance => "Enhance",
            SetId::Accuracy => "Accuracy",
            SetId::Tolerance => "Tolerance",
            SetId::Intangible => "Intangible",
        }
    }

    /// Piece count required to unlock this set's bonus (2 or 4).
    ///
    /// `Intangible` has no bonus of its own; its requirement is reported
    /// as `2` but is never consulted directly — it is only ever merged
    /// into a real set's count by the intangible resolver.
    #[must_use]
    pub const fn set_requirement(self) -> u8 {
        match self {
            SetId::Rage | SetId::Fatal => 4,
            _ => 2,
        }
    }

    /// The proc sets: no stat payload, excluded from the intangible
    /// resolver's candidate target list because the engine does not
    /// model procs.
    #[must_use]
    pub const fn is_proc(self) -> bool {
        matches!(
            self,
            SetId::Despair
                | SetId::Vampire
                | SetId::Violent
                | SetId::Nemesis
                | SetId::Will
                | SetId::Shield
                | SetId::Revenge
                | SetId::Destroy
        )
    }
}

/// A declarative 2-set / 4-set bonus definition.
///
/// Swift's `SPD_PCT` 2-set bonus is carried as an ordinary `bonus_2` entry
/// here; the stats engine special-cases *application* (base SPD only, via
/// `spd_pct_from_swift`), not the table itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetBonusDefinition {
    pub set: SetId,
    pub bonus_2: BTreeMap<StatId, i64>,
    pub bonus_4: BTreeMap<StatId, i64>,
    pub is_proc: bool,
}

impl SetBonusDefinition {
    fn stat_affecting(set: SetId, bonus_2: &[(StatId, i64)], bonus_4: &[(StatId, i64)]) -> Self {
        Self {
            set,
            bonus_2: bonus_2.iter().copied().collect(),
            bonus_4: bonus_4.iter().copied().collect(),
            is_proc: false,
        }
    }

    fn proc(set: SetId) -> Self {
        Self {
            set,
            bonus_2: BTreeMap::new(),
            bonus_4: BTreeMap::new(),
            is_proc: true,
        }
    }
}

/// Build a fresh copy of the canonical default set-bonus table.
///
/// Returns an owned `BTreeMap` every call — callers who want an overlay
/// take this map and replace entries in their own copy; the default is
/// never mutated in place.
#[must_use]
pub fn default_set_bonus_table() -> BTreeMap<SetId, SetBonusDefinition> {
    use SetId::{
        Accuracy, Blade, Despair, Determination, Destroy, Enhance, Endure, Energy, Fatal, Fight,
        Focus, Guard, Intangible, Nemesis, Rage, Revenge, Shield, Swift, Tolerance, Vampire,
        Violent, Will,
    };
    use StatId::{Acc, AtkPct, Cd, Cr, DefPct, HpPct, Res, Spd};

    let mut table = BTreeMap::new();
    let mut insert = |def: SetBonusDefinition| {
        table.insert(def.set, def);
    };

    insert(SetBonusDefinition::stat_affecting(Energy, &[(HpPct, 15)], &[]));
    insert(SetBonusDefinition::stat_affecting(Guard, &[(DefPct, 15)], &[]));
    insert(SetBonusDefinition::stat_affecting(Swift, &[(Spd, 25)], &[]));
    insert(SetBonusDefinition::stat_affecting(Blade, &[(Cr, 12)], &[]));
    insert(SetBonusDefinition::stat_affecting(Rage, &[], &[(Cd, 40)]));
    insert(SetBonusDefinition::stat_affecting(Focus, &[(Acc, 20)], &[]));
    insert(SetBonusDefinition::stat_affecting(Endure, &[(Res, 20)], &[]));
    insert(SetBonusDefinition::stat_affecting(Fatal, &[], &[(AtkPct, 35)]));
    insert(SetBonusDefinition::proc(Despair));
    insert(SetBonusDefinition::proc(Vampire));
    insert(SetBonusDefinition::proc(Violent));
    insert(SetBonusDefinition::proc(Nemesis));
    insert(SetBonusDefinition::proc(Will));
    insert(SetBonusDefinition::proc(Shield));
    insert(SetBonusDefinition::proc(Revenge));
    insert(SetBonusDefinition::proc(Destroy));
    insert(SetBonusDefinition::stat_affecting(Fight, &[(AtkPct, 8)], &[]));
    insert(SetBonusDefinition::stat_affecting(Determination, &[(DefPct, 8)], &[]));
    insert(SetBonusDefinition::stat_affecting(Enhance, &[(HpPct, 8)], &[]));
    insert(SetBonusDefinition::stat_affecting(Accuracy, &[(Acc, 20)], &[]));
    insert(SetBonusDefinition::stat_affecting(Tolerance, &[(Res, 20)], &[]));
    insert(SetBonusDefinition::proc(Intangible));

    table
}
