//! `StatId`: the closed set of eleven stat identifiers.
//!
//! Wire ids are pinned per the external interface: `7` is reserved-unused
//! in the source ecosystem and intentionally has no variant here.

use std::fmt;

/// A stat identifier. `_Pct` variants are percentage bonuses against a
/// base stat; the rest are additive flats or additive percentages with no
/// base multiplier (CR, CD, RES, ACC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatId {
    Hp,
    HpPct,
    Atk,
    AtkPct,
    Def,
    DefPct,
    Spd,
    Cr,
    Cd,
    Res,
    Acc,
}

impl StatId {
    /// All eleven stat ids, in wire-id order.
    pub const ALL: [StatId; 11] = [
        StatId::Hp,
        StatId::HpPct,
        StatId::Atk,
        StatId::AtkPct,
        StatId::Def,
        StatId::DefPct,
        StatId::Spd,
        StatId::Cr,
        StatId::Cd,
        StatId::Res,
        StatId::Acc,
    ];

    /// The wire-stable integer id used at the API boundary. `7` is skipped.
    #[must_use]
    pub const fn wire_id(self) -> u8 {
        match self {
            StatId::Hp => 1,
            StatId::HpPct => 2,
            StatId::Atk => 3,
            StatId::AtkPct => 4,
            StatId::Def => 5,
            StatId::DefPct => 6,
            StatId::Spd => 8,
            StatId::Cr => 9,
            StatId::Cd => 10,
            StatId::Res => 11,
            StatId::Acc => 12,
        }
    }

    /// Resolve a wire-stable integer id back to a `StatId`.
    ///
    /// Returns `None` for `7` (reserved-unused) and any id outside the
    /// closed set.
    #[must_use]
    pub const fn from_wire_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(StatId::Hp),
            2 => Some(StatId::HpPct),
            3 => Some(StatId::Atk),
            4 => Some(StatId::AtkPct),
            5 => Some(StatId::Def),
            6 => Some(StatId::DefPct),
            8 => Some(StatId::Spd),
            9 => Some(StatId::Cr),
            10 => Some(StatId::Cd),
            11 => Some(StatId::Res),
            12 => Some(StatId::Acc),
            _ => None,
        }
    }

    /// Resolve a case-insensitive stat name (`"ATK_PCT"`, `"atk_pct"`, ...)
    /// used at the `runeforge-api` boundary for constraint parsing.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "HP" => Some(StatId::Hp),
            "HP_PCT" => Some(StatId::HpPct),
            "ATK" => Some(StatId::Atk),
            "ATK_PCT" => Some(StatId::AtkPct),
            "DEF" => Some(StatId::Def),
            "DEF_PCT" => Some(StatId::DefPct),
            "SPD" => Some(StatId::Spd),
            "CR" => Some(StatId::Cr),
            "CD" => Some(StatId::Cd),
            "RES" => Some(StatId::Res),
            "ACC" => Some(StatId::Acc),
            _ => None,
        }
    }

    /// The canonical upper-snake-case name, the inverse of `from_name`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StatId::Hp => "HP",
            StatId::HpPct => "HP_PCT",
            StatId::Atk => "ATK",
            StatId::AtkPct => "ATK_PCT",
            StatId::Def => "DEF",
            StatId::DefPct => "DEF_PCT",
            StatId::Spd => "SPD",
            StatId::Cr => "CR",
            StatId::Cd => "CD",
            StatId::Res => "RES",
            StatId::Acc => "ACC",
        }
    }

    /// `true` for the four `_PCT` variants.
    #[must_use]
    pub const fn is_percent(self) -> bool {
        matches!(
            self,
            StatId::HpPct | StatId::AtkPct | StatId::DefPct
        )
    }
}

impl fmt::Display for StatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
