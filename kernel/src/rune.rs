//! `Rune`, `SubStat`, `SlotId`, and `RuneId`.

use crate::set::SetId;
use crate::stat::StatId;

/// A unique rune id, stable within a single inventory/search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuneId(pub u64);

/// One of the six equipment positions. A build has exactly one rune per
/// slot. Unrepresentable past input parsing: there is no `SlotId::from(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SlotId {
    Slot1,
    Slot2,
    Slot3,
    Slot4,
    Slot5,
    Slot6,
}

impl SlotId {
    pub const ALL: [SlotId; 6] = [
        SlotId::Slot1,
        SlotId::Slot2,
        SlotId::Slot3,
        SlotId::Slot4,
        SlotId::Slot5,
        SlotId::Slot6,
    ];

    /// Construct from the 1-based slot number used at the API boundary.
    #[must_use]
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(SlotId::Slot1),
            2 => Some(SlotId::Slot2),
            3 => Some(SlotId::Slot3),
            4 => Some(SlotId::Slot4),
            5 => Some(SlotId::Slot5),
            6 => Some(SlotId::Slot6),
            _ => None,
        }
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            SlotId::Slot1 => 1,
            SlotId::Slot2 => 2,
            SlotId::Slot3 => 3,
            SlotId::Slot4 => 4,
            SlotId::Slot5 => 5,
            SlotId::Slot6 => 6,
        }
    }
}

/// A secondary stat roll. `value` is pre-summed base+grind; the grind
/// delta itself is not retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubStat {
    pub stat: StatId,
    pub value: i64,
}

/// An immutable rune, as loaded from the caller's inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rune {
    pub id: RuneId,
    pub slot: SlotId,
    pub set: SetId,
    pub main: (StatId, i64),
    pub prefix: Option<(StatId, i64)>,
    /// 0..=4 secondary stats.
    pub subs: [Option<SubStat>; 4],
}

impl Rune {
    /// Iterator over the present substats (skips `None` slots).
    pub fn present_subs(&self) -> impl Iterator<Item = &SubStat> {
        self.subs.iter().filter_map(Option::as_ref)
    }
}
