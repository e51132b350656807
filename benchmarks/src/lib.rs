//! Shared helpers for the runeforge benchmark suites: synthetic inventory
//! generation at a chosen per-slot candidate count.

use runeforge_kernel::monster::MonsterBaseStats;
use runeforge_kernel::rune::{Rune, RuneId, SlotId, SubStat};
use runeforge_kernel::set::SetId;
use runeforge_kernel::stat::StatId;

/// A legal main stat for each slot, fixed across the generated inventory so
/// every rune passes `validate_rune`.
fn main_stat_for_slot(slot: SlotId) -> StatId {
    match slot {
        SlotId::Slot1 => StatId::Atk,
        SlotId::Slot2 => StatId::AtkPct,
        SlotId::Slot3 => StatId::Def,
        SlotId::Slot4 => StatId::Cd,
        SlotId::Slot5 => StatId::Hp,
        SlotId::Slot6 => StatId::AtkPct,
    }
}

/// Cycle through every non-proc, non-`Intangible` set so sets complete (and
/// the pruning oracle's set-bonus lookahead has something to chew on) as
/// the inventory grows.
const ROTATING_SETS: [SetId; 6] =
    [SetId::Rage, SetId::Blade, SetId::Fatal, SetId::Swift, SetId::Guard, SetId::Energy];

/// Build a synthetic inventory with `per_slot` legal candidates in each of
/// the six slots, varying substats so runes are not all identical (and so
/// `fast` mode's heuristic trim has something to rank).
#[must_use]
pub fn synthetic_inventory(per_slot: usize) -> Vec<Rune> {
    let mut inventory = Vec::with_capacity(per_slot * 6);
    let mut id = 1u64;
    for slot in SlotId::ALL {
        let main_stat = main_stat_for_slot(slot);
        for i in 0..per_slot {
            let set = ROTATING_SETS[i % ROTATING_SETS.len()];
            let main_value = 50 + i64::try_from(i % 40).unwrap_or(0);
            let mut subs = [None; 4];
            subs[0] = Some(SubStat { stat: StatId::Cr, value: i64::try_from(i % 12).unwrap_or(0) });
            inventory.push(Rune {
                id: RuneId(id),
                slot,
                set,
                main: (main_stat, main_value),
                prefix: None,
                subs,
            });
            id += 1;
        }
    }
    inventory
}

#[must_use]
pub fn sample_base_stats() -> MonsterBaseStats {
    MonsterBaseStats::new(10_000, 900, 500, 104)
}
