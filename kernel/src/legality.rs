//! Slot legality rules.
//!
//! The search driver may assume the pre-filtered candidate pool is already
//! individually legal; `validate_build` then reduces to slot uniqueness
//! plus the I2 intangible-count rule.

use crate::rune::{Rune, SlotId};
use crate::set::SetId;
use crate::stat::StatId;

/// Stats forbidden as the main stat for a given slot (hard game rule,
/// independent of user preference).
fn slot_main_forbidden(slot: SlotId) -> &'static [StatId] {
    match slot {
        SlotId::Slot2 => &[StatId::Cd, StatId::Cr, StatId::Res, StatId::Acc],
        SlotId::Slot4 => &[StatId::Spd, StatId::Res, StatId::Acc],
        SlotId::Slot6 => &[StatId::Spd, StatId::Cd, StatId::Cr],
        SlotId::Slot1 | SlotId::Slot3 | SlotId::Slot5 => &[],
    }
}

/// The fixed main stat for slots that have exactly one legal main (1, 3, 5).
fn slot_fixed_main(slot: SlotId) -> Option<StatId> {
    match slot {
        SlotId::Slot1 => Some(StatId::Atk),
        SlotId::Slot3 => Some(StatId::Def),
        SlotId::Slot5 => Some(StatId::Hp),
        SlotId::Slot2 | SlotId::Slot4 | SlotId::Slot6 => None,
    }
}

/// Substat/prefix stats forbidden (beyond "no duplicate of own main") for
/// a given slot.
fn slot_sub_or_prefix_forbidden(slot: SlotId) -> &'static [StatId] {
    match slot {
        SlotId::Slot1 => &[StatId::Def, StatId::DefPct],
        SlotId::Slot3 => &[StatId::Atk, StatId::AtkPct],
        _ => &[],
    }
}

/// `true` if `main` is a legal main stat for `slot`.
#[must_use]
pub fn slot_main_is_allowed(slot: SlotId, main: StatId) -> bool {
    if let Some(fixed) = slot_fixed_main(slot) {
        return main == fixed;
    }
    !slot_main_forbidden(slot).contains(&main)
}

/// `true` if `stat` may appear as a substat or prefix on a rune in `slot`
/// whose main stat is `main`.
#[must_use]
pub fn slot_sub_or_prefix_is_allowed(slot: SlotId, main: StatId, stat: StatId) -> bool {
    if stat == main {
        return false;
    }
    !slot_sub_or_prefix_forbidden(slot).contains(&stat)
}

/// Validate a single rune against the slot-main restriction table and the
/// substat/prefix restrictions.
#[must_use]
pub fn validate_rune(rune: &Rune) -> bool {
    let (main_stat, _) = rune.main;
    if !slot_main_is_allowed(rune.slot, main_stat) {
        return false;
    }
    for sub in rune.present_subs() {
        if !slot_sub_or_prefix_is_allowed(rune.slot, main_stat, sub.stat) {
            return false;
        }
    }
    if let Some((prefix_stat, _)) = rune.prefix {
        if !slot_sub_or_prefix_is_allowed(rune.slot, main_stat, prefix_stat) {
            return false;
        }
    }
    true
}

/// Validate a six-rune build: I1 (one rune per slot, six distinct ids),
/// I2 (at most one `Intangible` rune), and per-rune legality (I3).
#[must_use]
pub fn validate_build(runes: &[&Rune; 6]) -> bool {
    for rune in runes {
        if !validate_rune(rune) {
            return false;
        }
    }

    let mut seen_slots = [false; 6];
    let mut seen_ids = std::collections::BTreeSet::new();
    for rune in runes {
        let slot_index = usize::from(rune.slot.number() - 1);
        if seen_slots[slot_index] {
            return false;
        }
        seen_slots[slot_index] = true;
        if !seen_ids.insert(rune.id) {
            return false;
        }
    }

    let intangible_count = runes.iter().filter(|r| r.set == SetId::Intangible).count();
    if intangible_count > 1 {
        return false;
    }

    true
}
