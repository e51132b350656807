//! Wire-id pinning lock: these numbers are part of the external contract.
//! A change here is a breaking change, not a refactor — this file exists so
//! an accidental renumbering in `runeforge-kernel` fails a test outside
//! that crate too.

use runeforge_kernel::set::SetId;
use runeforge_kernel::stat::StatId;

#[test]
fn stat_wire_ids_are_pinned() {
    let pinned = [
        (StatId::Hp, 1),
        (StatId::HpPct, 2),
        (StatId::Atk, 3),
        (StatId::AtkPct, 4),
        (StatId::Def, 5),
        (StatId::DefPct, 6),
        (StatId::Spd, 8),
        (StatId::Cr, 9),
        (StatId::Cd, 10),
        (StatId::Res, 11),
        (StatId::Acc, 12),
    ];
    for (stat, id) in pinned {
        assert_eq!(stat.wire_id(), id, "{stat:?} must keep wire id {id}");
    }
    assert_eq!(StatId::from_wire_id(7), None, "7 is reserved-unused and must stay unmapped");
}

#[test]
fn set_wire_ids_are_pinned() {
    let pinned = [
        (SetId::Energy, 1),
        (SetId::Guard, 2),
        (SetId::Swift, 3),
        (SetId::Blade, 4),
        (SetId::Rage, 5),
        (SetId::Focus, 6),
        (SetId::Endure, 7),
        (SetId::Fatal, 8),
        (SetId::Despair, 9),
        (SetId::Vampire, 10),
        (SetId::Violent, 11),
        (SetId::Nemesis, 12),
        (SetId::Will, 13),
        (SetId::Shield, 14),
        (SetId::Revenge, 15),
        (SetId::Destroy, 16),
        (SetId::Fight, 17),
        (SetId::Determination, 18),
        (SetId::Enhance, 19),
        (SetId::Accuracy, 20),
        (SetId::Tolerance, 21),
        (SetId::Intangible, 25),
    ];
    for (set, id) in pinned {
        assert_eq!(set.wire_id(), id, "{set:?} must keep wire id {id}");
    }
}

#[test]
fn blade_rage_fatal_numbering_matches_the_pinned_ecosystem_convention() {
    assert_eq!(SetId::Blade.wire_id(), 4);
    assert_eq!(SetId::Rage.wire_id(), 5);
    assert_eq!(SetId::Fatal.wire_id(), 8);
}
