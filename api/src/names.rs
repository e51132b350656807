//! Name resolution at the API boundary: `constraints`/`set_constraints` are
//! string-keyed maps at this surface; they are resolved to typed ids here,
//! once, and never again compared as strings past this point.

use std::collections::BTreeMap;

use runeforge_kernel::set::SetId;
use runeforge_search::constraints::{Constraints, ConstraintKey, SetConstraints};
use runeforge_search::search::Diagnostic;

/// Resolve a raw stat-floor map. Unrecognized keys are dropped with a
/// diagnostic tag rather than rejected — search proceeds without them.
#[must_use]
pub fn parse_constraints(raw: &BTreeMap<String, f64>) -> (Constraints, Vec<Diagnostic>) {
    let mut constraints = Constraints::new();
    let mut diagnostics = Vec::new();
    for (name, &floor) in raw {
        match ConstraintKey::from_name(name) {
            Some(key) => constraints.set_floor(key, floor),
            None => diagnostics.push(Diagnostic::UnknownStatName(name.clone())),
        }
    }
    (constraints, diagnostics)
}

/// Resolve a raw set-requirement map, same no-op-on-miss treatment as
/// `parse_constraints`.
#[must_use]
pub fn parse_set_constraints(raw: &BTreeMap<String, u8>) -> (SetConstraints, Vec<Diagnostic>) {
    let mut set_constraints = SetConstraints::new();
    let mut diagnostics = Vec::new();
    for (name, &count) in raw {
        match SetId::from_name(name) {
            Some(set) => set_constraints.require(set, count),
            None => diagnostics.push(Diagnostic::UnknownSetName(name.clone())),
        }
    }
    (set_constraints, diagnostics)
}
