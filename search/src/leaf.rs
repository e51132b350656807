//! `ScoredBuild`: a completed, evaluated six-rune assignment.

use std::collections::BTreeMap;

use runeforge_kernel::rune::{Rune, RuneId};
use runeforge_kernel::set::SetId;
use runeforge_kernel::stats::Stats;

/// A completed build together with its derived stats.
///
/// `runes` is ordered by slot (`runes[0]` is slot 1, ..., `runes[5]` is
/// slot 6); `stats.score` holds the selected objective's value.
#[derive(Debug, Clone)]
pub struct ScoredBuild {
    pub runes: [Rune; 6],
    pub intangible_assignment: BTreeMap<RuneId, SetId>,
    pub stats: Stats,
}

impl ScoredBuild {
    /// The tie-break sequence used after `(stats.score, stats.cd_total)`:
    /// the six rune ids in slot order.
    #[must_use]
    fn rune_id_sequence(&self) -> [u64; 6] {
        let mut ids = [0u64; 6];
        for (i, rune) in self.runes.iter().enumerate() {
            ids[i] = rune.id.0;
        }
        ids
    }

    /// Deterministic ranking key: highest `score` first, ties broken by
    /// `cd_total`, then by rune-id sequence (ascending, so the comparison
    /// is total and reproducible across repeated runs on identical input).
    #[must_use]
    pub(crate) fn ranking_key(&self) -> (f64, i64, [u64; 6]) {
        (self.stats.score, self.stats.cd_total, self.rune_id_sequence())
    }
}

/// Total order over `ScoredBuild` by ranking key, descending preference
/// expressed as ascending key comparison (higher key = better build).
///
/// `f64::total_cmp` gives a full order (including `NaN`/`-0.0`) so this
/// never panics even on pathological objective outputs.
pub(crate) fn compare_by_ranking_key(a: &ScoredBuild, b: &ScoredBuild) -> std::cmp::Ordering {
    let (a_score, a_cd, a_seq) = a.ranking_key();
    let (b_score, b_cd, b_seq) = b.ranking_key();
    a_score
        .total_cmp(&b_score)
        .then_with(|| a_cd.cmp(&b_cd))
        .then_with(|| a_seq.cmp(&b_seq))
}
