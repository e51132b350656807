//! Bounded result collector for completed builds.
//!
//! `BinaryHeap` is a max-heap; wrapping entries in `Reverse` gives min-heap
//! behavior so a size-bounded collector can evict its worst entry in
//! `O(log k)` rather than rescanning on every offer.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::leaf::{compare_by_ranking_key, ScoredBuild};
use crate::policy::ReturnPolicy;

struct HeapEntry(ScoredBuild);

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        compare_by_ranking_key(&self.0, &other.0) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        compare_by_ranking_key(&self.0, &other.0)
    }
}

/// Accumulates leaves offered by the DFS and assembles the final ranked
/// list according to the search policy's return policy.
pub struct ResultCollector {
    return_policy: ReturnPolicy,
    return_all: bool,
    top_n: usize,
    /// `Some` for `TopN`/`return_all=false`: a size-bounded min-heap.
    bounded: Option<BinaryHeap<Reverse<HeapEntry>>>,
    /// `Some` for `AllAtBest`: every build tying the best score seen, up
    /// to `top_n`, reset whenever a strictly better score arrives.
    all_at_best: Option<(f64, Vec<ScoredBuild>)>,
    /// `Some` for `return_all`: every feasible build, unbounded.
    unbounded: Option<Vec<ScoredBuild>>,
}

impl ResultCollector {
    #[must_use]
    pub fn new(return_policy: ReturnPolicy, return_all: bool, top_n: u64) -> Self {
        let top_n = usize::try_from(top_n).unwrap_or(usize::MAX);
        if return_all {
            return Self {
                return_policy,
                return_all,
                top_n,
                bounded: None,
                all_at_best: None,
                unbounded: Some(Vec::new()),
            };
        }
        match return_policy {
            ReturnPolicy::TopN => Self {
                return_policy,
                return_all,
                top_n,
                bounded: Some(BinaryHeap::new()),
                all_at_best: None,
                unbounded: None,
            },
            ReturnPolicy::AllAtBest => Self {
                return_policy,
                return_all,
                top_n,
                bounded: None,
                all_at_best: Some((f64::NEG_INFINITY, Vec::new())),
                unbounded: None,
            },
        }
    }

    /// Whether a subtree whose admissible score upper bound is
    /// `upper_bound` can be pruned without dropping a build this
    /// collector's return policy promises to return.
    ///
    /// Both bounded variants stay open (never prune) until they are
    /// genuinely full — `top_n` items collected — matching the
    /// `top_n`-sized-or-smaller final result each promises. Once full,
    /// `TopN` may drop an exact boundary tie (`<=`), since it only ever
    /// promised the `top_n` best, not every tied build; `AllAtBest` may
    /// not, since its contract is every build tying the maximum, so only a
    /// strictly worse bound (`<`) is safe to prune.
    #[must_use]
    pub fn should_prune(&self, upper_bound: f64) -> bool {
        if self.unbounded.is_some() {
            return false;
        }
        if let Some((best, items)) = &self.all_at_best {
            if items.len() < self.top_n {
                return false;
            }
            return upper_bound < *best;
        }
        if let Some(heap) = &self.bounded {
            if heap.len() < self.top_n {
                return false;
            }
            return heap.peek().is_some_and(|Reverse(entry)| upper_bound <= entry.0.stats.score);
        }
        false
    }

    pub fn offer(&mut self, build: ScoredBuild) {
        if let Some(items) = &mut self.unbounded {
            items.push(build);
            return;
        }

        if let Some((best, items)) = &mut self.all_at_best {
            let score = build.stats.score;
            if score > *best {
                *best = score;
                items.clear();
                items.push(build);
            } else if score == *best && items.len() < self.top_n {
                items.push(build);
            }
            return;
        }

        if let Some(heap) = &mut self.bounded {
            if heap.len() < self.top_n {
                heap.push(Reverse(HeapEntry(build)));
            } else if let Some(Reverse(worst)) = heap.peek() {
                if compare_by_ranking_key(&build, &worst.0) == std::cmp::Ordering::Greater {
                    heap.pop();
                    heap.push(Reverse(HeapEntry(build)));
                }
            }
        }
    }

    /// Drain into the final ranked list, highest-ranked first.
    #[must_use]
    pub fn finish(self) -> Vec<ScoredBuild> {
        let mut items = if let Some(items) = self.unbounded {
            items
        } else if let Some((_, items)) = self.all_at_best {
            items
        } else if let Some(heap) = self.bounded {
            heap.into_iter().map(|Reverse(entry)| entry.0).collect()
        } else {
            Vec::new()
        };
        items.sort_by(|a, b| compare_by_ranking_key(b, a));
        if !self.return_all && matches!(self.return_policy, ReturnPolicy::TopN) {
            items.truncate(self.top_n);
        }
        items
    }
}
