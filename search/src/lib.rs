//! Runeforge Search: the branch-and-bound driver over a six-slot rune
//! loadout.
//!
//! This crate depends only on `runeforge-kernel` — it does NOT depend on
//! `runeforge-api`.
//!
//! # Crate dependency graph
//!
//! ```text
//! runeforge-kernel  ←  runeforge-search  ←  runeforge-api
//! (data model)          (DFS, oracle)        (names, wire shapes)
//! ```
//!
//! # Key types
//!
//! - [`search::search`] — the DFS entry point, always returns a
//!   [`search::SearchOutcome`]
//! - [`oracle::PruningOracle`] — feasibility and admissible upper-bound
//!   checks over a partial assignment
//! - [`topk::ResultCollector`] — the bounded top-K / all-at-best / return-all
//!   result aggregator
//! - [`policy::SearchPolicy`] — mode, return policy, and resource bounds
//! - [`constraints::Constraints`] / [`constraints::SetConstraints`] —
//!   resolved stat floors and set-piece requirements

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod constraints;
pub mod error;
pub mod intangible;
pub mod leaf;
pub mod oracle;
pub mod policy;
pub mod search;
pub mod topk;
