//! Runeforge Kernel: the pure domain model for six-piece rune loadouts.
//!
//! # API Surface
//!
//! - [`stats::compute_stats`] -- fold runes + set bonuses into a [`stats::Stats`] record
//! - [`legality::validate_rune`] / [`legality::validate_build`] -- slot/set legality
//! - [`set::default_set_bonus_table`] -- the canonical set-bonus table
//! - [`objective`] -- built-in named objectives over a [`stats::Stats`] record
//!
//! # Module dependency direction
//!
//! `stat`, `set`, `rune`, `monster` (leaf types) ← `legality` ← `stats` ← `objective`
//!
//! One-way only. No cycles. The kernel performs no I/O and has no external
//! dependencies; it is a pure function of its inputs.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod legality;
pub mod monster;
pub mod objective;
pub mod rune;
pub mod set;
pub mod stat;
pub mod stats;
