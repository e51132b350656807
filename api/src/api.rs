//! `search_builds`: the public callable surface described in the external
//! interface contract.

use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;

use runeforge_kernel::monster::MonsterBaseStats;
use runeforge_kernel::rune::Rune;
use runeforge_search::error::SearchError;
use runeforge_search::policy::{ReturnPolicy, SearchMode, SearchPolicy};
use runeforge_search::search::{self, Diagnostic, TerminationReason};

use crate::build_record::BuildRecord;
use crate::context::SearchContext;
use crate::names::{parse_constraints, parse_set_constraints};

/// Everything a caller supplies for one `search_builds` call. String-typed
/// fields (`objective`, `return_policy`, `mode`, and the keys of
/// `constraints`/`set_constraints`) are resolved to typed values inside
/// `search_builds`, once, at entry.
pub struct SearchRequest {
    pub runes: Vec<Rune>,
    pub base_atk: i64,
    pub base_spd: i64,
    pub base_hp: i64,
    pub base_def: i64,
    pub base_cr: i64,
    pub base_cd: i64,
    pub constraints: BTreeMap<String, f64>,
    pub set_constraints: BTreeMap<String, u8>,
    pub objective: String,
    pub top_n: u64,
    pub return_policy: String,
    pub return_all: bool,
    pub mode: String,
}

impl SearchRequest {
    /// Bare construction with the external interface's documented CR/CD
    /// defaults (15 and 50) and `SCORE`/`top_n`/`exhaustive` defaults.
    #[must_use]
    pub fn new(runes: Vec<Rune>, base_atk: i64, base_spd: i64, base_hp: i64, base_def: i64) -> Self {
        Self {
            runes,
            base_atk,
            base_spd,
            base_hp,
            base_def,
            base_cr: 15,
            base_cd: 50,
            constraints: BTreeMap::new(),
            set_constraints: BTreeMap::new(),
            objective: "SCORE".to_string(),
            top_n: 10,
            return_policy: "top_n".to_string(),
            return_all: false,
            mode: "exhaustive".to_string(),
        }
    }
}

/// The response shape, mirroring `SearchOutcome` with `ScoredBuild`
/// replaced by the wire-stable `BuildRecord`.
pub struct SearchResponse {
    pub builds: Vec<BuildRecord>,
    pub termination: TerminationReason,
    pub diagnostics: Vec<Diagnostic>,
}

fn parse_return_policy(name: &str) -> ReturnPolicy {
    match name {
        "all_at_best" => ReturnPolicy::AllAtBest,
        _ => ReturnPolicy::TopN,
    }
}

fn parse_mode(name: &str) -> SearchMode {
    match name {
        "fast" => SearchMode::Fast,
        _ => SearchMode::Exhaustive,
    }
}

/// Run one search call end to end: resolve names, validate the policy,
/// run the DFS, and materialize the wire-stable build records.
///
/// # Errors
///
/// Returns [`SearchError`] only for a nonsensical policy (`top_n == 0`,
/// `fast` mode with a zero candidate cap, or a zero expansion budget) —
/// the sole pre-flight validation failure in the system. Every in-domain
/// runtime outcome (empty inventory, infeasible constraints, cancellation)
/// comes back as `Ok` with a tagged `TerminationReason`.
pub fn search_builds(
    ctx: &SearchContext,
    request: &SearchRequest,
    cancel: &AtomicBool,
) -> Result<SearchResponse, SearchError> {
    let (constraints, mut diagnostics) = parse_constraints(&request.constraints);
    let (set_constraints, set_diagnostics) = parse_set_constraints(&request.set_constraints);
    diagnostics.extend(set_diagnostics);

    let (objective, objective_diagnostic) = ctx.resolve_objective(&request.objective);
    diagnostics.extend(objective_diagnostic);

    let base = MonsterBaseStats::new(request.base_hp, request.base_atk, request.base_def, request.base_spd)
        .with_base_cr_cd(request.base_cr, request.base_cd);

    let policy = SearchPolicy {
        mode: parse_mode(&request.mode),
        top_n: request.top_n,
        return_policy: parse_return_policy(&request.return_policy),
        return_all: request.return_all,
        ..SearchPolicy::default()
    };
    policy.validate()?;

    let outcome = search::search(
        &request.runes,
        &base,
        objective,
        &constraints,
        &set_constraints,
        ctx.bonus_table(),
        &policy,
        cancel,
        diagnostics,
    );

    Ok(SearchResponse {
        builds: outcome.builds.iter().map(BuildRecord::from).collect(),
        termination: outcome.termination,
        diagnostics: outcome.diagnostics,
    })
}
