//! Skill matcher: scores a candidate skill set against job postings.
//!
//! Flow: normalize job skills → score overlap → apply zero-score policy →
//!       stable rank by score → truncate to the requested limit.
//!
//! Everything here is pure: no I/O, no shared state. Callers materialize the
//! job list and candidate skills before calling in.

pub mod ranking;
pub mod scoring;
pub mod skills;

use serde::Serialize;

use crate::matching::ranking::{rank_and_truncate, RankedMatches};
use crate::matching::scoring::{score, ZeroScorePolicy};
use crate::matching::skills::SkillSet;
use crate::models::job::JobRow;

/// Number of matches returned when the caller does not ask for a limit.
pub const DEFAULT_MATCH_LIMIT: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// One scored job. Built per request and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct JobMatchResult {
    pub job_id: i32,
    pub title: String,
    pub location: String,
    /// Percentage in `[0, 100]`, two-decimal rounding.
    pub match_score: f64,
    pub matching_skills: SkillSet,
    pub required_skills: SkillSet,
    pub missing_skills: SkillSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    pub zero_scores: ZeroScorePolicy,
    pub limit: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            zero_scores: ZeroScorePolicy::default(),
            limit: DEFAULT_MATCH_LIMIT,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Scores one job posting against the candidate's skills.
pub fn evaluate_job(candidate: &SkillSet, job: &JobRow) -> JobMatchResult {
    let required = SkillSet::parse(&job.skills_required);
    let outcome = score(candidate, &required);

    JobMatchResult {
        job_id: job.id,
        title: job.title.clone(),
        location: job.location.clone(),
        match_score: outcome.score_pct,
        matching_skills: outcome.matched,
        required_skills: required,
        missing_skills: outcome.missing,
    }
}

/// Scores every job, drops what the zero-score policy rejects, then ranks.
///
/// `total_matches_found` counts the jobs that survived the policy filter.
pub fn match_jobs(candidate: &SkillSet, jobs: &[JobRow], options: MatchOptions) -> RankedMatches {
    let results = jobs
        .iter()
        .map(|job| evaluate_job(candidate, job))
        .filter(|result| options.zero_scores.admits(&result.matching_skills))
        .collect();

    rank_and_truncate(results, options.limit)
}
