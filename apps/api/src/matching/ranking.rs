use serde::Serialize;

use crate::matching::JobMatchResult;

/// Ranked, truncated match list plus the counters reported to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct RankedMatches {
    pub job_matches: Vec<JobMatchResult>,
    /// Length of the list before truncation.
    pub total_matches_found: usize,
    /// Number of entries actually returned: `min(limit, total_matches_found)`.
    pub showing_top: usize,
}

/// Sorts descending by score and keeps the first `limit` entries.
///
/// `sort_by` is stable, so jobs with equal scores keep their input order.
pub fn rank_and_truncate(mut results: Vec<JobMatchResult>, limit: usize) -> RankedMatches {
    let total_matches_found = results.len();

    results.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    results.truncate(limit);

    RankedMatches {
        showing_top: results.len(),
        job_matches: results,
        total_matches_found,
    }
}
