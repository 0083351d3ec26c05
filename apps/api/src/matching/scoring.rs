//! Skill-overlap scoring for a single job.

use crate::matching::skills::SkillSet;

/// Whether jobs with no overlapping skills survive into the ranked output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroScorePolicy {
    /// Every job yields a result, zero-score jobs included.
    Include,
    /// Jobs sharing no skill with the candidate are dropped before ranking.
    #[default]
    Exclude,
}

impl ZeroScorePolicy {
    pub fn from_include_flag(include_zero: bool) -> Self {
        if include_zero {
            Self::Include
        } else {
            Self::Exclude
        }
    }

    /// Decided on the overlap itself, not the rounded score: a single shared
    /// skill out of thousands still rounds to 0.00 but is kept.
    pub fn admits(self, matched: &SkillSet) -> bool {
        match self {
            Self::Include => true,
            Self::Exclude => !matched.is_empty(),
        }
    }
}

/// Outcome of scoring one candidate skill set against one job's requirements.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillScore {
    pub matched: SkillSet,
    pub missing: SkillSet,
    /// Percentage in `[0, 100]`, rounded to two decimals.
    pub score_pct: f64,
}

/// Scores `candidate` against `required`.
///
/// `score_pct = |matched| / |required| * 100`. An empty requirement set scores 0.
pub fn score(candidate: &SkillSet, required: &SkillSet) -> SkillScore {
    let matched = candidate.intersection(required);
    let missing = required.difference(&matched);

    let score_pct = if required.is_empty() {
        0.0
    } else {
        percent_half_even(matched.len(), required.len())
    };

    SkillScore {
        matched,
        missing,
        score_pct,
    }
}

/// `part / whole * 100` rounded to two decimals, ties to even.
///
/// Works in integer hundredths of a percent; 1/32 gives 3.12, 3/32 gives 9.38.
fn percent_half_even(part: usize, whole: usize) -> f64 {
    let scaled = part as u64 * 10_000;
    let whole = whole as u64;
    let mut hundredths = scaled / whole;
    let twice_remainder = (scaled % whole) * 2;
    if twice_remainder > whole || (twice_remainder == whole && hundredths % 2 == 1) {
        hundredths += 1;
    }
    hundredths as f64 / 100.0
}
