//! Skill normalization.
//!
//! Both sides of a match arrive as loosely formatted text: job postings store
//! `skills_required` as one delimited string, and the oracle answers with
//! free-form prose that is *supposed* to be a comma-separated list. Every comma
//! is treated as a delimiter and anything that trims to nothing is dropped.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

/// A set of normalized skill tokens: lower-case, trimmed, non-empty, unique.
///
/// Backed by a `BTreeSet` so serialized output is sorted and stable.
/// Deserialization goes through `from_skills`, so the invariants hold either way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillSet(BTreeSet<String>);

impl<'de> Deserialize<'de> for SkillSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<String>::deserialize(deserializer).map(Self::from_skills)
    }
}

impl SkillSet {
    /// Splits `raw` on commas and normalizes every piece. Total over all input.
    pub fn parse(raw: &str) -> Self {
        Self::from_skills(raw.split(','))
    }

    /// Normalizes an already-split collection of skill phrases.
    pub fn from_skills<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            skills
                .into_iter()
                .filter_map(|s| normalize_token(s.as_ref()))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(skill)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Skills present in both sets.
    pub fn intersection(&self, other: &SkillSet) -> SkillSet {
        Self(self.0.intersection(&other.0).cloned().collect())
    }

    /// Skills in `self` that are absent from `other`.
    pub fn difference(&self, other: &SkillSet) -> SkillSet {
        Self(self.0.difference(&other.0).cloned().collect())
    }
}

fn normalize_token(piece: &str) -> Option<String> {
    let token = piece.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_lowercase())
    }
}
