//! Oracle-backed résumé analysis: feedback, skill extraction, job matching.
//!
//! The oracle's answers are untrusted free text. Skill lists go through
//! `SkillSet::parse`, and an empty answer is treated as "nothing found"
//! rather than an error.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::llm_client::prompts::{render, ALL_SKILLS_PROMPT, FEEDBACK_PROMPT, TECHNICAL_SKILLS_PROMPT};
use crate::llm_client::{LlmError, TextGenerator};
use crate::matching::ranking::RankedMatches;
use crate::matching::skills::SkillSet;
use crate::matching::{match_jobs, MatchOptions};
use crate::models::job::JobRow;
use crate::models::resume::ResumeRow;

/// Stored when the oracle answers with nothing usable.
pub const FEEDBACK_FALLBACK: &str = "Unable to generate feedback at this time.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillScope {
    /// Technical skills only. Used for job matching.
    #[default]
    Technical,
    /// Technical and soft skills.
    All,
}

impl SkillScope {
    fn prompt_template(self) -> &'static str {
        match self {
            SkillScope::Technical => TECHNICAL_SKILLS_PROMPT,
            SkillScope::All => ALL_SKILLS_PROMPT,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub resume_id: i32,
    pub candidate_skills: SkillSet,
    #[serde(flatten)]
    pub ranked: RankedMatches,
}

/// Asks the oracle for written feedback on the résumé.
pub async fn generate_feedback(
    oracle: &dyn TextGenerator,
    resume_text: &str,
) -> Result<String, LlmError> {
    match oracle.generate(&render(FEEDBACK_PROMPT, resume_text)).await {
        Ok(text) if !text.trim().is_empty() => Ok(text),
        Ok(_) | Err(LlmError::EmptyContent) => {
            warn!("Oracle returned empty feedback");
            Ok(FEEDBACK_FALLBACK.to_string())
        }
        Err(e) => Err(e),
    }
}

/// Asks the oracle for a comma-separated skill list and normalizes it.
pub async fn extract_skills(
    oracle: &dyn TextGenerator,
    resume_text: &str,
    scope: SkillScope,
) -> Result<SkillSet, LlmError> {
    let prompt = render(scope.prompt_template(), resume_text);
    match oracle.generate(&prompt).await {
        Ok(text) => Ok(SkillSet::parse(&text)),
        Err(LlmError::EmptyContent) => {
            warn!("Oracle returned no skills");
            Ok(SkillSet::default())
        }
        Err(e) => Err(e),
    }
}

/// Extracts the candidate's technical skills and ranks `jobs` against them.
pub async fn match_resume(
    oracle: &dyn TextGenerator,
    resume: &ResumeRow,
    jobs: &[JobRow],
    options: MatchOptions,
) -> Result<MatchReport, LlmError> {
    let candidate_skills = extract_skills(oracle, &resume.content, SkillScope::Technical).await?;
    let ranked = match_jobs(&candidate_skills, jobs, options);

    info!(
        "Resume {}: {} candidate skills, {} of {} jobs matched, showing top {}",
        resume.id,
        candidate_skills.len(),
        ranked.total_matches_found,
        jobs.len(),
        ranked.showing_top
    );

    Ok(MatchReport {
        resume_id: resume.id,
        candidate_skills,
        ranked,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::fake::{FailingOracle, ScriptedOracle};
    use crate::matching::scoring::ZeroScorePolicy;
    use chrono::Utc;

    fn resume(content: &str) -> ResumeRow {
        ResumeRow {
            id: 42,
            filename: "cv.pdf".to_string(),
            content: content.to_string(),
            uploaded_at: Utc::now(),
            ai_feedback: None,
        }
    }

    fn job(id: i32, skills_required: &str) -> JobRow {
        JobRow {
            id,
            title: format!("Job {id}"),
            description: String::new(),
            location: "Remote".to_string(),
            skills_required: skills_required.to_string(),
        }
    }

    fn jobs() -> Vec<JobRow> {
        vec![
            job(1, "python, sql, aws"),
            job(2, "java, c++"),
            job(3, "docker"),
        ]
    }

    #[tokio::test]
    async fn test_feedback_passes_through_oracle_text() {
        let oracle = ScriptedOracle::replying("1. Add Kubernetes.\n2. Tone is fine.");
        let feedback = generate_feedback(&oracle, "Backend engineer").await.unwrap();
        assert_eq!(feedback, "1. Add Kubernetes.\n2. Tone is fine.");

        let prompts = oracle.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("ATS tips"));
        assert!(prompts[0].ends_with("Backend engineer"));
    }

    #[tokio::test]
    async fn test_feedback_falls_back_on_blank_reply() {
        let oracle = ScriptedOracle::replying("   \n");
        let feedback = generate_feedback(&oracle, "text").await.unwrap();
        assert_eq!(feedback, FEEDBACK_FALLBACK);
    }

    #[tokio::test]
    async fn test_feedback_falls_back_on_empty_content() {
        let feedback = generate_feedback(&ScriptedOracle::empty(), "text").await.unwrap();
        assert_eq!(feedback, FEEDBACK_FALLBACK);
    }

    #[tokio::test]
    async fn test_feedback_propagates_api_errors() {
        let err = generate_feedback(&FailingOracle, "text").await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 403, .. }));
    }

    #[tokio::test]
    async fn test_extract_skills_uses_scope_prompt() {
        let oracle = ScriptedOracle::replying("Python, Teamwork , python");
        let skills = extract_skills(&oracle, "cv", SkillScope::All).await.unwrap();
        assert_eq!(skills, SkillSet::from_skills(["python", "teamwork"]));
        assert!(oracle.prompts()[0].contains("technical and soft skills"));
    }

    #[tokio::test]
    async fn test_extract_skills_empty_content_is_empty_set() {
        let skills = extract_skills(&ScriptedOracle::empty(), "cv", SkillScope::Technical)
            .await
            .unwrap();
        assert!(skills.is_empty());
    }

    #[tokio::test]
    async fn test_match_resume_end_to_end_include_zero() {
        let oracle = ScriptedOracle::replying("Python, SQL, Docker");
        let options = MatchOptions {
            zero_scores: ZeroScorePolicy::Include,
            limit: 5,
        };
        let report = match_resume(&oracle, &resume("..."), &jobs(), options)
            .await
            .unwrap();

        assert_eq!(report.resume_id, 42);
        assert_eq!(report.candidate_skills, SkillSet::parse("docker, python, sql"));
        let ids: Vec<i32> = report.ranked.job_matches.iter().map(|m| m.job_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(report.ranked.total_matches_found, 3);
        assert!(oracle.prompts()[0].contains("Extract only the technical skills"));
    }

    #[tokio::test]
    async fn test_match_resume_exclude_zero() {
        let oracle = ScriptedOracle::replying("Python, SQL, Docker");
        let report = match_resume(&oracle, &resume("..."), &jobs(), MatchOptions::default())
            .await
            .unwrap();

        let ids: Vec<i32> = report.ranked.job_matches.iter().map(|m| m.job_id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(report.ranked.showing_top, 2);
    }

    #[tokio::test]
    async fn test_match_report_serializes_flat() {
        let oracle = ScriptedOracle::replying("docker");
        let report = match_resume(&oracle, &resume("..."), &jobs(), MatchOptions::default())
            .await
            .unwrap();
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["resume_id"], 42);
        assert_eq!(value["candidate_skills"][0], "docker");
        assert_eq!(value["total_matches_found"], 1);
        assert_eq!(value["showing_top"], 1);
        assert_eq!(value["job_matches"][0]["job_id"], 3);
    }
}
