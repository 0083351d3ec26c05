//! Axum route handlers for the Resume API.

use axum::{
    extract::{Multipart, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::jobs::store::list_jobs;
use crate::matching::scoring::ZeroScorePolicy;
use crate::matching::skills::SkillSet;
use crate::matching::MatchOptions;
use crate::models::resume::ResumeRow;
use crate::resumes::analysis::{extract_skills, generate_feedback, match_resume, MatchReport, SkillScope};
use crate::resumes::extraction::{extract_pdf_text, is_pdf_filename};
use crate::resumes::store;
use crate::state::AppState;

/// Multipart field carrying the uploaded PDF.
const UPLOAD_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct MatchQuery {
    pub include_zero: Option<bool>,
    pub limit: Option<usize>,
}

impl MatchQuery {
    /// Layers the per-request overrides on top of the configured defaults.
    pub fn apply(self, defaults: MatchOptions) -> MatchOptions {
        MatchOptions {
            zero_scores: self
                .include_zero
                .map(ZeroScorePolicy::from_include_flag)
                .unwrap_or(defaults.zero_scores),
            limit: self.limit.unwrap_or(defaults.limit),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SkillsQuery {
    pub scope: Option<SkillScope>,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub resume_id: i32,
    pub scope: SkillScope,
    pub skills: SkillSet,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /resume/upload
///
/// Accepts a multipart PDF, extracts its text and stores it without feedback.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeRow>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        if !is_pdf_filename(&filename) {
            return Err(AppError::Validation("Only PDF files are accepted.".to_string()));
        }
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read uploaded file: {e}")))?;
        upload = Some((filename, data));
        break;
    }

    let (filename, data) = upload.ok_or_else(|| {
        AppError::Validation(format!("Missing multipart field '{UPLOAD_FIELD}'"))
    })?;

    let text = extract_pdf_text(data).await?;
    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Could not extract any text from the PDF.".to_string(),
        ));
    }

    let resume = store::insert_resume(&state.db, &filename, &text).await?;
    info!("Uploaded resume {} from '{}'", resume.id, filename);

    Ok(Json(resume))
}

/// GET /resume/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<i32>,
) -> Result<Json<ResumeRow>, AppError> {
    Ok(Json(load_resume(&state, resume_id).await?))
}

/// GET /resume/feedback/:id
///
/// Generates oracle feedback, stores it on the résumé and returns the updated row.
pub async fn handle_feedback(
    State(state): State<AppState>,
    Path(resume_id): Path<i32>,
) -> Result<Json<ResumeRow>, AppError> {
    let resume = load_resume(&state, resume_id).await?;

    let feedback = generate_feedback(state.oracle.as_ref(), &resume.content).await?;

    let updated = store::update_feedback(&state.db, resume.id, &feedback)
        .await?
        .ok_or_else(|| not_found(resume_id))?;

    Ok(Json(updated))
}

/// GET /resume/match/:id?include_zero=&limit=
///
/// Ranks every stored job against the résumé's technical skills.
pub async fn handle_match(
    State(state): State<AppState>,
    Path(resume_id): Path<i32>,
    Query(query): Query<MatchQuery>,
) -> Result<Json<MatchReport>, AppError> {
    let resume = load_resume(&state, resume_id).await?;

    let options = query.apply(state.config.match_options());

    let jobs = list_jobs(&state.db).await?;
    let report = match_resume(state.oracle.as_ref(), &resume, &jobs, options).await?;

    Ok(Json(report))
}

/// GET /resume/skills/:id?scope=technical|all
pub async fn handle_skills(
    State(state): State<AppState>,
    Path(resume_id): Path<i32>,
    Query(query): Query<SkillsQuery>,
) -> Result<Json<SkillsResponse>, AppError> {
    let resume = load_resume(&state, resume_id).await?;
    let scope = query.scope.unwrap_or_default();

    let skills = extract_skills(state.oracle.as_ref(), &resume.content, scope).await?;

    Ok(Json(SkillsResponse {
        resume_id,
        scope,
        skills,
    }))
}

async fn load_resume(state: &AppState, resume_id: i32) -> Result<ResumeRow, AppError> {
    store::get_resume(&state.db, resume_id)
        .await?
        .ok_or_else(|| not_found(resume_id))
}

fn not_found(resume_id: i32) -> AppError {
    AppError::NotFound(format!("Resume {resume_id} not found"))
}

#[cfg(test)]
mod tests {
    use axum::http::Uri;

    use super::*;

    fn defaults(zero_scores: ZeroScorePolicy) -> MatchOptions {
        MatchOptions {
            zero_scores,
            limit: 5,
        }
    }

    fn query(include_zero: Option<bool>, limit: Option<usize>) -> MatchQuery {
        MatchQuery {
            include_zero,
            limit,
        }
    }

    #[test]
    fn test_empty_query_keeps_defaults() {
        for policy in [ZeroScorePolicy::Include, ZeroScorePolicy::Exclude] {
            assert_eq!(MatchQuery::default().apply(defaults(policy)), defaults(policy));
        }
    }

    #[test]
    fn test_include_zero_overrides_either_default() {
        let cases = [
            (ZeroScorePolicy::Exclude, true, ZeroScorePolicy::Include),
            (ZeroScorePolicy::Exclude, false, ZeroScorePolicy::Exclude),
            (ZeroScorePolicy::Include, true, ZeroScorePolicy::Include),
            (ZeroScorePolicy::Include, false, ZeroScorePolicy::Exclude),
        ];
        for (default_policy, flag, expected) in cases {
            let options = query(Some(flag), None).apply(defaults(default_policy));
            assert_eq!(options.zero_scores, expected, "default {default_policy:?}, flag {flag}");
            assert_eq!(options.limit, 5);
        }
    }

    #[test]
    fn test_limit_override() {
        let options = query(None, Some(2)).apply(defaults(ZeroScorePolicy::Exclude));
        assert_eq!(options.limit, 2);
        assert_eq!(options.zero_scores, ZeroScorePolicy::Exclude);
    }

    #[test]
    fn test_match_query_parses_from_uri() {
        let uri: Uri = "/resume/match/1?include_zero=true&limit=3".parse().unwrap();
        let Query(parsed) = Query::<MatchQuery>::try_from_uri(&uri).unwrap();
        let options = parsed.apply(defaults(ZeroScorePolicy::Exclude));
        assert_eq!(options.zero_scores, ZeroScorePolicy::Include);
        assert_eq!(options.limit, 3);
    }

    #[test]
    fn test_skills_query_scope_parses() {
        let uri: Uri = "/resume/skills/1?scope=all".parse().unwrap();
        let Query(parsed) = Query::<SkillsQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(parsed.scope, Some(SkillScope::All));

        let uri: Uri = "/resume/skills/1".parse().unwrap();
        let Query(parsed) = Query::<SkillsQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(parsed.scope.unwrap_or_default(), SkillScope::Technical);

        let uri: Uri = "/resume/skills/1?scope=bogus".parse().unwrap();
        assert!(Query::<SkillsQuery>::try_from_uri(&uri).is_err());
    }
}
