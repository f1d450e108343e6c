//! Axum route handlers for the Gemini delegation endpoints.
//!
//! Every handler does the same shape of work: extract the endpoint's fields
//! with their defaults, invoke exactly one engine operation, relay the
//! result. The response wrapping is deliberately uneven across endpoints —
//! most engine results already carry `success`, the cover letter is wrapped
//! here — and existing clients depend on each endpoint's current shape, so
//! it must not be unified.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::engine::{JsonObject, UserProfile};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
//
// One typed struct per endpoint; serde defaults encode the per-field
// fallbacks callers rely on. A missing or unusable body means "all
// defaults" everywhere except ats-resume, which requires one.
// ────────────────────────────────────────────────────────────────────────────

fn default_role() -> String {
    "Software Engineer".to_string()
}

fn default_difficulty() -> String {
    "medium".to_string()
}

fn default_question_number() -> u32 {
    1
}

fn empty_array() -> Value {
    Value::Array(Vec::new())
}

#[derive(Debug, Default, Deserialize)]
pub struct CoverLetterRequest {
    #[serde(default)]
    pub user_profile: JsonObject,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LinkedInOptimizerRequest {
    #[serde(default)]
    pub current_profile: JsonObject,
}

#[derive(Debug, Deserialize)]
pub struct MockInterviewRequest {
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default = "default_question_number")]
    pub question_number: u32,
}

impl Default for MockInterviewRequest {
    fn default() -> Self {
        Self {
            role: default_role(),
            difficulty: default_difficulty(),
            question_number: default_question_number(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct EvaluateAnswerRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CareerTrajectoryRequest {
    #[serde(default)]
    pub user_profile: JsonObject,
}

#[derive(Debug, Deserialize)]
pub struct SkillGapRequest {
    #[serde(default = "empty_array")]
    pub current_skills: Value,
    #[serde(default)]
    pub target_role: String,
}

impl Default for SkillGapRequest {
    fn default() -> Self {
        Self {
            current_skills: empty_array(),
            target_role: String::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SalaryNegotiationRequest {
    #[serde(default)]
    pub user_profile: JsonObject,
    #[serde(default)]
    pub job_offer: JsonObject,
}

#[derive(Debug, Default, Deserialize)]
pub struct JobAnalysisRequest {
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LearningPathRequest {
    #[serde(default)]
    pub user_profile: JsonObject,
    #[serde(default)]
    pub goal: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/gemini/ats-resume
///
/// The one endpoint with an explicit body-required check: an absent,
/// unparseable, or empty body is a 400. The engine-availability check runs
/// first, and engine failures here carry the `details` log pointer.
pub async fn handle_ats_resume(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<Value>, AppError> {
    let engine = state.engine()?;

    let data = body.map(|Json(v)| v).unwrap_or(Value::Null);
    if data.as_object().map_or(true, |fields| fields.is_empty()) {
        return Err(AppError::NoData);
    }
    // Infallible for any JSON object: every profile field is Value-typed
    let profile: UserProfile = serde_json::from_value(data).map_err(|_| AppError::NoData)?;

    let result = engine
        .generate_ats_resume(&profile)
        .await
        .map_err(|e| AppError::EngineDetailed(e.to_string()))?;
    Ok(Json(result))
}

/// POST /api/gemini/cover-letter
///
/// Wraps the engine's letter text as `{"success": true, "cover_letter": …}`.
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    body: Option<Json<CoverLetterRequest>>,
) -> Result<Json<Value>, AppError> {
    let engine = state.engine()?;
    let req = body.map(|Json(r)| r).unwrap_or_default();

    let letter = engine
        .generate_cover_letter(&req.user_profile, &req.job_description)
        .await
        .map_err(|e| AppError::Engine(e.to_string()))?;
    Ok(Json(json!({ "success": true, "cover_letter": letter })))
}

/// POST /api/gemini/linkedin-optimizer
///
/// Relays the engine mapping unwrapped.
pub async fn handle_linkedin_optimizer(
    State(state): State<AppState>,
    body: Option<Json<LinkedInOptimizerRequest>>,
) -> Result<Json<Value>, AppError> {
    let engine = state.engine()?;
    let req = body.map(|Json(r)| r).unwrap_or_default();

    let result = engine
        .analyze_linkedin_profile(&req.current_profile)
        .await
        .map_err(|e| AppError::Engine(e.to_string()))?;
    Ok(Json(result))
}

/// POST /api/gemini/mock-interview
pub async fn handle_mock_interview(
    State(state): State<AppState>,
    body: Option<Json<MockInterviewRequest>>,
) -> Result<Json<Value>, AppError> {
    let engine = state.engine()?;
    let req = body.map(|Json(r)| r).unwrap_or_default();

    let result = engine
        .next_interview_question(&req.role, &req.difficulty, req.question_number)
        .await
        .map_err(|e| AppError::Engine(e.to_string()))?;
    Ok(Json(result))
}

/// POST /api/gemini/evaluate-answer
pub async fn handle_evaluate_answer(
    State(state): State<AppState>,
    body: Option<Json<EvaluateAnswerRequest>>,
) -> Result<Json<Value>, AppError> {
    let engine = state.engine()?;
    let req = body.map(|Json(r)| r).unwrap_or_default();

    let result = engine
        .evaluate_interview_answer(&req.question, &req.answer, &req.role)
        .await
        .map_err(|e| AppError::Engine(e.to_string()))?;
    Ok(Json(result))
}

/// POST /api/gemini/career-trajectory
pub async fn handle_career_trajectory(
    State(state): State<AppState>,
    body: Option<Json<CareerTrajectoryRequest>>,
) -> Result<Json<Value>, AppError> {
    let engine = state.engine()?;
    let req = body.map(|Json(r)| r).unwrap_or_default();

    let result = engine
        .predict_career_trajectory(&req.user_profile)
        .await
        .map_err(|e| AppError::Engine(e.to_string()))?;
    Ok(Json(result))
}

/// POST /api/gemini/skill-gap
///
/// The engine always receives a skills array and a role string — `[]` and
/// `""` when the caller sent nothing, never null or absent.
pub async fn handle_skill_gap(
    State(state): State<AppState>,
    body: Option<Json<SkillGapRequest>>,
) -> Result<Json<Value>, AppError> {
    let engine = state.engine()?;
    let req = body.map(|Json(r)| r).unwrap_or_default();

    let result = engine
        .analyze_skill_gaps(&req.current_skills, &req.target_role)
        .await
        .map_err(|e| AppError::Engine(e.to_string()))?;
    Ok(Json(result))
}

/// POST /api/gemini/salary-negotiation
pub async fn handle_salary_negotiation(
    State(state): State<AppState>,
    body: Option<Json<SalaryNegotiationRequest>>,
) -> Result<Json<Value>, AppError> {
    let engine = state.engine()?;
    let req = body.map(|Json(r)| r).unwrap_or_default();

    let result = engine
        .salary_negotiation_strategy(&req.user_profile, &req.job_offer)
        .await
        .map_err(|e| AppError::Engine(e.to_string()))?;
    Ok(Json(result))
}

/// POST /api/gemini/job-analysis
pub async fn handle_job_analysis(
    State(state): State<AppState>,
    body: Option<Json<JobAnalysisRequest>>,
) -> Result<Json<Value>, AppError> {
    let engine = state.engine()?;
    let req = body.map(|Json(r)| r).unwrap_or_default();

    let result = engine
        .analyze_job_description(&req.job_description)
        .await
        .map_err(|e| AppError::Engine(e.to_string()))?;
    Ok(Json(result))
}

/// POST /api/gemini/learning-path
pub async fn handle_learning_path(
    State(state): State<AppState>,
    body: Option<Json<LearningPathRequest>>,
) -> Result<Json<Value>, AppError> {
    let engine = state.engine()?;
    let req = body.map(|Json(r)| r).unwrap_or_default();

    let result = engine
        .generate_learning_path(&req.user_profile, &req.goal)
        .await
        .map_err(|e| AppError::Engine(e.to_string()))?;
    Ok(Json(result))
}
