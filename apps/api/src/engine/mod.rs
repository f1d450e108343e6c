/// Career engine — the single seam between the HTTP gateway and Gemini.
///
/// ARCHITECTURAL RULE: no other module may call the Gemini API directly.
/// All LLM interactions MUST go through the [`CareerEngine`] implementation
/// in [`gemini`].
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

pub mod gemini;
pub mod prompts;

/// A string-keyed JSON object — the shape of every profile-like payload
/// callers submit. Kept untyped on purpose: the engine forwards whatever
/// structure the caller sent to the model.
pub type JsonObject = Map<String, Value>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Gemini returned empty content")]
    EmptyContent,
}

/// The nine profile fields the resume builder reads from a request.
/// Fields are heterogeneous (`Value`) because callers send strings, numbers,
/// or nested structures and the engine passes them through verbatim; an
/// absent field becomes JSON `null`, absent skills become `[]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub email: Value,
    #[serde(default)]
    pub phone: Value,
    #[serde(default)]
    pub target_role: Value,
    #[serde(default)]
    pub years_experience: Value,
    #[serde(default = "empty_array")]
    pub skills: Value,
    #[serde(default)]
    pub education: Value,
    #[serde(default)]
    pub experience: Value,
    #[serde(default)]
    pub achievements: Value,
}

fn empty_array() -> Value {
    Value::Array(Vec::new())
}

/// One method per gateway endpoint. Every method returns the mapping the
/// gateway relays to the caller as-is, except [`generate_cover_letter`],
/// which returns the letter text for the handler to wrap.
/// Failure is always an `Err`, never a sentinel value.
///
/// [`generate_cover_letter`]: CareerEngine::generate_cover_letter
#[async_trait]
pub trait CareerEngine: Send + Sync {
    /// Builds an ATS-optimized resume from a user profile.
    async fn generate_ats_resume(&self, profile: &UserProfile) -> Result<Value, EngineError>;

    /// Writes a cover letter personalized to a profile and job description.
    async fn generate_cover_letter(
        &self,
        profile: &JsonObject,
        job_description: &str,
    ) -> Result<String, EngineError>;

    /// Analyzes a professional-network profile and suggests improvements.
    async fn analyze_linkedin_profile(&self, profile: &JsonObject) -> Result<Value, EngineError>;

    /// Produces the next question of a mock interview session.
    async fn next_interview_question(
        &self,
        role: &str,
        difficulty: &str,
        question_number: u32,
    ) -> Result<Value, EngineError>;

    /// Scores a candidate's answer to an interview question.
    async fn evaluate_interview_answer(
        &self,
        question: &str,
        answer: &str,
        role: &str,
    ) -> Result<Value, EngineError>;

    /// Predicts a plausible career trajectory from a profile.
    async fn predict_career_trajectory(&self, profile: &JsonObject) -> Result<Value, EngineError>;

    /// Compares current skills against a target role.
    async fn analyze_skill_gaps(
        &self,
        current_skills: &Value,
        target_role: &str,
    ) -> Result<Value, EngineError>;

    /// Drafts a salary-negotiation strategy for a concrete offer.
    async fn salary_negotiation_strategy(
        &self,
        profile: &JsonObject,
        job_offer: &JsonObject,
    ) -> Result<Value, EngineError>;

    /// Breaks a job posting down into requirements and signals.
    async fn analyze_job_description(&self, job_description: &str) -> Result<Value, EngineError>;

    /// Generates a personalized learning path toward a goal.
    async fn generate_learning_path(
        &self,
        profile: &JsonObject,
        goal: &str,
    ) -> Result<Value, EngineError>;
}
