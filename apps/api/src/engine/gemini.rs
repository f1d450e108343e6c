//! Gemini client — the concrete [`CareerEngine`] backed by the Google
//! Generative Language API.
//!
//! Model: gemini-1.5-flash (hardcoded — do not make configurable to prevent drift)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::engine::prompts;
use crate::engine::{CareerEngine, EngineError, JsonObject, UserProfile};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all engine calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-1.5-flash";
const MAX_OUTPUT_TOKENS: u32 = 4096;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: SystemInstruction<'a>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Extracts the text of the first candidate's first text part.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.iter().find_map(|p| p.text.as_deref()))
    }
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    error: GeminiApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiApiErrorBody {
    message: String,
}

/// The Gemini-backed engine. One instance is shared by all requests; the
/// inner reqwest client carries the only timeout in the system.
#[derive(Clone)]
pub struct GeminiEngine {
    client: Client,
    api_key: String,
}

impl GeminiEngine {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Makes a single generateContent call. No retry: a failed request is
    /// the request's failure, surfaced to the caller as one unit.
    async fn call(&self, prompt: &str, system: &str) -> Result<GenerateContentResponse, EngineError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![TextPart { text: prompt }],
            }],
            system_instruction: SystemInstruction {
                parts: vec![TextPart { text: system }],
            },
            generation_config: GenerationConfig {
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .client
            .post(format!("{GEMINI_API_BASE}/{MODEL}:generateContent"))
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the API's own message when the error body parses
            let message = serde_json::from_str::<GeminiApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(EngineError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "Gemini call succeeded: prompt_tokens={}, output_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        Ok(parsed)
    }

    /// Calls the model and deserializes the text response as JSON.
    /// The prompt must instruct the model to return valid JSON.
    async fn call_json(&self, prompt: &str, system: &str) -> Result<Value, EngineError> {
        let response = self.call(prompt, system).await?;
        let text = response.text().ok_or(EngineError::EmptyContent)?;
        // Strip markdown code fences if the model wraps JSON in them
        let text = strip_json_fences(text);
        serde_json::from_str(text).map_err(EngineError::Parse)
    }

    /// Calls the model and returns the raw text response.
    async fn call_text(&self, prompt: &str, system: &str) -> Result<String, EngineError> {
        let response = self.call(prompt, system).await?;
        response
            .text()
            .map(str::to_owned)
            .ok_or(EngineError::EmptyContent)
    }
}

#[async_trait]
impl CareerEngine for GeminiEngine {
    async fn generate_ats_resume(&self, profile: &UserProfile) -> Result<Value, EngineError> {
        let prompt = prompts::ATS_RESUME_TEMPLATE
            .replace("{profile_json}", &serde_json::to_string_pretty(profile)?);
        let resume = self.call_json(&prompt, prompts::ATS_RESUME_SYSTEM).await?;
        Ok(json!({ "success": true, "resume": resume }))
    }

    async fn generate_cover_letter(
        &self,
        profile: &JsonObject,
        job_description: &str,
    ) -> Result<String, EngineError> {
        let prompt = prompts::COVER_LETTER_TEMPLATE
            .replace("{profile_json}", &serde_json::to_string_pretty(profile)?)
            .replace("{job_description}", job_description);
        self.call_text(&prompt, prompts::COVER_LETTER_SYSTEM).await
    }

    async fn analyze_linkedin_profile(&self, profile: &JsonObject) -> Result<Value, EngineError> {
        let prompt = prompts::LINKEDIN_TEMPLATE
            .replace("{profile_json}", &serde_json::to_string_pretty(profile)?);
        let analysis = self.call_json(&prompt, prompts::LINKEDIN_SYSTEM).await?;
        Ok(json!({ "success": true, "analysis": analysis }))
    }

    async fn next_interview_question(
        &self,
        role: &str,
        difficulty: &str,
        question_number: u32,
    ) -> Result<Value, EngineError> {
        let prompt = prompts::MOCK_INTERVIEW_TEMPLATE
            .replace("{role}", role)
            .replace("{difficulty}", difficulty)
            .replace("{question_number}", &question_number.to_string());
        let question = self
            .call_json(&prompt, prompts::MOCK_INTERVIEW_SYSTEM)
            .await?;
        Ok(json!({ "success": true, "question": question }))
    }

    async fn evaluate_interview_answer(
        &self,
        question: &str,
        answer: &str,
        role: &str,
    ) -> Result<Value, EngineError> {
        let prompt = prompts::EVALUATE_ANSWER_TEMPLATE
            .replace("{question}", question)
            .replace("{answer}", answer)
            .replace("{role}", role);
        let evaluation = self
            .call_json(&prompt, prompts::EVALUATE_ANSWER_SYSTEM)
            .await?;
        Ok(json!({ "success": true, "evaluation": evaluation }))
    }

    async fn predict_career_trajectory(&self, profile: &JsonObject) -> Result<Value, EngineError> {
        let prompt = prompts::CAREER_TRAJECTORY_TEMPLATE
            .replace("{profile_json}", &serde_json::to_string_pretty(profile)?);
        let trajectory = self
            .call_json(&prompt, prompts::CAREER_TRAJECTORY_SYSTEM)
            .await?;
        Ok(json!({ "success": true, "trajectory": trajectory }))
    }

    async fn analyze_skill_gaps(
        &self,
        current_skills: &Value,
        target_role: &str,
    ) -> Result<Value, EngineError> {
        let prompt = prompts::SKILL_GAP_TEMPLATE
            .replace("{current_skills}", &serde_json::to_string(current_skills)?)
            .replace("{target_role}", target_role);
        let skill_gaps = self.call_json(&prompt, prompts::SKILL_GAP_SYSTEM).await?;
        Ok(json!({ "success": true, "skill_gaps": skill_gaps }))
    }

    async fn salary_negotiation_strategy(
        &self,
        profile: &JsonObject,
        job_offer: &JsonObject,
    ) -> Result<Value, EngineError> {
        let prompt = prompts::SALARY_NEGOTIATION_TEMPLATE
            .replace("{profile_json}", &serde_json::to_string_pretty(profile)?)
            .replace("{job_offer_json}", &serde_json::to_string_pretty(job_offer)?);
        let strategy = self
            .call_json(&prompt, prompts::SALARY_NEGOTIATION_SYSTEM)
            .await?;
        Ok(json!({ "success": true, "strategy": strategy }))
    }

    async fn analyze_job_description(&self, job_description: &str) -> Result<Value, EngineError> {
        let prompt = prompts::JOB_ANALYSIS_TEMPLATE.replace("{job_description}", job_description);
        let job_analysis = self.call_json(&prompt, prompts::JOB_ANALYSIS_SYSTEM).await?;
        Ok(json!({ "success": true, "job_analysis": job_analysis }))
    }

    async fn generate_learning_path(
        &self,
        profile: &JsonObject,
        goal: &str,
    ) -> Result<Value, EngineError> {
        let prompt = prompts::LEARNING_PATH_TEMPLATE
            .replace("{profile_json}", &serde_json::to_string_pretty(profile)?)
            .replace("{goal}", goal);
        let learning_path = self
            .call_json(&prompt, prompts::LEARNING_PATH_SYSTEM)
            .await?;
        Ok(json!({ "success": true, "learning_path": learning_path }))
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
