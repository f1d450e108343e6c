pub mod gemini;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/gemini/ats-resume", post(gemini::handle_ats_resume))
        .route("/api/gemini/cover-letter", post(gemini::handle_cover_letter))
        .route(
            "/api/gemini/linkedin-optimizer",
            post(gemini::handle_linkedin_optimizer),
        )
        .route(
            "/api/gemini/mock-interview",
            post(gemini::handle_mock_interview),
        )
        .route(
            "/api/gemini/evaluate-answer",
            post(gemini::handle_evaluate_answer),
        )
        .route(
            "/api/gemini/career-trajectory",
            post(gemini::handle_career_trajectory),
        )
        .route("/api/gemini/skill-gap", post(gemini::handle_skill_gap))
        .route(
            "/api/gemini/salary-negotiation",
            post(gemini::handle_salary_negotiation),
        )
        .route("/api/gemini/job-analysis", post(gemini::handle_job_analysis))
        .route(
            "/api/gemini/learning-path",
            post(gemini::handle_learning_path),
        )
        .with_state(state)
}
