// All Gemini prompt constants, one system/template pair per engine
// operation. Templates use `{placeholder}` substitution; replace every
// placeholder before sending.

/// System prompt for ATS resume generation — enforces JSON-only output.
pub const ATS_RESUME_SYSTEM: &str = "You are an expert resume writer and ATS \
    (Applicant Tracking System) specialist. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT invent facts not present in the profile.";

/// ATS resume prompt template. Replace `{profile_json}` before sending.
pub const ATS_RESUME_TEMPLATE: &str = r#"Build an ATS-optimized resume from the following user profile.

Return a JSON object with this EXACT schema (no extra fields):
{
  "summary": "Two to three sentence professional summary",
  "skills": ["skill keyword", "..."],
  "experience": [
    {"title": "...", "highlights": ["achievement bullet with metrics", "..."]}
  ],
  "education": [
    {"degree": "...", "institution": "...", "year": "..."}
  ],
  "ats_keywords": ["keyword the target role's screeners look for", "..."],
  "formatting_tips": ["short actionable tip", "..."]
}

Rules:
- Use only facts from the profile. Missing fields (null) are simply omitted from the output.
- Weave the target role's terminology into the summary and bullets.
- Keep every bullet to one line, starting with a strong verb.

USER PROFILE:
{profile_json}"#;

/// System prompt for cover letters. Output is prose, not JSON.
pub const COVER_LETTER_SYSTEM: &str = "You are an experienced career coach who \
    writes concise, specific cover letters. Respond with the letter text only: \
    no preamble, no commentary, no markdown.";

/// Cover letter template. Replace `{profile_json}` and `{job_description}`.
pub const COVER_LETTER_TEMPLATE: &str = r#"Write a personalized cover letter (250-350 words) for the candidate below applying to the given job.

Ground every claim in the candidate profile. Mirror the job description's language where honest. Address it to "Hiring Manager" if no name is available.

CANDIDATE PROFILE:
{profile_json}

JOB DESCRIPTION:
{job_description}"#;

/// System prompt for LinkedIn profile analysis — enforces JSON-only output.
pub const LINKEDIN_SYSTEM: &str = "You are a LinkedIn profile optimization expert. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// LinkedIn optimizer template. Replace `{profile_json}`.
pub const LINKEDIN_TEMPLATE: &str = r#"Analyze the following LinkedIn profile and return optimization advice.

Return a JSON object with this EXACT schema:
{
  "headline_score": 0,
  "suggested_headline": "...",
  "summary_feedback": "...",
  "section_feedback": [
    {"section": "experience", "feedback": "..."}
  ],
  "keywords_to_add": ["...", "..."],
  "overall_score": 0
}

Scores are integers from 0 to 100.

CURRENT PROFILE:
{profile_json}"#;

/// System prompt for mock interview questions — enforces JSON-only output.
pub const MOCK_INTERVIEW_SYSTEM: &str = "You are a senior interviewer conducting \
    a realistic mock interview. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Mock interview template. Replace `{role}`, `{difficulty}`, `{question_number}`.
pub const MOCK_INTERVIEW_TEMPLATE: &str = r#"Produce interview question number {question_number} for a {role} candidate at {difficulty} difficulty.

Return a JSON object with this EXACT schema:
{
  "question": "...",
  "category": "technical | behavioral | situational",
  "what_interviewer_looks_for": ["...", "..."],
  "hints": ["short nudge, not the answer", "..."]
}

Later question numbers should probe deeper than earlier ones."#;

/// System prompt for answer evaluation — enforces JSON-only output.
pub const EVALUATE_ANSWER_SYSTEM: &str = "You are a rigorous but fair interview \
    evaluator. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Answer evaluation template. Replace `{question}`, `{answer}`, `{role}`.
pub const EVALUATE_ANSWER_TEMPLATE: &str = r#"Evaluate the candidate's answer to an interview question for the role of {role}.

Return a JSON object with this EXACT schema:
{
  "score": 0,
  "strengths": ["...", "..."],
  "weaknesses": ["...", "..."],
  "improved_answer": "a stronger version of the same answer",
  "verdict": "strong | adequate | weak"
}

The score is an integer from 0 to 10.

QUESTION:
{question}

CANDIDATE ANSWER:
{answer}"#;

/// System prompt for career trajectory prediction — enforces JSON-only output.
pub const CAREER_TRAJECTORY_SYSTEM: &str = "You are a career strategist who maps \
    realistic multi-year career paths. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Career trajectory template. Replace `{profile_json}`.
pub const CAREER_TRAJECTORY_TEMPLATE: &str = r#"Predict a realistic career trajectory for the professional below.

Return a JSON object with this EXACT schema:
{
  "current_assessment": "...",
  "milestones": [
    {"years_from_now": 1, "role": "...", "focus": "..."}
  ],
  "long_term_options": ["...", "..."],
  "risks": ["...", "..."]
}

Cover at least the 1, 3, and 5 year marks in milestones.

PROFILE:
{profile_json}"#;

/// System prompt for skill gap analysis — enforces JSON-only output.
pub const SKILL_GAP_SYSTEM: &str = "You are a technical hiring expert who knows \
    what skills each role actually requires. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Skill gap template. Replace `{current_skills}` and `{target_role}`.
pub const SKILL_GAP_TEMPLATE: &str = r#"Compare the candidate's current skills against the requirements of the target role "{target_role}".

Return a JSON object with this EXACT schema:
{
  "matched_skills": ["...", "..."],
  "missing_skills": [
    {"skill": "...", "priority": "critical | important | nice_to_have"}
  ],
  "transferable_skills": ["...", "..."],
  "readiness_score": 0
}

readiness_score is an integer from 0 to 100.

CURRENT SKILLS:
{current_skills}"#;

/// System prompt for salary negotiation — enforces JSON-only output.
pub const SALARY_NEGOTIATION_SYSTEM: &str = "You are a compensation negotiation \
    coach. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Salary negotiation template. Replace `{profile_json}` and `{job_offer_json}`.
pub const SALARY_NEGOTIATION_TEMPLATE: &str = r#"Draft a salary negotiation strategy for the candidate and offer below.

Return a JSON object with this EXACT schema:
{
  "leverage_points": ["...", "..."],
  "target_range": {"low": "...", "high": "..."},
  "counter_script": "what to actually say, in the candidate's voice",
  "non_salary_items": ["...", "..."],
  "walk_away_signals": ["...", "..."]
}

CANDIDATE PROFILE:
{profile_json}

JOB OFFER:
{job_offer_json}"#;

/// System prompt for job description analysis — enforces JSON-only output.
pub const JOB_ANALYSIS_SYSTEM: &str = "You are an expert job description analyst. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Job analysis template. Replace `{job_description}`.
pub const JOB_ANALYSIS_TEMPLATE: &str = r#"Analyze the following job posting.

Return a JSON object with this EXACT schema:
{
  "title": "...",
  "seniority": "junior | mid | senior | staff | unknown",
  "hard_requirements": ["...", "..."],
  "nice_to_haves": ["...", "..."],
  "red_flags": ["...", "..."],
  "estimated_salary_range": "...",
  "application_tips": ["...", "..."]
}

Hard requirements are explicit must-haves ("required", "must have", minimum years). Nice-to-haves are "preferred", "bonus", "a plus".

JOB DESCRIPTION:
{job_description}"#;

/// System prompt for learning paths — enforces JSON-only output.
pub const LEARNING_PATH_SYSTEM: &str = "You are a curriculum designer for \
    working professionals. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Learning path template. Replace `{profile_json}` and `{goal}`.
pub const LEARNING_PATH_TEMPLATE: &str = r#"Design a personalized learning path toward this goal: {goal}

Return a JSON object with this EXACT schema:
{
  "phases": [
    {
      "name": "...",
      "duration_weeks": 0,
      "topics": ["...", "..."],
      "resources": [{"title": "...", "kind": "course | book | project | docs"}],
      "milestone": "how the learner knows this phase is done"
    }
  ],
  "weekly_hours": 0,
  "first_step": "something the learner can start today"
}

Sequence phases so each builds on the previous one. Prefer free resources where quality is comparable.

LEARNER PROFILE:
{profile_json}"#;

#[cfg(test)]
mod tests {
    use super::*;

    /// Every template must contain the placeholders its caller substitutes.
    #[test]
    fn templates_contain_their_placeholders() {
        assert!(ATS_RESUME_TEMPLATE.contains("{profile_json}"));
        assert!(COVER_LETTER_TEMPLATE.contains("{profile_json}"));
        assert!(COVER_LETTER_TEMPLATE.contains("{job_description}"));
        assert!(LINKEDIN_TEMPLATE.contains("{profile_json}"));
        assert!(MOCK_INTERVIEW_TEMPLATE.contains("{role}"));
        assert!(MOCK_INTERVIEW_TEMPLATE.contains("{difficulty}"));
        assert!(MOCK_INTERVIEW_TEMPLATE.contains("{question_number}"));
        assert!(EVALUATE_ANSWER_TEMPLATE.contains("{question}"));
        assert!(EVALUATE_ANSWER_TEMPLATE.contains("{answer}"));
        assert!(EVALUATE_ANSWER_TEMPLATE.contains("{role}"));
        assert!(CAREER_TRAJECTORY_TEMPLATE.contains("{profile_json}"));
        assert!(SKILL_GAP_TEMPLATE.contains("{current_skills}"));
        assert!(SKILL_GAP_TEMPLATE.contains("{target_role}"));
        assert!(SALARY_NEGOTIATION_TEMPLATE.contains("{profile_json}"));
        assert!(SALARY_NEGOTIATION_TEMPLATE.contains("{job_offer_json}"));
        assert!(JOB_ANALYSIS_TEMPLATE.contains("{job_description}"));
        assert!(LEARNING_PATH_TEMPLATE.contains("{profile_json}"));
        assert!(LEARNING_PATH_TEMPLATE.contains("{goal}"));
    }

    /// JSON-producing system prompts must all carry the no-fences rule the
    /// response parser relies on.
    #[test]
    fn json_system_prompts_forbid_code_fences() {
        for system in [
            ATS_RESUME_SYSTEM,
            LINKEDIN_SYSTEM,
            MOCK_INTERVIEW_SYSTEM,
            EVALUATE_ANSWER_SYSTEM,
            CAREER_TRAJECTORY_SYSTEM,
            SKILL_GAP_SYSTEM,
            SALARY_NEGOTIATION_SYSTEM,
            JOB_ANALYSIS_SYSTEM,
            LEARNING_PATH_SYSTEM,
        ] {
            assert!(system.contains("valid JSON only"));
            assert!(system.contains("markdown code fences"));
        }
    }
}
