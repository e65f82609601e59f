// All LLM prompt templates for the career advisor.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::advisor::catalog::render_catalog;
use crate::llm_client::prompts::{
    fill_template, ACTIONABLE_INSTRUCTION, COUNSELOR_PERSONA, JSON_ONLY_INSTRUCTION,
};
use crate::models::career::Profile;

/// Career analysis prompt template.
/// Replace: {persona}, {interests}, {skills}, {catalog}, {json_only}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"{persona} with deep knowledge of hidden, high-paying careers. Analyze the following user profile and match them to careers from the comprehensive database below.

User Interests: {interests}
User Skills: {skills}

{catalog}
MATCHING CRITERIA:
1. Match user interests and skills to careers that align with their temperament
2. Consider both direct matches and transferable skills
3. If no perfect match exists, recommend high-paying careers that utilize their core strengths
4. Prioritize careers with hidden pay factors (danger pay, stress pay, scarcity premiums, etc.)

Provide exactly 5 career recommendations in JSON format:
{
  "summary": "A 2-3 sentence analysis explaining the career direction based on their profile",
  "recommendations": [
    {
      "title": "Exact Career Title from Database",
      "description": "What the job involves (from the database)",
      "matchReason": "Specific explanation of why their interests/skills align",
      "growthPotential": "Include the hidden pay factor if mentioned in database",
      "requiredSkills": ["3-5 specific skills needed"]
    }
  ]
}

{json_only}"#;

/// Follow-up question prompt template.
/// Replace: {persona}, {career_title}, {question}, {actionable}
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"{persona}. Answer this question about the career: {career_title}

Question: {question}

Provide a clear, detailed answer covering relevant information like:
- Required tests/examinations
- Educational qualifications needed
- Key subjects to focus on
- Skills development path
- Industry insights
- Salary expectations
- Career progression

{actionable}"#;

/// Builds the analysis prompt. Deterministic for a given profile.
pub fn analysis_prompt(profile: &Profile) -> String {
    let interests = profile.interests_joined();
    let skills = profile.skills_joined();
    let catalog = render_catalog();

    fill_template(
        ANALYSIS_PROMPT_TEMPLATE,
        &[
            ("persona", COUNSELOR_PERSONA),
            ("interests", interests.as_str()),
            ("skills", skills.as_str()),
            ("catalog", catalog.as_str()),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}

pub fn question_prompt(question: &str, career_title: &str) -> String {
    fill_template(
        QUESTION_PROMPT_TEMPLATE,
        &[
            ("persona", COUNSELOR_PERSONA),
            ("career_title", career_title),
            ("question", question),
            ("actionable", ACTIONABLE_INSTRUCTION),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_prompt_embeds_profile_lists() {
        let profile = Profile::new(["music", "chess"], ["math", "writing"]);
        let prompt = analysis_prompt(&profile);
        assert!(prompt.contains("User Interests: music, chess"));
        assert!(prompt.contains("User Skills: math, writing"));
    }

    #[test]
    fn test_analysis_prompt_embeds_catalog_and_instructions() {
        let prompt = analysis_prompt(&Profile::new(["a"], ["b"]));
        assert!(prompt.contains("### 5. HIDDEN TECH ARCHITECTS"));
        assert!(prompt.contains("exactly 5 career recommendations"));
        assert!(prompt.contains("\"matchReason\""));
        assert!(prompt.ends_with(JSON_ONLY_INSTRUCTION));
        assert!(!prompt.contains("{persona}"));
        assert!(!prompt.contains("{catalog}"));
    }

    #[test]
    fn test_analysis_prompt_is_deterministic() {
        let profile = Profile::new(["music"], ["math"]);
        assert_eq!(analysis_prompt(&profile), analysis_prompt(&profile));
    }

    #[test]
    fn test_question_prompt_covers_topics() {
        let prompt = question_prompt("How long is training?", "Actuary");
        assert!(prompt.starts_with("You are an expert career counselor. Answer this question about the career: Actuary"));
        assert!(prompt.contains("Question: How long is training?"));
        for topic in [
            "Required tests/examinations",
            "Educational qualifications needed",
            "Key subjects to focus on",
            "Skills development path",
            "Industry insights",
            "Salary expectations",
            "Career progression",
        ] {
            assert!(prompt.contains(topic), "missing topic: {topic}");
        }
    }

    #[test]
    fn test_analysis_prompt_does_not_expand_user_placeholders() {
        let prompt = analysis_prompt(&Profile::new(["{skills}"], ["{catalog}"]));
        assert!(prompt.contains("User Interests: {skills}"));
        assert!(prompt.contains("User Skills: {catalog}"));
    }

    #[test]
    fn test_question_prompt_keeps_user_braces_verbatim() {
        let prompt = question_prompt("What about {career_title}?", "Colorist");
        assert!(prompt.contains("Question: What about {career_title}?"));
    }
}
