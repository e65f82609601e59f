use serde::{Deserialize, Serialize};

/// A user's self-reported interests and skills.
///
/// Entries are trimmed, blanks are dropped and exact duplicates collapse onto
/// their first occurrence, so the order the user typed them in is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    interests: Vec<String>,
    skills: Vec<String>,
}

impl Profile {
    pub fn new<I, S>(interests: I, skills: S) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        Self {
            interests: normalize_entries(interests),
            skills: normalize_entries(skills),
        }
    }

    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// True when the profile carries at least one interest and one skill.
    /// The advisor must only ever be called with complete profiles.
    pub fn is_complete(&self) -> bool {
        !self.interests.is_empty() && !self.skills.is_empty()
    }

    pub fn interests_joined(&self) -> String {
        self.interests().join(", ")
    }

    pub fn skills_joined(&self) -> String {
        self.skills().join(", ")
    }
}

fn normalize_entries<I>(entries: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for entry in entries {
        let entry = entry.as_ref().trim();
        if entry.is_empty() || out.iter().any(|e| e == entry) {
            continue;
        }
        out.push(entry.to_string());
    }
    out
}

/// One recommended career, as produced by the model or the offline fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub match_reason: String,
    pub growth_potential: String,
    pub required_skills: Vec<String>,
}

/// Result of one profile analysis. Either decoded in full from a single model
/// reply or entirely the static fallback; the two are never mixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub recommendations: Vec<Recommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_trims_and_drops_blank_entries() {
        let profile = Profile::new(["  music ", "", "   "], ["math"]);
        assert_eq!(profile.interests(), &["music".to_string()]);
        assert_eq!(profile.skills(), &["math".to_string()]);
    }

    #[test]
    fn test_profile_dedups_exact_matches_keeping_order() {
        let profile = Profile::new(["chess", "art", "chess", "Chess"], ["python", "python "]);
        assert_eq!(profile.interests(), &["chess", "art", "Chess"]);
        assert_eq!(profile.skills(), &["python"]);
    }

    #[test]
    fn test_profile_completeness() {
        assert!(Profile::new(["a"], ["b"]).is_complete());
        assert!(!Profile::new(Vec::<String>::new(), ["b"]).is_complete());
        assert!(!Profile::new(["a"], [" "]).is_complete());
    }

    #[test]
    fn test_profile_joins_with_comma_space() {
        let profile = Profile::new(["music", "chess"], ["math", "writing"]);
        assert_eq!(profile.interests_joined(), "music, chess");
        assert_eq!(profile.skills_joined(), "math, writing");
    }

    #[test]
    fn test_recommendation_uses_camel_case_fields() {
        let json = r#"{
            "title": "Actuary",
            "description": "Risk calculation",
            "matchReason": "Loves probability",
            "growthPotential": "Exam premiums",
            "requiredSkills": ["Statistics", "Excel"]
        }"#;
        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.match_reason, "Loves probability");
        assert_eq!(rec.required_skills.len(), 2);

        let back = serde_json::to_value(&rec).unwrap();
        assert!(back.get("growthPotential").is_some());
        assert!(back.get("growth_potential").is_none());
    }

    #[test]
    fn test_recommendation_rejects_missing_field() {
        let json = r#"{"title": "Actuary", "description": "x", "matchReason": "y", "growthPotential": "z"}"#;
        assert!(serde_json::from_str::<Recommendation>(json).is_err());
    }

    #[test]
    fn test_analysis_result_requires_recommendations() {
        let json = r#"{"summary": "ok"}"#;
        assert!(serde_json::from_str::<AnalysisResult>(json).is_err());
    }
}
