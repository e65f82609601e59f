//! Offline answers served when no credential is available or the remote call
//! cannot be completed or trusted. Everything here is deterministic.

use crate::models::career::{AnalysisResult, Profile, Recommendation};

/// Substituted when the endpoint answers but the reply carries no text.
pub const APOLOGY_ANSWER: &str =
    "I apologize, but I couldn't generate a response. Please try again.";

struct StaticRecommendation {
    title: &'static str,
    description: &'static str,
    match_reason: &'static str,
    growth_potential: &'static str,
    required_skills: &'static [&'static str],
}

const RECOMMENDATIONS: [StaticRecommendation; 5] = [
    StaticRecommendation {
        title: "UX/UI Designer",
        description: "Create intuitive and engaging user experiences for digital products.",
        match_reason: "Your creative interests align perfectly with design thinking and user-centered approaches.",
        growth_potential: "High demand with 15% projected growth. Remote opportunities abundant.",
        required_skills: &["Figma", "User Research", "Prototyping", "Design Systems"],
    },
    StaticRecommendation {
        title: "Product Manager",
        description: "Lead product strategy and coordinate cross-functional teams to deliver impactful solutions.",
        match_reason: "Your analytical and communication skills are essential for product leadership.",
        growth_potential: "Excellent growth trajectory with median salaries exceeding $120k.",
        required_skills: &["Product Strategy", "Stakeholder Management", "Data Analysis", "Agile"],
    },
    StaticRecommendation {
        title: "Data Analyst",
        description: "Transform raw data into actionable insights that drive business decisions.",
        match_reason: "Strong analytical capabilities make you well-suited for data-driven roles.",
        growth_potential: "Rapidly growing field with 25% projected growth over the next decade.",
        required_skills: &["SQL", "Python", "Tableau", "Statistical Analysis"],
    },
    StaticRecommendation {
        title: "Content Strategist",
        description: "Develop and execute content strategies that engage audiences and achieve business goals.",
        match_reason: "Your communication skills and creative thinking are perfect for strategic content roles.",
        growth_potential: "Growing demand in digital marketing with diverse industry opportunities.",
        required_skills: &["SEO", "Content Planning", "Analytics", "Copywriting"],
    },
    StaticRecommendation {
        title: "Software Engineer",
        description: "Build scalable applications and solve complex technical challenges.",
        match_reason: "Your problem-solving abilities and technical aptitude suit engineering roles.",
        growth_potential: "Exceptional demand with competitive salaries and continuous learning opportunities.",
        required_skills: &["JavaScript", "React", "Node.js", "System Design"],
    },
];

/// The fixed five-career result. Only the summary depends on the profile.
pub fn analysis(profile: &Profile) -> AnalysisResult {
    let recommendations = RECOMMENDATIONS
        .iter()
        .map(|r| Recommendation {
            title: r.title.to_string(),
            description: r.description.to_string(),
            match_reason: r.match_reason.to_string(),
            growth_potential: r.growth_potential.to_string(),
            required_skills: r.required_skills.iter().map(|s| s.to_string()).collect(),
        })
        .collect();

    AnalysisResult {
        summary: format!(
            "Based on your unique combination of interests ({}) and skills ({}), we've identified \
             career paths that leverage your strengths while offering strong growth potential and \
             market demand.",
            profile.interests_joined(),
            profile.skills_joined()
        ),
        recommendations,
    }
}

/// Generic guidance that quotes the question back. Never empty.
pub fn answer(question: &str) -> String {
    format!(
        "Based on your question about \"{question}\", I recommend researching specific educational \
         requirements, certification exams, and skill development paths for this career. Industry \
         associations and professional organizations typically provide detailed guidance on entry \
         requirements and career progression."
    )
}
