//! Career Advisor — turns profiles and follow-up questions into LLM prompts and
//! reduces the replies into typed results.
//!
//! Every failure is absorbed here: callers always receive a value of the
//! expected shape, either model-derived or from `fallback`.
//! All LLM calls go through `llm_client::TextGenerator`.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::llm_client::{extract_json_object, GenerationConfig, LlmError, TextGenerator};
use crate::models::career::{AnalysisResult, Profile};
use crate::models::credential::Credential;

pub mod catalog;
pub mod fallback;
pub mod handlers;
pub mod prompts;

/// Number of recommendations the analysis prompt asks for. Not enforced.
pub const EXPECTED_RECOMMENDATIONS: usize = 5;

pub const ANALYSIS_CONFIG: GenerationConfig = GenerationConfig {
    temperature: 0.7,
    max_output_tokens: 2048,
};

pub const QUESTION_CONFIG: GenerationConfig = GenerationConfig {
    temperature: 0.7,
    max_output_tokens: 1024,
};

/// Built once at startup and shared through `AppState`.
#[derive(Clone)]
pub struct CareerAdvisor {
    generator: Arc<dyn TextGenerator>,
    default_credential: Option<Credential>,
}

impl CareerAdvisor {
    pub fn new(generator: Arc<dyn TextGenerator>, default_credential: Option<Credential>) -> Self {
        Self {
            generator,
            default_credential,
        }
    }

    pub fn has_default_credential(&self) -> bool {
        self.default_credential.is_some()
    }

    /// An explicitly supplied credential wins over the configured default.
    fn resolve_credential<'a>(&'a self, explicit: Option<&'a Credential>) -> Option<&'a Credential> {
        explicit.or(self.default_credential.as_ref())
    }

    /// Recommends careers for a complete profile.
    ///
    /// Without any credential the static fallback is returned and no request is
    /// made. Transport failures and undecodable replies also yield the fallback.
    pub async fn analyze(&self, profile: &Profile, credential: Option<&Credential>) -> AnalysisResult {
        let Some(credential) = self.resolve_credential(credential) else {
            info!("No credential available, serving offline career recommendations");
            return fallback::analysis(profile);
        };

        let prompt = prompts::analysis_prompt(profile);

        let reply = match self.generator.generate(credential, &prompt, ANALYSIS_CONFIG).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Career analysis request failed, using fallback: {e}");
                return fallback::analysis(profile);
            }
        };

        match reduce_analysis(reply.text().unwrap_or_default()) {
            Ok(result) => {
                log_trust_gaps(&result);
                result
            }
            Err(e) => {
                warn!("Career analysis reply could not be decoded, using fallback: {e}");
                fallback::analysis(profile)
            }
        }
    }

    /// Answers a follow-up question about one career. Never returns an empty string.
    pub async fn answer_question(
        &self,
        question: &str,
        career_title: &str,
        credential: Option<&Credential>,
    ) -> String {
        let Some(credential) = self.resolve_credential(credential) else {
            info!("No credential available, serving offline answer");
            return fallback::answer(question);
        };

        let prompt = prompts::question_prompt(question, career_title);

        match self.generator.generate(credential, &prompt, QUESTION_CONFIG).await {
            Ok(reply) => match reply.text() {
                Some(text) if !text.trim().is_empty() => text.to_string(),
                _ => {
                    warn!("Career question reply had no text for '{career_title}'");
                    fallback::APOLOGY_ANSWER.to_string()
                }
            },
            Err(e) => {
                warn!("Career question request failed, using fallback: {e}");
                fallback::answer(question)
            }
        }
    }
}

/// Extracts the first JSON object from model text and strictly decodes it.
/// No partial results: any missing or mistyped field is an error.
pub fn reduce_analysis(text: &str) -> Result<AnalysisResult, LlmError> {
    let span = extract_json_object(text).ok_or(LlmError::NoJsonObject)?;
    Ok(serde_json::from_str(span)?)
}

// Count and catalog membership are a trust boundary: logged, never corrected.
fn log_trust_gaps(result: &AnalysisResult) {
    if result.recommendations.len() != EXPECTED_RECOMMENDATIONS {
        warn!(
            "Model returned {} recommendations (expected {})",
            result.recommendations.len(),
            EXPECTED_RECOMMENDATIONS
        );
    }

    let off_catalog = result
        .recommendations
        .iter()
        .filter(|r| !catalog::contains_title(&r.title))
        .count();
    if off_catalog > 0 {
        debug!("{off_catalog} recommended title(s) are not in the reference catalog");
    }
}
