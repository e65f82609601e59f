// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments only.

/// Persona line that opens every counselling prompt.
pub const COUNSELOR_PERSONA: &str = "You are an expert career counselor";

/// Closing instruction for prompts whose reply is decoded as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "Return ONLY valid JSON, no additional text.";

/// Closing instruction for free-text answers.
pub const ACTIONABLE_INSTRUCTION: &str = "Be specific and actionable in your response.";

/// Substitutes `{key}` placeholders in a single pass.
///
/// Substituted values are never rescanned, so user text containing
/// `{placeholder}` lands in the prompt verbatim. Unknown `{...}` sequences
/// (e.g. JSON examples) are left untouched.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let matched = values
            .iter()
            .find(|(key, _)| tail.starts_with(key) && tail[key.len()..].starts_with('}'));

        match matched {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_replaces_known_keys() {
        let out = fill_template("Hi {name}, you are {age}.", &[("name", "Ada"), ("age", "36")]);
        assert_eq!(out, "Hi Ada, you are 36.");
    }

    #[test]
    fn test_fill_template_leaves_json_examples_alone() {
        let out = fill_template("{\n  \"summary\": \"{x}\"\n}", &[("name", "Ada")]);
        assert_eq!(out, "{\n  \"summary\": \"{x}\"\n}");
    }

    #[test]
    fn test_fill_template_does_not_rescan_values() {
        let out = fill_template("{a} / {b}", &[("a", "{b}"), ("b", "two")]);
        assert_eq!(out, "{b} / two");
    }

    #[test]
    fn test_fill_template_handles_repeated_keys() {
        assert_eq!(fill_template("{k}{k}", &[("k", "x")]), "xx");
    }
}
