// Shared prompt fragments. Each engine that calls the model keeps its own
// prompts.rs alongside it; only cross-cutting pieces live here.

/// Appended to any system instruction whose reply is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "Always respond with STRICT JSON. \
    Return a single JSON object and nothing else. \
    No markdown, no chatter, no backticks.";

/// Joins an engine persona with the JSON-only rule.
pub fn json_system(persona: &str) -> String {
    format!("{persona} {JSON_ONLY_INSTRUCTION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_system_appends_rule() {
        let system = json_system("You are a fraud investigator.");
        assert!(system.starts_with("You are a fraud investigator."));
        assert!(system.ends_with(JSON_ONLY_INSTRUCTION));
    }
}
