//! Prompt templates.
//!
//! A template is a named block of text with `{{variable}}` placeholders,
//! optionally paired with a system prompt rendered the same way.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// A prompt template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptTemplate {
    /// Template name (used in logs).
    pub name: String,
    /// Template content with placeholders.
    pub content: String,
    /// Optional system prompt template.
    pub system_prompt: Option<String>,
}

impl PromptTemplate {
    /// Creates a new prompt template.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            system_prompt: None,
        }
    }

    /// Sets the system prompt.
    #[must_use]
    pub fn with_system_prompt(mut self, system: impl Into<String>) -> Self {
        self.system_prompt = Some(system.into());
        self
    }

    /// Renders the template with the given variables.
    ///
    /// Variables are substituted using `{{variable_name}}` syntax; string
    /// values are inserted verbatim, other JSON values via their compact
    /// representation. Placeholders with no matching variable are left
    /// in place.
    #[must_use]
    pub fn render(&self, variables: &HashMap<String, JsonValue>) -> String {
        substitute(&self.content, variables)
    }

    /// Renders the system prompt with the given variables.
    #[must_use]
    pub fn render_system_prompt(&self, variables: &HashMap<String, JsonValue>) -> Option<String> {
        self.system_prompt
            .as_ref()
            .map(|template| substitute(template, variables))
    }
}

fn substitute(template: &str, variables: &HashMap<String, JsonValue>) -> String {
    let mut result = template.to_string();

    for (name, value) in variables {
        let placeholder = format!("{{{{{name}}}}}");
        let replacement = match value {
            JsonValue::String(s) => s.clone(),
            other => other.to_string(),
        };
        result = result.replace(&placeholder, &replacement);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, JsonValue> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), serde_json::json!(v)))
            .collect()
    }

    #[test]
    fn template_rendering() {
        let template = PromptTemplate::new(
            "conversation",
            "Previous conversation context:\n{{chat_history}}\n\nHuman: {{input}}",
        );

        let rendered = template.render(&vars(&[
            ("chat_history", "Human: hi\nAI: hello"),
            ("input", "Review my workflow"),
        ]));

        assert!(rendered.contains("Human: hi\nAI: hello"));
        assert!(rendered.contains("Human: Review my workflow"));
    }

    #[test]
    fn unknown_placeholders_left_in_place() {
        let template = PromptTemplate::new("t", "Hello {{name}}");
        let rendered = template.render(&HashMap::new());
        assert_eq!(rendered, "Hello {{name}}");
    }

    #[test]
    fn non_string_values_render_compactly() {
        let template = PromptTemplate::new("t", "limit is {{limit}}");
        let mut variables = HashMap::new();
        variables.insert("limit".to_string(), serde_json::json!(42));
        assert_eq!(template.render(&variables), "limit is 42");
    }

    #[test]
    fn system_prompt_rendering() {
        let template = PromptTemplate::new("t", "{{input}}")
            .with_system_prompt("You are a {{specialty}} assistant.");

        let rendered = template.render_system_prompt(&vars(&[("specialty", "CI/CD")]));
        assert_eq!(rendered.as_deref(), Some("You are a CI/CD assistant."));

        let bare = PromptTemplate::new("t", "{{input}}");
        assert!(bare.render_system_prompt(&HashMap::new()).is_none());
    }
}
