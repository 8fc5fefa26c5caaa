//! Step script definition
//!
//! This module defines the ordered sequence of conversation steps the
//! engine walks through. The script is plain data, read-only to the engine;
//! `default_script` builds the standard home insurance intake flow.

/// Kind of a conversation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// An ordinary prompt that waits for user input
    Question,
    /// The designated submission step; triggers the pipeline instead of
    /// waiting for input
    Terminal,
}

/// Prompt text for a step, either fixed or a function of the friendly name
#[derive(Debug, Clone)]
pub enum Prompt {
    Literal(String),
    Personalized(fn(&str) -> String),
}

impl Prompt {
    /// Resolve the prompt to display text
    pub fn resolve(&self, friendly_name: &str) -> String {
        match self {
            Prompt::Literal(text) => text.clone(),
            Prompt::Personalized(render) => render(friendly_name),
        }
    }
}

/// A single step in the conversation script
#[derive(Debug, Clone)]
pub struct StepDescriptor {
    /// Step identifier
    pub id: String,
    /// Prompt shown to the user when the step is reached
    pub prompt: Prompt,
    /// Step kind
    pub kind: StepKind,
    /// Profile field the next user answer binds to, if any
    pub field: Option<String>,
}

impl StepDescriptor {
    /// Create an ordinary question step bound to a profile field
    pub fn question(id: &str, prompt: Prompt, field: &str) -> Self {
        Self {
            id: id.to_string(),
            prompt,
            kind: StepKind::Question,
            field: Some(field.to_string()),
        }
    }

    /// Create the terminal submission step
    pub fn terminal(id: &str, prompt: Prompt) -> Self {
        Self {
            id: id.to_string(),
            prompt,
            kind: StepKind::Terminal,
            field: None,
        }
    }
}

/// Ordered, externally supplied sequence of conversation steps
#[derive(Debug, Clone, Default)]
pub struct StepScript {
    steps: Vec<StepDescriptor>,
}

impl StepScript {
    pub fn new(steps: Vec<StepDescriptor>) -> Self {
        Self { steps }
    }

    /// Look up a step by cursor position
    pub fn get(&self, index: usize) -> Option<&StepDescriptor> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StepDescriptor> {
        self.steps.iter()
    }
}

impl From<Vec<StepDescriptor>> for StepScript {
    fn from(steps: Vec<StepDescriptor>) -> Self {
        Self::new(steps)
    }
}

/// Build the standard home insurance intake flow
pub fn default_script() -> StepScript {
    StepScript::new(vec![
        StepDescriptor::question(
            "full_name",
            Prompt::Literal(
                "Hi there! I can put together a home insurance quote for you in a couple of \
                 minutes. First things first: what's your full name?"
                    .to_string(),
            ),
            "full_name",
        ),
        StepDescriptor::question(
            "email",
            Prompt::Personalized(|name| {
                format!("Nice to meet you, {}! What's the best email address for you?", name)
            }),
            "email",
        ),
        StepDescriptor::question(
            "phone",
            Prompt::Literal("And a phone number where we can reach you?".to_string()),
            "phone",
        ),
        StepDescriptor::question(
            "address",
            Prompt::Personalized(|name| {
                format!(
                    "Thanks, {}. Now let's talk about the property. What's the street address?",
                    name
                )
            }),
            "address",
        ),
        StepDescriptor::question(
            "state",
            Prompt::Literal("Which state is the property in?".to_string()),
            "state",
        ),
        StepDescriptor::question(
            "zip_code",
            Prompt::Literal("And the ZIP code?".to_string()),
            "zip_code",
        ),
        StepDescriptor::question(
            "dwelling_limit",
            Prompt::Literal(
                "How much dwelling coverage would you like, in dollars?".to_string(),
            ),
            "dwelling_limit",
        ),
        StepDescriptor::question(
            "year_built",
            Prompt::Literal("What year was the home built?".to_string()),
            "year_built",
        ),
        StepDescriptor::terminal(
            "generate_quote",
            Prompt::Personalized(|name| {
                format!("Perfect, {}! Give me a moment while I put your quote together...", name)
            }),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_script_shape() {
        let script = default_script();
        assert_eq!(script.len(), 9);

        // Every step except the last is a question with a field binding
        for step in script.iter().take(script.len() - 1) {
            assert_eq!(step.kind, StepKind::Question);
            assert!(step.field.is_some(), "step {} should bind a field", step.id);
        }

        let last = script.get(script.len() - 1).unwrap();
        assert_eq!(last.kind, StepKind::Terminal);
        assert_eq!(last.id, "generate_quote");
        assert!(last.field.is_none());
    }

    #[test]
    fn test_default_script_covers_submission_fields() {
        let script = default_script();
        let fields: Vec<&str> = script
            .iter()
            .filter_map(|s| s.field.as_deref())
            .collect();

        for required in [
            "full_name",
            "email",
            "phone",
            "address",
            "state",
            "zip_code",
            "dwelling_limit",
            "year_built",
        ] {
            assert!(fields.contains(&required), "missing field {}", required);
        }
    }

    #[test]
    fn test_prompt_resolution() {
        let literal = Prompt::Literal("Which state is the property in?".to_string());
        assert_eq!(literal.resolve("Jane"), "Which state is the property in?");

        let personalized = Prompt::Personalized(|name| format!("Hello, {}!", name));
        assert_eq!(personalized.resolve("Jane"), "Hello, Jane!");
    }

    #[test]
    fn test_get_out_of_bounds() {
        let script = default_script();
        assert!(script.get(script.len()).is_none());
    }
}
