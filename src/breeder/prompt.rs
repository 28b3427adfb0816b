use std::marker::PhantomData;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Prompt(pub(crate) String);

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Prompt {
    pub(crate) fn new<S: AsRef<str>>(prompt: S) -> Self {
        Self(String::from(prompt.as_ref()))
    }
}

// Marker types

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TaskMarker;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct MutationMarker;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ProblemDescriptionMarker;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ThinkingStyleMarker;

// Generic wrapper
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PromptWrapper<T> {
    pub(crate) prompt: Prompt,
    _marker: PhantomData<T>,
}

impl<T> std::fmt::Display for PromptWrapper<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prompt)
    }
}

impl<T> PromptWrapper<T> {
    pub(crate) fn new<S: AsRef<str>>(prompt: S) -> Self {
        Self {
            prompt: Prompt::new(prompt),
            _marker: PhantomData,
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.prompt.0
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.prompt.0.is_empty()
    }
}

// Type aliases for readability
pub(crate) type TaskPrompt = PromptWrapper<TaskMarker>;
pub(crate) type MutationPrompt = PromptWrapper<MutationMarker>;
pub(crate) type ProblemDescription = PromptWrapper<ProblemDescriptionMarker>;
pub(crate) type ThinkingStyle = PromptWrapper<ThinkingStyleMarker>;
