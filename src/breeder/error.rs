use std::{
    error::Error as StdError,
    fmt::{Display, Formatter, Result},
};

use super::operator::MutationOperator;
use crate::llm::LlmServiceError;

#[derive(Debug)]
pub(crate) enum PromptBreedingError {
    LlmError(LlmServiceError),
    NoElites,
    NoThinkingStyles,
    NoMutationPrompts,
    NoWorkedExamples,
    ExtensionUnavailable(MutationOperator),
}

impl StdError for PromptBreedingError {}

impl Display for PromptBreedingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            PromptBreedingError::LlmError(err) => write!(f, "PromptBreeder: {}", err),
            PromptBreedingError::NoElites => {
                write!(f, "PromptBreeder: Lineage mutation requires a non-empty elites list")
            }
            PromptBreedingError::NoThinkingStyles => {
                write!(f, "PromptBreeder: Corpus contains no thinking styles")
            }
            PromptBreedingError::NoMutationPrompts => {
                write!(f, "PromptBreeder: Corpus contains no mutation prompts")
            }
            PromptBreedingError::NoWorkedExamples => {
                write!(f, "PromptBreeder: Corpus contains no worked examples")
            }
            PromptBreedingError::ExtensionUnavailable(operator) => {
                write!(f, "PromptBreeder: No strategy registered for {}", operator)
            }
        }
    }
}
