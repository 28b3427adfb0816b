use rand::Rng;

use crate::{
    breeder::{
        prompt::{MutationPrompt, ProblemDescription, TaskPrompt},
        unit::EvolutionUnit,
        PromptBreedingError,
    },
    corpus::Corpus,
    llm::LanguageModel,
};

const HYPER_MUTATION_PROMPT: &str = "Please summarize and improve the following instruction: ";

/// Rewrites the mutation-prompt from the problem description and one
/// uniformly-sampled thinking style. The task-prompt is untouched.
pub(super) async fn zero_order_hypermutation<L: LanguageModel, R: Rng>(
    unit: &mut EvolutionUnit,
    problem_description: &ProblemDescription,
    corpus: &Corpus,
    llm: &L,
    rng: &mut R,
) -> Result<(), PromptBreedingError> {
    let thinking_style = corpus
        .sample_thinking_style(rng)
        .ok_or(PromptBreedingError::NoThinkingStyles)?;

    let response = llm
        .complete(&format!("{problem_description} {thinking_style}"))
        .await
        .map_err(PromptBreedingError::LlmError)?;

    unit.mutation_prompt = MutationPrompt::new(response);

    Ok(())
}

/// Summarize-and-improve the mutation-prompt, then immediately apply the new
/// mutation-prompt to the task-prompt. Both fields are committed only once
/// both calls have succeeded; the second call's output lands in the
/// task-prompt even when the first call returned nothing.
pub(super) async fn first_order_hypermutation<L: LanguageModel>(
    unit: &mut EvolutionUnit,
    llm: &L,
) -> Result<(), PromptBreedingError> {
    let mutation_prompt = MutationPrompt::new(
        llm.complete(&format!("{HYPER_MUTATION_PROMPT}{}", unit.mutation_prompt))
            .await
            .map_err(PromptBreedingError::LlmError)?,
    );

    let task_prompt = TaskPrompt::new(
        llm.complete(&format!("{} {}", mutation_prompt, unit.task_prompt))
            .await
            .map_err(PromptBreedingError::LlmError)?,
    );

    unit.mutation_prompt = mutation_prompt;
    unit.task_prompt = task_prompt;

    Ok(())
}
