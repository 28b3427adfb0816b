use std::sync::OnceLock;

use regex::Regex;

use crate::{
    breeder::{
        prompt::{ProblemDescription, TaskPrompt},
        unit::EvolutionUnit,
        PromptBreedingError,
    },
    llm::LanguageModel,
};

// The span strictly between the first two list markers of the hint list.
const HINT_SPAN_PATTERN: &str = r"(?s)1\.(.*?)2\.";

fn hint_span() -> &'static Regex {
    static HINT_SPAN: OnceLock<Regex> = OnceLock::new();
    HINT_SPAN.get_or_init(|| Regex::new(HINT_SPAN_PATTERN).unwrap())
}

/// Elicits a hint list for the problem description and takes the first hint
/// as the new task-prompt. A response without a well-formed "1. ... 2." span
/// degrades the task-prompt to the empty string rather than leaving it stale.
pub(super) async fn zero_order_prompt_gen<L: LanguageModel>(
    unit: &mut EvolutionUnit,
    problem_description: &ProblemDescription,
    llm: &L,
) -> Result<(), PromptBreedingError> {
    let response = llm
        .complete(&format!("{problem_description} A list of 100 hints: "))
        .await
        .map_err(PromptBreedingError::LlmError)?;

    unit.task_prompt = match hint_span().captures(&response) {
        Some(captures) => TaskPrompt::new(captures[1].trim()),
        None => TaskPrompt::new(""),
    };

    Ok(())
}

/// Applies the unit's own mutation-prompt to its task-prompt. The response is
/// trusted verbatim.
pub(super) async fn first_order_prompt_gen<L: LanguageModel>(
    unit: &mut EvolutionUnit,
    llm: &L,
) -> Result<(), PromptBreedingError> {
    let response = llm
        .complete(&format!("{} {}", unit.mutation_prompt, unit.task_prompt))
        .await
        .map_err(PromptBreedingError::LlmError)?;

    unit.task_prompt = TaskPrompt::new(response);

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        breeder::prompt::MutationPrompt,
        test_data::StubLlm,
    };

    fn obtain_unit(task_prompt: &str, mutation_prompt: &str) -> EvolutionUnit {
        EvolutionUnit::new(TaskPrompt::new(task_prompt), MutationPrompt::new(mutation_prompt))
    }

    #[tokio::test]
    async fn zero_order_takes_the_first_hint() {
        let llm = StubLlm::returning("Ignore 1. Break into steps 2. Check units 3. Done");
        let mut unit = obtain_unit("stale", "unused");

        zero_order_prompt_gen(
            &mut unit,
            &ProblemDescription::new("Solve math word problems."),
            &llm,
        )
        .await
        .unwrap();

        assert_eq!(unit.task_prompt, TaskPrompt::new("Break into steps"));
        assert_eq!(
            llm.prompts(),
            vec![String::from("Solve math word problems. A list of 100 hints: ")]
        );
    }

    #[tokio::test]
    async fn zero_order_degrades_to_empty_without_a_hint_list() {
        let llm = StubLlm::returning("No list here.");
        let mut unit = obtain_unit("stale", "unused");

        zero_order_prompt_gen(
            &mut unit,
            &ProblemDescription::new("Solve math word problems."),
            &llm,
        )
        .await
        .unwrap();

        assert!(unit.task_prompt.is_empty());
    }

    #[tokio::test]
    async fn zero_order_span_may_cross_lines() {
        let llm = StubLlm::returning("1. Draw\na diagram.\n2. Re-read the question.");
        let mut unit = obtain_unit("stale", "unused");

        zero_order_prompt_gen(
            &mut unit,
            &ProblemDescription::new("Solve math word problems."),
            &llm,
        )
        .await
        .unwrap();

        assert_eq!(unit.task_prompt, TaskPrompt::new("Draw\na diagram."));
    }

    #[tokio::test]
    async fn first_order_concatenates_mutation_prompt_and_task_prompt() {
        let llm = StubLlm::returning("Work the problem in stages.");
        let mut unit = obtain_unit("Check your work.", "Make this instruction more fun.");

        first_order_prompt_gen(&mut unit, &llm).await.unwrap();

        assert_eq!(
            llm.prompts(),
            vec![String::from("Make this instruction more fun. Check your work.")]
        );
        assert_eq!(unit.task_prompt, TaskPrompt::new("Work the problem in stages."));
    }
}
