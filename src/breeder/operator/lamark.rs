use rand::Rng;

use crate::{
    breeder::{prompt::TaskPrompt, unit::EvolutionUnit, PromptBreedingError},
    corpus::Corpus,
    llm::LanguageModel,
};

/// Instruction induction from a worked example: show the model one correct
/// working-out and ask it to recover the instruction that produced it. The
/// induced instruction becomes the unit's task-prompt.
pub(super) async fn working_out_task_prompt<L: LanguageModel, R: Rng>(
    unit: &mut EvolutionUnit,
    corpus: &Corpus,
    llm: &L,
    rng: &mut R,
) -> Result<(), PromptBreedingError> {
    let example = corpus
        .sample_worked_example(rng)
        .ok_or(PromptBreedingError::NoWorkedExamples)?;

    let response = llm
        .complete(&format!(
            "I gave a friend an instruction and some advice. Here are the correct examples of his workings out {}{} The instruction was: ",
            example.question, example.answer
        ))
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
        corpus::WorkedExample,
        test_data::StubLlm,
    };
    use rand::{rngs::StdRng, SeedableRng};

    #[tokio::test]
    async fn induced_instruction_is_assigned_to_the_unit() {
        let llm = StubLlm::returning("Show every arithmetic step.");
        let mut unit =
            EvolutionUnit::new(TaskPrompt::new("stale"), MutationPrompt::new("unused"));
        let corpus = Corpus::new(
            vec![],
            vec![],
            vec![WorkedExample {
                question: String::from("Q: 2+2? "),
                answer: String::from("A: 4."),
            }],
        );
        let mut rng = StdRng::seed_from_u64(0);

        working_out_task_prompt(&mut unit, &corpus, &llm, &mut rng)
            .await
            .unwrap();

        assert_eq!(
            llm.prompts(),
            vec![String::from(
                "I gave a friend an instruction and some advice. Here are the correct examples of his workings out Q: 2+2? A: 4. The instruction was: "
            )]
        );
        assert_eq!(unit.task_prompt, TaskPrompt::new("Show every arithmetic step."));
    }

    #[tokio::test]
    async fn no_worked_examples_fails_loudly() {
        let llm = StubLlm::returning("unused");
        let mut unit =
            EvolutionUnit::new(TaskPrompt::new("stale"), MutationPrompt::new("unused"));
        let mut rng = StdRng::seed_from_u64(0);

        let result =
            working_out_task_prompt(&mut unit, &Corpus::new(vec![], vec![], vec![]), &llm, &mut rng)
                .await;

        assert!(matches!(result, Err(PromptBreedingError::NoWorkedExamples)));
        assert_eq!(unit.task_prompt, TaskPrompt::new("stale"));
    }
}
