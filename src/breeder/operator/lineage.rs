use crate::{
    breeder::{
        prompt::TaskPrompt,
        unit::EvolutionUnit,
        PromptBreedingError,
    },
    llm::LanguageModel,
};

const HEADING: &str = "GENOTYPES FOUND IN ASCENDING ORDER OF QUALITY";

fn format_genotype_list(elites: &[TaskPrompt]) -> String {
    elites
        .iter()
        .enumerate()
        .map(|(index, prompt)| format!("{}. {}", index + 1, prompt))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Presents the elites as a numbered list, worst to best, and asks the model
/// to continue the lineage with a novel task-prompt.
pub(super) async fn lineage_based_mutation<L: LanguageModel>(
    unit: &mut EvolutionUnit,
    elites: &[TaskPrompt],
    llm: &L,
) -> Result<(), PromptBreedingError> {
    if elites.is_empty() {
        return Err(PromptBreedingError::NoElites);
    }

    let response = llm
        .complete(&format!("{HEADING}\n{}", format_genotype_list(elites)))
        .await
        .map_err(PromptBreedingError::LlmError)?;

    unit.task_prompt = TaskPrompt::new(response);

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{breeder::prompt::MutationPrompt, test_data::StubLlm};

    fn obtain_unit() -> EvolutionUnit {
        EvolutionUnit::new(TaskPrompt::new("stale"), MutationPrompt::new("unused"))
    }

    #[tokio::test]
    async fn elites_are_numbered_in_input_order() {
        let llm = StubLlm::returning("c");
        let mut unit = obtain_unit();
        let elites = vec![TaskPrompt::new("a"), TaskPrompt::new("b")];

        lineage_based_mutation(&mut unit, &elites, &llm).await.unwrap();

        assert_eq!(
            llm.prompts(),
            vec![String::from(
                "GENOTYPES FOUND IN ASCENDING ORDER OF QUALITY\n1. a\n2. b"
            )]
        );
        assert_eq!(unit.task_prompt, TaskPrompt::new("c"));
    }

    #[tokio::test]
    async fn empty_elites_is_an_error_and_leaves_the_unit_untouched() {
        let llm = StubLlm::returning("unused");
        let mut unit = obtain_unit();

        let result = lineage_based_mutation(&mut unit, &[], &llm).await;

        assert!(matches!(result, Err(PromptBreedingError::NoElites)));
        assert_eq!(unit.task_prompt, TaskPrompt::new("stale"));
        assert!(llm.prompts().is_empty());
    }
}
