use rand::{seq::SliceRandom, Rng};
use simsimd::SpatialSimilarity;

use crate::{
    breeder::{prompt::TaskPrompt, unit::Population, PromptBreedingError},
    llm::{LanguageModel, LlmServiceError},
};

const SIMILARITY_CEILING: f64 = 0.95f64;

/// Embedding collaborator for the estimation-of-distribution operator; the
/// rest of the catalog never needs vectors.
#[allow(async_fn_in_trait)]
pub(crate) trait Embedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, LlmServiceError>;
}

/// Estimation-of-distribution mutation. Deliberately outside the default
/// catalog: callers opt in by invoking it directly with an embedder.
///
/// Presents a deduplicated, randomly ordered numbered list of the current
/// task-prompts and asks the model to continue the series, resampling until
/// the continuation is dissimilar from every listed prompt. The accepted
/// continuation replaces the loser's task-prompt.
pub(crate) struct EstimationOfDistributionMutation {}

impl EstimationOfDistributionMutation {
    pub(crate) async fn mutate<L: LanguageModel, E: Embedder, R: Rng>(
        llm: &L,
        embedder: &E,
        population: &mut Population,
        loser: usize,
        rng: &mut R,
    ) -> Result<(), PromptBreedingError> {
        let embedded = Self::embed_population(embedder, population).await?;
        let mut subsample = Self::filter_near_duplicates(&embedded);
        subsample.shuffle(rng);

        let prompt_list = subsample
            .iter()
            .enumerate()
            .map(|(index, (prompt, _))| format!("{}. {}", index + 1, prompt))
            .collect::<Vec<_>>()
            .join("\n");
        let continuation_index = subsample.len() + 1;

        let accepted = loop {
            let content = llm
                .complete(&format!(
                    "Continue the series with more items:\n{prompt_list}\n{continuation_index}."
                ))
                .await
                .map_err(PromptBreedingError::LlmError)?;
            let content = content.trim().trim_start_matches("1. ").trim().to_string();

            let embedding = embedder
                .embed(&content)
                .await
                .map_err(PromptBreedingError::LlmError)?;
            if subsample
                .iter()
                .all(|(_, extant)| f32::cosine(&embedding, extant).unwrap() < SIMILARITY_CEILING)
            {
                break content;
            }
        };

        population.units[loser].task_prompt = TaskPrompt::new(accepted);

        Ok(())
    }

    async fn embed_population<E: Embedder>(
        embedder: &E,
        population: &Population,
    ) -> Result<Vec<(TaskPrompt, Vec<f32>)>, PromptBreedingError> {
        let mut embedded = Vec::with_capacity(population.units.len());
        for unit in &population.units {
            let embedding = embedder
                .embed(unit.task_prompt.as_str())
                .await
                .map_err(PromptBreedingError::LlmError)?;
            embedded.push((unit.task_prompt.clone(), embedding));
        }
        Ok(embedded)
    }

    fn filter_near_duplicates(
        embedded: &[(TaskPrompt, Vec<f32>)],
    ) -> Vec<(&TaskPrompt, &Vec<f32>)> {
        let mut subsample: Vec<(&TaskPrompt, &Vec<f32>)> = vec![];
        for (prompt, embedding) in embedded {
            if subsample
                .iter()
                .all(|(_, extant)| f32::cosine(embedding, extant).unwrap() < SIMILARITY_CEILING)
            {
                subsample.push((prompt, embedding));
            }
        }
        subsample
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        breeder::{
            prompt::{MutationPrompt, ProblemDescription},
            unit::EvolutionUnit,
        },
        test_data::StubLlm,
    };
    use rand::{rngs::StdRng, SeedableRng};
    use std::{cell::RefCell, collections::HashMap};

    struct StubEmbedder {
        vectors: RefCell<HashMap<String, Vec<f32>>>,
    }

    impl StubEmbedder {
        fn new(entries: &[(&str, [f32; 2])]) -> Self {
            Self {
                vectors: RefCell::new(
                    entries
                        .iter()
                        .map(|(text, vector)| (String::from(*text), vector.to_vec()))
                        .collect(),
                ),
            }
        }
    }

    impl Embedder for StubEmbedder {
        async fn embed(&self, text: &str) -> Result<Vec<f32>, LlmServiceError> {
            Ok(self.vectors.borrow().get(text).cloned().unwrap_or(vec![1.0, 0.0]))
        }
    }

    fn obtain_population(prompts: &[&str]) -> Population {
        Population::new(
            ProblemDescription::new("Solve math word problems."),
            prompts
                .iter()
                .map(|prompt| {
                    EvolutionUnit::new(TaskPrompt::new(*prompt), MutationPrompt::new("unused"))
                })
                .collect(),
        )
    }

    #[tokio::test]
    async fn near_duplicates_are_filtered_and_the_continuation_is_committed() {
        // "b" duplicates "a"; the continuation is orthogonal to everything.
        let embedder = StubEmbedder::new(&[
            ("a", [1.0, 0.0]),
            ("b", [1.0, 0.0]),
            ("c", [0.0, 1.0]),
            ("Estimate before computing.", [0.7, -0.7]),
        ]);
        let llm = StubLlm::returning("Estimate before computing.");
        let mut population = obtain_population(&["a", "b", "c"]);
        let mut rng = StdRng::seed_from_u64(3);

        EstimationOfDistributionMutation::mutate(&llm, &embedder, &mut population, 1, &mut rng)
            .await
            .unwrap();

        assert_eq!(
            population.units[1].task_prompt,
            TaskPrompt::new("Estimate before computing.")
        );
        // Only the two dissimilar prompts survive into the series.
        let prompt = llm.prompts().remove(0);
        assert!(prompt.starts_with("Continue the series with more items:\n"));
        assert!(prompt.contains("1. "));
        assert!(prompt.contains("2. "));
        assert!(prompt.contains("\n3."));
        assert!(!prompt.contains("4."));
    }

    #[tokio::test]
    async fn similar_continuations_are_resampled() {
        let embedder = StubEmbedder::new(&[
            ("a", [1.0, 0.0]),
            ("echo of a", [1.0, 0.0]),
            ("Novel prompt.", [0.0, 1.0]),
        ]);
        let llm = StubLlm::script(["echo of a", "Novel prompt."]);
        let mut population = obtain_population(&["a"]);
        let mut rng = StdRng::seed_from_u64(3);

        EstimationOfDistributionMutation::mutate(&llm, &embedder, &mut population, 0, &mut rng)
            .await
            .unwrap();

        assert_eq!(llm.prompts().len(), 2);
        assert_eq!(population.units[0].task_prompt, TaskPrompt::new("Novel prompt."));
    }
}
