use rand::{seq::SliceRandom, Rng};

use crate::{
    breeder::{
        operator::{MutationContext, MutationOperator, OperatorExtensions},
        prompt::{ProblemDescription, TaskPrompt},
        unit::{EvolutionUnit, Population},
        PromptBreedingError,
    },
    corpus::Corpus,
    llm::LanguageModel,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PairMember {
    Left,
    Right,
}

/// Decides which member of a pair is replaced. Scoring itself happens in the
/// external evaluation harness; the engine only needs the verdict.
pub(crate) trait LoserSelection {
    fn loser(&self, left: &EvolutionUnit, right: &EvolutionUnit) -> PairMember;
}

/// Default verdict: the lower fitness loses, unscored units lose to scored
/// ones, ties go to the right slot.
pub(crate) struct FitnessLoserSelection;

impl LoserSelection for FitnessLoserSelection {
    fn loser(&self, left: &EvolutionUnit, right: &EvolutionUnit) -> PairMember {
        let left_fitness = left.fitness.unwrap_or(f32::NEG_INFINITY);
        let right_fitness = right.fitness.unwrap_or(f32::NEG_INFINITY);
        if left_fitness < right_fitness {
            PairMember::Left
        } else {
            PairMember::Right
        }
    }
}

pub(crate) struct Engine<L> {
    llm: L,
    corpus: Corpus,
    extensions: OperatorExtensions,
}

impl<L: LanguageModel> Engine<L> {
    pub(crate) fn new(llm: L, corpus: Corpus) -> Self {
        Self::with_extensions(llm, corpus, OperatorExtensions::default())
    }

    pub(crate) fn with_extensions(
        llm: L,
        corpus: Corpus,
        extensions: OperatorExtensions,
    ) -> Self {
        Self {
            llm,
            corpus,
            extensions,
        }
    }

    /// Seeds a population by crossing sampled mutation-prompt templates with
    /// sampled thinking styles over the problem description. Each unit keeps
    /// the template it was seeded from as its mutation-prompt.
    pub(crate) async fn initialize_population<R: Rng>(
        &self,
        population_size: usize,
        problem_description: &str,
        rng: &mut R,
    ) -> Result<Population, PromptBreedingError> {
        let problem_description = ProblemDescription::new(problem_description);
        let mut units = Vec::with_capacity(population_size);
        for _ in 0..population_size {
            let mutation_prompt = self
                .corpus
                .sample_mutation_prompt(rng)
                .ok_or(PromptBreedingError::NoMutationPrompts)?
                .clone();
            let thinking_style = self
                .corpus
                .sample_thinking_style(rng)
                .ok_or(PromptBreedingError::NoThinkingStyles)?;

            let seed_prompt = format!(
                "MUTATION: {mutation_prompt}\nINSTRUCTION: {thinking_style} {problem_description}\nINSTRUCTION MUTANT: "
            );
            let content = self
                .llm
                .complete(&seed_prompt)
                .await
                .map_err(PromptBreedingError::LlmError)?;

            units.push(EvolutionUnit::new(
                TaskPrompt::new(content.trim()),
                mutation_prompt,
            ));
        }

        Ok(Population::new(problem_description, units))
    }

    /// Advances every pairable unit by exactly one mutation step: consecutive
    /// pairs, one uniformly drawn operator per pair, applied to the pair's
    /// loser. A trailing unpaired unit is left untouched. Returns the number
    /// of operator applications.
    pub(crate) async fn step<R: Rng>(
        &self,
        population: &mut Population,
        selector: &impl LoserSelection,
        rng: &mut R,
    ) -> Result<usize, PromptBreedingError> {
        let catalog = MutationOperator::drawable(&self.extensions);
        // Read-only snapshots, taken before any unit is touched.
        let problem_description = population.problem_description().clone();
        let elites = population.elites.clone();

        let mut applied = 0usize;
        for pair in population.units.chunks_exact_mut(2) {
            let operator = *catalog
                .choose(rng)
                .expect("the drawable catalog contains the built-in operators");

            let (left, right) = pair.split_at_mut(1);
            let (loser, winner) = match selector.loser(&left[0], &right[0]) {
                PairMember::Left => (&mut left[0], &right[0]),
                PairMember::Right => (&mut right[0], &left[0]),
            };

            let context = MutationContext {
                problem_description: &problem_description,
                elites: &elites,
                sibling: Some(winner),
                corpus: &self.corpus,
                llm: &self.llm,
            };

            operator.apply(loser, &context, &self.extensions, rng).await?;
            log::debug!("applied {operator}");
            applied += 1;
        }

        Ok(applied)
    }

    /// Runs `generations` dispatch steps. Fitness evaluation and elite
    /// promotion happen outside, between calls.
    pub(crate) async fn breed<R: Rng>(
        &self,
        population: &mut Population,
        generations: usize,
        selector: &impl LoserSelection,
        rng: &mut R,
    ) -> Result<(), PromptBreedingError> {
        for generation in 0..generations {
            let applied = self.step(population, selector, rng).await?;
            log::info!("generation {generation}: {applied} mutations applied");
        }
        Ok(())
    }
}
