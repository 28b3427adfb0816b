mod crossover;
mod direct;
mod eda;
mod hyper;
mod lamark;
mod lineage;

pub(crate) use crossover::{ContextShuffleStrategy, CrossoverStrategy, OperatorExtensions};
pub(crate) use eda::{Embedder, EstimationOfDistributionMutation};

use std::fmt::{Display, Formatter};

use rand::Rng;

use crate::{
    breeder::{
        prompt::{ProblemDescription, TaskPrompt},
        unit::EvolutionUnit,
        PromptBreedingError,
    },
    corpus::Corpus,
    llm::LanguageModel,
};

/// Everything any operator in the catalog may need, passed as one typed
/// bundle. Each operator reads only the fields it declares; extra fields are
/// ignored.
pub(crate) struct MutationContext<'ctx, L> {
    pub(crate) problem_description: &'ctx ProblemDescription,
    pub(crate) elites: &'ctx [TaskPrompt],
    pub(crate) sibling: Option<&'ctx EvolutionUnit>,
    pub(crate) corpus: &'ctx Corpus,
    pub(crate) llm: &'ctx L,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MutationOperator {
    ZeroOrderPromptGeneration,
    FirstOrderPromptGeneration,
    LineageBasedMutation,
    ZeroOrderHyperMutation,
    FirstOrderHyperMutation,
    WorkingOutToTaskPrompt,
    PromptCrossover,
    ContextShuffling,
}

impl MutationOperator {
    const BUILT_IN: [MutationOperator; 6] = [
        MutationOperator::ZeroOrderPromptGeneration,
        MutationOperator::FirstOrderPromptGeneration,
        MutationOperator::LineageBasedMutation,
        MutationOperator::ZeroOrderHyperMutation,
        MutationOperator::FirstOrderHyperMutation,
        MutationOperator::WorkingOutToTaskPrompt,
    ];

    /// The operators the dispatcher may draw from: the six built-ins plus any
    /// registered extension strategies. Estimation-of-distribution is never
    /// drawable; it has its own entry point.
    pub(crate) fn drawable(extensions: &OperatorExtensions) -> Vec<MutationOperator> {
        let mut catalog = Self::BUILT_IN.to_vec();
        if extensions.crossover.is_some() {
            catalog.push(MutationOperator::PromptCrossover);
        }
        if extensions.context_shuffling.is_some() {
            catalog.push(MutationOperator::ContextShuffling);
        }
        catalog
    }

    /// Mutates the unit in place. On success the unit carries the operator's
    /// output; on error no field has been written.
    pub(crate) async fn apply<L: LanguageModel, R: Rng>(
        self,
        unit: &mut EvolutionUnit,
        context: &MutationContext<'_, L>,
        extensions: &OperatorExtensions,
        rng: &mut R,
    ) -> Result<(), PromptBreedingError> {
        match self {
            MutationOperator::ZeroOrderPromptGeneration => {
                direct::zero_order_prompt_gen(unit, context.problem_description, context.llm).await
            }
            MutationOperator::FirstOrderPromptGeneration => {
                direct::first_order_prompt_gen(unit, context.llm).await
            }
            MutationOperator::LineageBasedMutation => {
                lineage::lineage_based_mutation(unit, context.elites, context.llm).await
            }
            MutationOperator::ZeroOrderHyperMutation => {
                hyper::zero_order_hypermutation(
                    unit,
                    context.problem_description,
                    context.corpus,
                    context.llm,
                    rng,
                )
                .await
            }
            MutationOperator::FirstOrderHyperMutation => {
                hyper::first_order_hypermutation(unit, context.llm).await
            }
            MutationOperator::WorkingOutToTaskPrompt => {
                lamark::working_out_task_prompt(unit, context.corpus, context.llm, rng).await
            }
            MutationOperator::PromptCrossover => match (&extensions.crossover, context.sibling) {
                (Some(strategy), Some(sibling)) => strategy.crossover(unit, sibling, rng),
                _ => Err(PromptBreedingError::ExtensionUnavailable(self)),
            },
            MutationOperator::ContextShuffling => match &extensions.context_shuffling {
                Some(strategy) => strategy.shuffle(unit, &context.corpus.worked_examples, rng),
                None => Err(PromptBreedingError::ExtensionUnavailable(self)),
            },
        }
    }
}

impl Display for MutationOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MutationOperator::ZeroOrderPromptGeneration => "zero-order prompt generation",
            MutationOperator::FirstOrderPromptGeneration => "first-order prompt generation",
            MutationOperator::LineageBasedMutation => "lineage-based mutation",
            MutationOperator::ZeroOrderHyperMutation => "zero-order hypermutation",
            MutationOperator::FirstOrderHyperMutation => "first-order hypermutation",
            MutationOperator::WorkingOutToTaskPrompt => "working-out task-prompt mutation",
            MutationOperator::PromptCrossover => "prompt crossover",
            MutationOperator::ContextShuffling => "context shuffling",
        };
        write!(f, "{name}")
    }
}
