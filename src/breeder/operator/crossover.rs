use rand::RngCore;

use crate::{
    breeder::{unit::EvolutionUnit, PromptBreedingError},
    corpus::WorkedExample,
};

/// Extension point: replace the loser's task-prompt with a fragment drawn
/// from the higher-fitness sibling's task-prompt.
pub(crate) trait CrossoverStrategy {
    fn crossover(
        &self,
        unit: &mut EvolutionUnit,
        sibling: &EvolutionUnit,
        rng: &mut dyn RngCore,
    ) -> Result<(), PromptBreedingError>;
}

/// Extension point: reorder or resample the few-shot context fused into the
/// task-prompt.
pub(crate) trait ContextShuffleStrategy {
    fn shuffle(
        &self,
        unit: &mut EvolutionUnit,
        exemplars: &[WorkedExample],
        rng: &mut dyn RngCore,
    ) -> Result<(), PromptBreedingError>;
}

/// Registered strategies for the contract-only operators. Their catalog
/// variants become drawable only once a strategy is present.
#[derive(Default)]
pub(crate) struct OperatorExtensions {
    pub(crate) crossover: Option<Box<dyn CrossoverStrategy>>,
    pub(crate) context_shuffling: Option<Box<dyn ContextShuffleStrategy>>,
}
