use std::fmt::Display;

use super::prompt::{MutationPrompt, ProblemDescription, TaskPrompt};

/// One candidate in the population: a task-prompt, the mutation-prompt that
/// rewrites it, and the lineage of past elite task-prompts.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct EvolutionUnit {
    pub(crate) task_prompt: TaskPrompt,
    pub(crate) mutation_prompt: MutationPrompt,
    pub(crate) lineage: Vec<TaskPrompt>,
    pub(crate) fitness: Option<f32>,
}

impl EvolutionUnit {
    pub(crate) fn new(task_prompt: TaskPrompt, mutation_prompt: MutationPrompt) -> Self {
        Self {
            task_prompt,
            mutation_prompt,
            lineage: vec![],
            fitness: None,
        }
    }

    // Lineage is append-only.
    pub(crate) fn record_elite(&mut self, prompt: TaskPrompt) {
        self.lineage.push(prompt);
    }
}

impl Display for EvolutionUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.task_prompt)
    }
}

pub(crate) struct Population {
    problem_description: ProblemDescription,
    pub(crate) units: Vec<EvolutionUnit>,
    pub(crate) elites: Vec<TaskPrompt>,
}

impl Population {
    pub(crate) fn new(problem_description: ProblemDescription, units: Vec<EvolutionUnit>) -> Self {
        Self {
            problem_description,
            units,
            elites: vec![],
        }
    }

    // Immutable for the lifetime of the run.
    pub(crate) fn problem_description(&self) -> &ProblemDescription {
        &self.problem_description
    }

    /// Appends the unit's current task-prompt to the elites (callers promote
    /// in ascending order of quality) and to the unit's own lineage.
    pub(crate) fn promote_elite(&mut self, index: usize) {
        let prompt = self.units[index].task_prompt.clone();
        self.units[index].record_elite(prompt.clone());
        self.elites.push(prompt);
    }
}
