use std::{fmt::Display, path::PathBuf};

use colored::Colorize;
use url::Url;

use crate::cli_args::BreederArgs;

#[derive(Debug)]
pub(crate) struct Config {
    pub(crate) thinking_styles_db: PathBuf,
    pub(crate) mutation_prompts_db: PathBuf,
    pub(crate) worked_examples_db: PathBuf,
    pub(crate) api_key: Option<String>,
    pub(crate) llm_url: Url,
    pub(crate) language_model_name: String,
    pub(crate) problem_description: String,
    pub(crate) population_size: usize,
    pub(crate) generation_limit: usize,
    pub(crate) seed: Option<u64>,
}

impl From<BreederArgs> for Config {
    fn from(value: BreederArgs) -> Self {
        Config {
            thinking_styles_db: value.thinking_styles_db,
            mutation_prompts_db: value.mutation_prompts_db,
            worked_examples_db: value.worked_examples_db,
            api_key: value.api_key,
            llm_url: value.llm_url,
            language_model_name: value.language_model_name,
            problem_description: value.problem_description,
            population_size: value.population_size,
            generation_limit: value.generation_limit,
            seed: value.seed,
        }
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Config {
            llm_url,
            language_model_name,
            problem_description,
            population_size,
            generation_limit,
            ..
        } = self;

        let llm_url = llm_url.as_str().yellow();

        write!(
            f,
            "Breeder running.\n\tBreeding prompts for \"{problem_description}\".\n\tPopulation of {population_size} over {generation_limit} generations.\n\tUsing {language_model_name} at {llm_url}.",
        )
    }
}
