mod breeder;
mod cli_args;
mod config;
mod corpus;
mod llm;

#[cfg(test)]
mod test_data;

use clap::Parser;
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    breeder::{Engine as PromptBreedingEngine, FitnessLoserSelection},
    cli_args::{Cli, Commands},
    corpus::Corpus,
    llm::openai::OpenAiCompletionService,
};

const MAX_NEW_TOKENS: u16 = 128;

fn main() -> anyhow::Result<()> {
    match Cli::parse().command {
        Commands::Breed(breeder_args) => {
            let logger =
                env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                    .build();

            let multi_progress = MultiProgress::new();

            LogWrapper::new(multi_progress.clone(), logger)
                .try_init()
                .unwrap();

            let config = config::Config::from(breeder_args);
            log::info!("\n{config}");

            let corpus = Corpus::load(
                &config.thinking_styles_db,
                &config.mutation_prompts_db,
                &config.worked_examples_db,
            )?;

            let llm = OpenAiCompletionService::new(
                config.llm_url,
                config.api_key,
                config.language_model_name,
                MAX_NEW_TOKENS,
            );

            let engine = PromptBreedingEngine::new(llm, corpus);

            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;

            let population = runtime.block_on(async {
                let mut population = engine
                    .initialize_population(
                        config.population_size,
                        &config.problem_description,
                        &mut rng,
                    )
                    .await?;

                engine
                    .breed(
                        &mut population,
                        config.generation_limit,
                        &FitnessLoserSelection,
                        &mut rng,
                    )
                    .await?;

                Ok::<_, breeder::PromptBreedingError>(population)
            })?;

            for unit in &population.units {
                println!("{unit}");
            }

            Ok(())
        }
    }
}
