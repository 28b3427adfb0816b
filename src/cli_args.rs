use std::path::PathBuf;

use clap::{Parser, Subcommand};
use url::Url;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    Breed(BreederArgs),
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct BreederArgs {
    #[arg(long)]
    pub(crate) thinking_styles_db: PathBuf,
    #[arg(long)]
    pub(crate) mutation_prompts_db: PathBuf,
    #[arg(long)]
    pub(crate) worked_examples_db: PathBuf,
    #[arg(long)]
    pub(crate) api_key: Option<String>,
    #[arg(long)]
    pub(crate) llm_url: Url,
    #[arg(long)]
    pub(crate) language_model_name: String,
    #[arg(long)]
    pub(crate) problem_description: String,
    #[arg(long, default_value_t = 50)]
    pub(crate) population_size: usize,
    #[arg(long)]
    pub(crate) generation_limit: usize,
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}
