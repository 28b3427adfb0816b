mod engine;
mod error;
pub(crate) mod operator;
pub(crate) mod prompt;
pub(crate) mod unit;

pub(crate) use engine::{Engine, FitnessLoserSelection};
pub(crate) use error::PromptBreedingError;
