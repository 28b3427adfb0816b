use std::{
    error::Error as StdError,
    fmt::{Display, Formatter},
    fs,
    path::Path,
};

use rand::{seq::SliceRandom, Rng};
use serde::Deserialize;

use crate::breeder::prompt::{MutationPrompt, ThinkingStyle};

/// One question with its correct worked solution, used by the Lamarckian
/// operator to reverse-engineer an instruction.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub(crate) struct WorkedExample {
    pub(crate) question: String,
    pub(crate) answer: String,
}

/// The read-only text corpora every mutation operator draws from. Loaded once
/// at process start and passed to the engine at construction; never reloaded
/// mid-run.
pub(crate) struct Corpus {
    pub(crate) thinking_styles: Vec<ThinkingStyle>,
    pub(crate) mutation_prompts: Vec<MutationPrompt>,
    pub(crate) worked_examples: Vec<WorkedExample>,
}

impl Corpus {
    pub(crate) fn new(
        thinking_styles: Vec<ThinkingStyle>,
        mutation_prompts: Vec<MutationPrompt>,
        worked_examples: Vec<WorkedExample>,
    ) -> Self {
        Self {
            thinking_styles,
            mutation_prompts,
            worked_examples,
        }
    }

    /// Thinking styles and mutation prompts are newline-delimited text files;
    /// worked examples are JSON lines with `question` and `answer` fields.
    pub(crate) fn load(
        thinking_styles_db: &Path,
        mutation_prompts_db: &Path,
        worked_examples_db: &Path,
    ) -> Result<Self, CorpusError> {
        let thinking_styles = fs::read_to_string(thinking_styles_db).map_err(CorpusError::Io)?;
        let mutation_prompts = fs::read_to_string(mutation_prompts_db).map_err(CorpusError::Io)?;
        let worked_examples = fs::read_to_string(worked_examples_db).map_err(CorpusError::Io)?;
        Self::parse(&thinking_styles, &mutation_prompts, &worked_examples)
    }

    pub(crate) fn parse(
        thinking_styles: &str,
        mutation_prompts: &str,
        worked_examples: &str,
    ) -> Result<Self, CorpusError> {
        let thinking_styles = non_empty_lines(thinking_styles)
            .map(ThinkingStyle::new)
            .collect::<Vec<_>>();
        let mutation_prompts = non_empty_lines(mutation_prompts)
            .map(MutationPrompt::new)
            .collect::<Vec<_>>();
        let worked_examples = non_empty_lines(worked_examples)
            .map(|line| serde_json::from_str(line).map_err(CorpusError::MalformedExample))
            .collect::<Result<Vec<WorkedExample>, _>>()?;

        Ok(Self::new(thinking_styles, mutation_prompts, worked_examples))
    }

    pub(crate) fn sample_thinking_style<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Option<&ThinkingStyle> {
        self.thinking_styles.choose(rng)
    }

    pub(crate) fn sample_mutation_prompt<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Option<&MutationPrompt> {
        self.mutation_prompts.choose(rng)
    }

    pub(crate) fn sample_worked_example<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Option<&WorkedExample> {
        self.worked_examples.choose(rng)
    }
}

fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

#[derive(Debug)]
pub(crate) enum CorpusError {
    Io(std::io::Error),
    MalformedExample(serde_json::Error),
}

impl StdError for CorpusError {}

impl Display for CorpusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CorpusError::Io(err) => write!(f, "Corpus: {}", err),
            CorpusError::MalformedExample(err) => write!(f, "Corpus: {}", err),
        }
    }
}
