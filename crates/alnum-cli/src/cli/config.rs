use alnum::{DEFAULT_WORKERS, GeneratorConfig, SamplingPolicy, Vocabulary};
use anyhow::Context;
use clap::{Parser, ValueEnum};

/// Runtime configuration for the `alnum` binary.
///
/// Every value can come from a flag, an environment variable, or a `.env`
/// file in the working directory, in that order of precedence.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "alnum",
    version,
    about = "Generate alphanumeric codes concurrently and print them as JSON"
)]
pub struct CliArgs {
    /// Number of concurrent workers, and therefore of records printed.
    ///
    /// Environment variable: `ALNUM_WORKERS`
    #[arg(short = 'n', long, env = "ALNUM_WORKERS", default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Master seed. Runs with the same seed and settings print the same
    /// document. A random seed is chosen (and logged at debug level) when
    /// omitted.
    ///
    /// Environment variable: `ALNUM_SEED`
    #[arg(short, long, env = "ALNUM_SEED")]
    pub seed: Option<u64>,

    /// Which part of each vocabulary may be drawn from: `full`, or
    /// `legacy-prefix` to restrict draws to the first ten tokens.
    ///
    /// Environment variable: `ALNUM_SAMPLING`
    #[arg(long, env = "ALNUM_SAMPLING", default_value_t = SamplingPolicy::Full)]
    pub sampling: SamplingPolicy,

    /// Where workers run.
    ///
    /// Environment variable: `ALNUM_RUNTIME`
    #[arg(long, env = "ALNUM_RUNTIME", value_enum, default_value_t = Runtime::Threads)]
    pub runtime: Runtime,

    /// Comma-separated letter tokens replacing `a` through `z`.
    ///
    /// Environment variable: `ALNUM_LETTERS`
    #[arg(long, env = "ALNUM_LETTERS", value_delimiter = ',')]
    pub letters: Option<Vec<String>>,

    /// Comma-separated digit tokens replacing `1` through `10`.
    ///
    /// Environment variable: `ALNUM_DIGITS`
    #[arg(long, env = "ALNUM_DIGITS", value_delimiter = ',')]
    pub digits: Option<Vec<String>>,

    /// Output format.
    ///
    /// Environment variable: `ALNUM_FORMAT`
    #[arg(short, long, env = "ALNUM_FORMAT", value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runtime {
    /// One scoped OS thread per worker.
    Threads,
    /// One tokio task per worker.
    Tokio,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Compact JSON array of records.
    Json,
    /// Indented JSON array of records.
    Pretty,
    /// One `<letter><digit>` code per line.
    Codes,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub generator: GeneratorConfig,
    pub runtime: Runtime,
    pub format: OutputFormat,
}

impl TryFrom<CliArgs> for RunConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let letters = match args.letters {
            Some(tokens) => Vocabulary::new("letters", clean(tokens))?,
            None => Vocabulary::letters(),
        };
        let digits = match args.digits {
            Some(tokens) => Vocabulary::new("digits", clean(tokens))?,
            None => Vocabulary::digits(),
        };

        let generator = GeneratorConfig::builder()
            .workers(args.workers)
            .maybe_seed(args.seed)
            .policy(args.sampling)
            .letters(letters)
            .digits(digits)
            .build()
            .context("ALNUM_WORKERS must be greater than 0")?;

        Ok(Self {
            generator,
            runtime: args.runtime,
            format: args.format,
        })
    }
}

fn clean(tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .map(|t| t.trim().to_owned())
        .filter(|t| !t.is_empty())
        .collect()
}
