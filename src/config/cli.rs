use super::{GeneratorConfig, DEFAULT_FILE, DEFAULT_ROWS};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "line-gen")]
#[command(version, about = "Generate place;temperature lines for 1brc testing")]
pub struct CliConfig {
    /// The file name to generate to. This can be a relative or absolute path.
    #[arg(long, default_value = DEFAULT_FILE)]
    pub file: String,

    /// The number of rows to generate.
    #[arg(short = 'n', long, default_value_t = DEFAULT_ROWS)]
    pub rows: u64,

    /// Seed the random generator for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar and log warnings only.
    #[arg(short, long)]
    pub quiet: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log CPU and memory usage around generation.
    #[arg(long)]
    pub monitor: bool,
}

impl CliConfig {
    /// Like [`Parser::try_parse_from`], but usage errors come back as `InvalidArgument`.
    pub fn try_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Ok(Self::try_parse_from(args)?)
    }

    pub fn to_generator_config(&self) -> Result<GeneratorConfig> {
        GeneratorConfig::resolve(&self.file, self.rows).map(|config| config.with_seed(self.seed))
    }
}
