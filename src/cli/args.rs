use crate::services::{DefaultPoolConfig, DEFAULT_INPUT_SIZE};
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "worker_pool")]
#[command(about = "Drain a shared work queue with a fixed-size worker pool")]
#[command(version)]
pub struct Cli {
    /// Number of workers (defaults to the number of available CPUs)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Number of input items; inputs are the values 0..N
    #[arg(short = 'n', long, default_value_t = DEFAULT_INPUT_SIZE)]
    pub input_size: usize,

    /// Lower bound of the simulated work delay in milliseconds
    #[arg(long, default_value = "500")]
    pub min_delay_ms: u64,

    /// Upper bound of the simulated work delay in milliseconds
    #[arg(long, default_value = "3000")]
    pub max_delay_ms: u64,

    /// Disable the simulated work delay
    #[arg(long)]
    pub no_delay: bool,

    /// Master seed for the per-worker random delay sources
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Only print start, completion and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit without waiting for Enter
    #[arg(long)]
    pub no_wait: bool,
}

impl Cli {
    /// コマンドライン引数からプール設定を構築
    pub fn to_config(&self) -> DefaultPoolConfig {
        let mut config = DefaultPoolConfig::default().with_input_size(self.input_size);

        if let Some(workers) = self.workers {
            config = config.with_worker_count(workers);
        }
        config = if self.no_delay {
            config.without_delay()
        } else {
            config.with_delay_range(self.min_delay_ms, self.max_delay_ms)
        };
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }

        config
    }
}
