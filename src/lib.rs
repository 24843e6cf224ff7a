pub mod cli;
pub mod core;
pub mod engine;
pub mod services;

pub use crate::core::{PoolError, PoolResult, PoolSummary};
pub use engine::{double_in_parallel, WorkerPool};
