use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use worker_pool::{
    cli::{execute_run, wait_for_acknowledgment, Cli},
    PoolError,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(error) = execute_run(&cli).await {
        match error.downcast_ref::<PoolError>() {
            Some(pool_error @ PoolError::InvalidArgument { .. }) => {
                eprintln!("❌ プールの初期化が不正です: {pool_error}");
            }
            Some(pool_error) => {
                eprintln!("❌ [{}] {error:#}", pool_error.severity());
            }
            None => eprintln!("❌ エラー: {error:#}"),
        }
        std::process::exit(1);
    }

    if !cli.no_wait {
        wait_for_acknowledgment().await?;
    }

    Ok(())
}
