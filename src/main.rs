mod config;
mod pbs;

use clap::Parser;
use color_eyre::{eyre::WrapErr, Result};
use log::info;

use crate::config::Config;
use crate::pbs::qstat::{self, QstatOptions};

/// Print the status of a PBS job: running, success or failed
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Job identifier as accepted by `qstat`
    job_id: String,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let options = QstatOptions::new(config.qstat_program, cli.job_id);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("Failed to create Tokio runtime")?;

    let status = runtime
        .block_on(qstat::query(&options))
        .wrap_err_with(|| format!("Could not determine status of job {}", options.job_id))?;

    info!("Job {} is {}", options.job_id, status);
    println!("{}", status);

    Ok(())
}
