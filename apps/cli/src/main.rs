mod config;
mod main_lib;
mod output;

use config::Config;
use main_lib::{init_tracing, run, Command};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing(&config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::from_args(&args)?;
    tracing::debug!("Running {:?}", command);
    run(&config, command)
}
