use anyhow::{anyhow, Result};
use clap::Parser;
use pm3_flipper::cli::Cli;
use pm3_flipper::run_conversion;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = cli.to_config();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cfg.log_filter()))
        .format_timestamp(None)
        .init();

    run_conversion(&cfg).map_err(|err| {
        log::debug!("conversion failed: {err:?}");
        anyhow!(err.user_message())
    })?;
    println!("[*]  Done.");
    Ok(())
}
