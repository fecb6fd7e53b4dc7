mod args;
mod commands;

use crate::args::{Cli, Command};
use anyhow::{Context, Result};
use central_kernel::codec::Codec;
use central_kernel::config::load_config;
use central_kernel::domain::config::AppConfig;
use central_logger::{LevelFilter, Logger};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg: AppConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;

    let mut logger = Logger::builder().name(env!("CARGO_BIN_NAME")).apply(&cfg.logging)?;
    if cli.verbose {
        logger = logger.level(LevelFilter::DEBUG);
    }
    let _log = logger.init()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Check { input } => {
            let raw = commands::read_document(&input)?;
            commands::check(&raw, &input, &cfg.codec, &mut out)?;
        }
        Command::Normalize { input, pretty } => {
            let raw = commands::read_document(&input)?;
            commands::normalize(&raw, &input, codec(&cfg, pretty), &mut out)?;
        }
        Command::Input { input, pretty } => {
            let raw = commands::read_document(&input)?;
            commands::input(&raw, &input, codec(&cfg, pretty), &mut out)?;
        }
    }

    Ok(())
}

fn codec(cfg: &AppConfig, pretty: bool) -> Codec {
    if pretty { Codec::new(true) } else { Codec::from_config(&cfg.codec) }
}
