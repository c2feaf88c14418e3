use anyhow::Context;
use asciify::{AsciiConverter, Cli};
use clap::Parser;
use log::LevelFilter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .init();

    println!("{}", cli.path.display());

    match run(&cli) {
        Ok(art) => {
            println!("{}", art);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = cli.to_config();
    log::debug!("Using config: {:?}", config);

    let converter = AsciiConverter::new(config).context("Invalid options")?;
    let art = converter.convert_path(&cli.path)?;

    Ok(art)
}
