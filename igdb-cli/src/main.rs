mod cli;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use igdb_lib::IgdbClient;
use igdb_lib::model::Value;
use simplelog::ColorChoice;
use simplelog::Config;
use simplelog::TermLogger;
use simplelog::TerminalMode;

use crate::cli::Cli;
use crate::cli::Command;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    TermLogger::init(
        cli.log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("failed to initialize logger")?;

    let mut builder = IgdbClient::builder();
    if let Some(key) = &cli.api_key {
        builder = builder.api_key(key);
    }
    if let Some(endpoint) = &cli.endpoint {
        builder = builder.endpoint(endpoint);
    }
    let client = builder.build()?;
    log::info!("Using endpoint {}", client.endpoint());

    let output = match &cli.command {
        Command::Find(args) => {
            let query = args.to_query();
            if args.one {
                client.find_one(&query)?.unwrap_or(Value::Null)
            } else {
                client.find(&query)?
            }
        }
        Command::Meta { entity } => client.meta(entity)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
