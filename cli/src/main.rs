use std::io::{self, IsTerminal, Write};

use anyhow::Context;
use clap::Parser;
use gostruct::{input, schema::Schema};
use gostruct_go::{Config, codegen};
use tracing_subscriber::EnvFilter;

mod args;

use args::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse_from(args::normalize(std::env::args_os()));

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&args.log_level)
                .with_context(|| format!("invalid log level {:?}", args.log_level))?,
        )
        .with_writer(io::stderr) // stdout is reserved for generated code
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .init();

    if !args.ignored.is_empty() {
        tracing::debug!(ignored = ?args.ignored, "ignoring arguments after the flags");
    }

    let config = Config::from(args);
    config.validate()?;

    if config.accessor_conflict() {
        tracing::warn!("you can't have public variables and getters, generating both");
    }

    let content = input::read_all(io::stdin().lock())?;
    let schema = Schema::from(input::decode(&content)?);
    tracing::debug!(%schema, "decoded input");

    let mut output = Vec::new();
    codegen(schema, &config, &mut output)?;
    tracing::debug!(bytes = output.len(), "generated");

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&output)
        .and_then(|()| stdout.flush())
        .context("can't write to stdout")?;

    Ok(())
}
