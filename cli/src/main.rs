//! pinstack CLI - pinning charts for master-keyed interchangeable cores.
//!
//! ```text
//! main() -> Cli::parse() -> Settings::resolve(flags, config) -> Combination::build(rng) -> render
//! ```
//!
//! Keys not given on the command line are generated. The control key is
//! settled first and its parity constrains a generated change key; the master
//! key defaults to the change key.
//!
//! Logs go to stderr (`RUST_LOG`, default `warn`) so stdout carries only the
//! chart or JSON.

mod args;
mod render;
mod settings;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use pinstack_config::{Defaults, PinstackConfig, config_path};
use pinstack_core::{Combination, KeyRequest};

use crate::args::Cli;
use crate::settings::Settings;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn load_defaults() -> Result<Defaults> {
    let Some(config) = PinstackConfig::load() else {
        return Ok(Defaults::default());
    };
    let path = config_path().unwrap_or_default();
    config
        .defaults()
        .with_context(|| format!("in config file {}", path.display()))
}

fn run(cli: &Cli) -> Result<String> {
    let defaults = load_defaults()?;
    let settings = Settings::resolve(cli, &defaults)?;

    let request = KeyRequest {
        change: cli.change_key.clone(),
        master: cli.master_key.clone(),
        control: cli.control_key.clone(),
    };

    let combination = match cli.seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded generator");
            let mut rng = StdRng::seed_from_u64(seed);
            Combination::build(&settings.spec, &request, settings.policy, &mut rng)
        }
        None => Combination::build(&settings.spec, &request, settings.policy, &mut rand::rng()),
    }?;

    if cli.json {
        let mut json = serde_json::to_string_pretty(&combination)?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(render::render_text(&combination))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
