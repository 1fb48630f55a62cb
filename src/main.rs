// Entrypoint for the CLI application.
// - Keeps `main` small: resolve config, create one API client and hand it
//   either to a one-shot command or to the interactive UI.
// - Returns `anyhow::Result` so startup failures are reported and fatal.

use anyhow::{Context, Result};
use clap::Parser;
use house_price_cli::api::{ApiClient, BASE_URL_ENV};
use house_price_cli::commands::{self, Command};
use house_price_cli::config::{resolve_base_url, AppConfig};
use house_price_cli::ui::App;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "house-price-cli")]
#[command(version)]
#[command(about = "Estimate house prices from a prediction backend")]
struct Args {
    /// Backend base URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with prompts on stdout.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let file_config = AppConfig::load()?;
    let env_url = std::env::var(BASE_URL_ENV).ok();
    let base_url = resolve_base_url(args.api_url.as_deref(), env_url.as_deref(), &file_config);
    let api = ApiClient::new(&base_url).context("Failed to create API client")?;
    tracing::debug!(base_url = %api.base_url(), "API client ready");

    match args.command {
        None => App::new(api).run(),
        Some(command) => commands::run(&api, command, &mut std::io::stdout().lock()),
    }
}
