use anyhow::Context;
use catfact::config::Config;
use catfact::fact::{CatFactClient, FactSource};
use catfact::logging::{init_tracing, LogMode};
use catfact::ui::app::App;
use catfact::ui::fact::FactViewModel;
use clap::Parser;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "catfact", version, about = "Random cat facts in your terminal")]
struct Cli {
    /// Print a single fact to stdout and exit
    #[arg(long)]
    once: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for the emoji, color and exclamation picks
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Override the longest fact to request, in characters
    #[arg(long, value_name = "CHARS")]
    max_length: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(if cli.once {
        LogMode::Once
    } else {
        LogMode::Interactive
    });

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(max_length) = cli.max_length {
        config.api.max_length = max_length;
        config.validate()?;
    }

    let view_model = FactViewModel::from_config(&config, cli.seed)?;
    let client = CatFactClient::new(&config.api)?;
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    tracing::info!(url = client.url(), once = cli.once, "starting");

    if cli.once {
        let text = runtime.block_on(fetch_once(view_model, &client))?;
        println!("{}", text);
        return Ok(());
    }

    catfact::ui::run(App::new(view_model), Arc::new(client), runtime.handle().clone())
        .context("Terminal UI failed")?;
    Ok(())
}

/// Fetch one fact and decorate it the same way the UI would.
async fn fetch_once(
    mut view_model: FactViewModel<StdRng>,
    source: &dyn FactSource,
) -> anyhow::Result<String> {
    let fact = source.fetch_fact().await?;
    view_model.begin_fetch();
    view_model.finish_fetch(Ok(fact));
    view_model
        .share_text()
        .context("Fact service returned nothing to show")
}
