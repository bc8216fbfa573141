use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, EnvFilter};
use typeprep::cli::Cli;
use typeprep::{RunConfig, WikipediaClient};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let Some(source) = cli.source() else {
        Cli::command()
            .error(
                clap::error::ErrorKind::MissingRequiredArgument,
                "one of --file, --wikipedia or --string is required",
            )
            .exit();
    };

    let config = RunConfig::from_cli(&cli);
    config.validate().context("invalid command-line options")?;

    let provider = WikipediaClient::new(config.source.wikipedia.clone());
    let report = typeprep::prepare(&source, &config.source, &provider, &config.prepare)?;

    println!("\n{report}\n");
    Ok(())
}

fn init_tracing(cli: &Cli) {
    // Level comes from -v only, RUST_LOG is ignored.
    let filter = EnvFilter::default().add_directive(cli.log_level().into());
    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("Tracing subscriber already set; skipping re-initialization.");
    }
}
