use clap::Parser;
use storylens_lib::bootstrap::{init_tracing_subscriber, resolve_config};
use storylens_lib::presentation::TerminalOutput;
use storylens_lib::{run, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(cli.config.clone())?;

    if let Err(err) = init_tracing_subscriber(&config.data_dir.join("logs")) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    run(cli, config, TerminalOutput::stdout()).await
}
