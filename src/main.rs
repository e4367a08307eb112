use clap::Parser;
use neows::Cli;
use neows_core::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|_| Config::defaults()),
    };

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log.debug_file)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!(
            "neows debug log started: tail -f {}",
            config.log.debug_file.display()
        );
    }

    let count = neows::run(&cli, &config, &mut std::io::stdout().lock())?;
    tracing::info!(results = count, "query finished");
    Ok(())
}
