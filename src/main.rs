use anyhow::Result;
use offhours::cli::Cli;

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with --json output.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    cli.execute()
}
