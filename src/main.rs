use clap::Parser;
use lifesync_lib::bootstrap::{self, tracing::init_tracing_subscriber};
use lifesync_lib::{commands, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Configuration first: it decides whether logs also go to a file.
    let settings = bootstrap::resolve_settings(cli.config.clone(), cli.data_dir.clone())?;
    init_tracing_subscriber(settings.log_dir())?;

    let runtime = bootstrap::build_runtime(&settings);
    let mut out = std::io::stdout();
    commands::execute(&cli.command, &runtime, &mut out).await
}
