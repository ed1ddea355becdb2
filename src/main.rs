use clap::Parser;

use littlelemon_lib::bootstrap::{
    build_session, init_tracing_subscriber, load_config_or_default, StorageOverrides,
};
use littlelemon_lib::cli::{Cli, Commands};
use littlelemon_lib::run_command;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config_or_default(cli.config.as_deref())?;
    let overrides = StorageOverrides {
        data_dir: cli.data_dir.clone(),
        ephemeral: cli.ephemeral,
    };
    let wiring = build_session(&config, &overrides)?;
    init_tracing_subscriber(&config, &wiring.paths.logs_dir)?;

    tracing::debug!(
        profile_path = %wiring.paths.profile_path.display(),
        ephemeral = cli.ephemeral,
        "session wired"
    );

    let command = cli.command.unwrap_or(Commands::Status);
    let view = run_command(&wiring.orchestrator, command).await?;

    if let Some(warning) = &view.warning {
        eprintln!("warning: {warning}");
    }
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
