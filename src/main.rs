use clap::Parser;
use log::LevelFilter;
use contribution_analyzer::config::config_manager::ConfigManager;
use contribution_analyzer::enums::commands::Commands;
use contribution_analyzer::structs::cli::Cli;
use contribution_analyzer::structs::config::config::Config;
use contribution_analyzer::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Started before the config is read so that loading is logged too.
    // RUST_LOG, when set, wins over the configured level.
    let env_filter_set = std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_some();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace")).init();
    if !env_filter_set {
        log::set_max_level(LevelFilter::Info);
    }

    // `init` creates the file the other commands read.
    let config = match cli.command {
        Commands::Init => Config::default(),
        _ => ConfigManager::load(cli.config.as_deref())?,
    };

    if !env_filter_set {
        log::set_max_level(config.logging.level_filter());
    }

    let runner = CommandRunner::new(cli.config, config);
    runner.run_command(cli.command).await?;
    Ok(())
}
