use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::helpers::prompt_generator::PromptGenerator;
use crate::logger::animated_logger::AnimatedLogger;
use crate::server::api_server::ApiServer;
use crate::services::agents::agent_factory::AgentFactory;
use crate::services::contribution_analyzer::ContributionAnalyzer;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::config::config::Config;
use crate::structs::contribution_report::ContributionReport;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    config: Config,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>, config: Config) -> Self {
        Self { config_path, config }
    }

    pub async fn run_command(&self, command: Commands) -> AnalyzerResult<()> {
        let start_time = Instant::now();

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Serve { host, port } => self.serve_command(host, port).await,
            Commands::Analyze { project, author, owner } => {
                self.analyze_command(AnalysisRequest { project, author, owner }).await
            }
            Commands::Parse { file } => self.parse_command(file.as_deref()),
        };

        log::debug!("⏱️  Command completed in {:.2}s", start_time.elapsed().as_secs_f64());
        result
    }

    fn init_command(&self) -> AnalyzerResult<()> {
        log::info!("🚀 Initializing contribution analyzer configuration...");

        let path = ConfigManager::create_sample_config(self.config_path.as_deref())?;
        log::info!("📝 Edit {} to point at your agent endpoint.", path.display());
        log::info!("🔧 Run 'contribution-analyzer validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self) -> AnalyzerResult<()> {
        match ConfigManager::validate_config(&self.config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                Ok(())
            }
            Err(errors) => {
                for error in &errors {
                    log::error!("   ❌ {}", error);
                }
                Err(AnalyzerError::config_error(
                    &format!("{} configuration problem(s) found", errors.len()),
                    None,
                ))
            }
        }
    }

    fn build_analyzer(&self) -> AnalyzerResult<ContributionAnalyzer> {
        self.validate_command()?;
        let agent = AgentFactory::create(&self.config.agent)?;
        Ok(ContributionAnalyzer::new(
            agent,
            PromptGenerator::new(self.config.agent.reply_format),
        ))
    }

    async fn serve_command(&self, host: Option<String>, port: Option<u16>) -> AnalyzerResult<()> {
        let mut server_config = self.config.server.clone();
        if let Some(host) = host {
            server_config.host = host;
        }
        if let Some(port) = port {
            server_config.port = port;
        }

        let analyzer = Arc::new(self.build_analyzer()?);
        log::info!("Starting API...");
        ApiServer::new(analyzer, server_config).run().await
    }

    async fn analyze_command(&self, request: AnalysisRequest) -> AnalyzerResult<()> {
        request.validate()?;
        let analyzer = self.build_analyzer()?;

        let spinner = AnimatedLogger::start(format!(
            "🔍 Asking the agent about {} in {}",
            request.author,
            request.repository()
        ));

        match analyzer.analyze(&request).await {
            Ok(report) => {
                spinner.stop("Analysis complete").await;
                print_report(&report)
            }
            Err(e) => {
                spinner.error(&e.to_string()).await;
                Err(e)
            }
        }
    }

    fn parse_command(&self, file: Option<&Path>) -> AnalyzerResult<()> {
        let raw = match file {
            Some(path) => fs::read_to_string(path)?,
            None => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };

        print_report(&ContributionAnalyzer::report_from_text(&raw))
    }
}

fn print_report(report: &ContributionReport) -> AnalyzerResult<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
