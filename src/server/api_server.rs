use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use serde_json::json;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};
use crate::config::constants::MAX_REQUEST_BODY_BYTES;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::services::contribution_analyzer::ContributionAnalyzer;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::config::server_config::ServerConfig;
use crate::structs::contribution_report::ContributionReport;

pub struct ApiServer {
    analyzer: Arc<ContributionAnalyzer>,
    config: ServerConfig,
}

impl ApiServer {
    pub fn new(analyzer: Arc<ContributionAnalyzer>, config: ServerConfig) -> Self {
        Self { analyzer, config }
    }

    /// Serves until ctrl-c.
    pub async fn run(self) -> AnalyzerResult<()> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|e| {
                AnalyzerError::config_error(
                    &format!("Invalid listen address {}:{}: {}", self.config.host, self.config.port, e),
                    Some("server.host"),
                )
            })?;

        let routes = routes(Arc::clone(&self.analyzer), &self.config);
        let (bound, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    log::error!("❌ Failed to listen for shutdown signal: {}", e);
                }
            })
            .map_err(|e| AnalyzerError::server_error("bind", &e.to_string()))?;

        log::info!("🌐 Contribution Analyzer API listening on http://{}", bound);
        server.await;
        log::info!("🛑 Server shutdown complete");
        Ok(())
    }
}

pub fn routes(
    analyzer: Arc<ContributionAnalyzer>,
    config: &ServerConfig,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let analyzer_filter = warp::any().map(move || Arc::clone(&analyzer));

    let analyze = warp::path!("api" / "analyze-contribution")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_REQUEST_BODY_BYTES))
        .and(warp::body::json::<AnalysisRequest>())
        .and(analyzer_filter)
        .and_then(analyze_contribution_handler);

    let health = warp::path!("api" / "health")
        .and(warp::get())
        .and_then(health_handler);

    let sample = warp::path!("api" / "test")
        .and(warp::get())
        .and_then(sample_report_handler);

    analyze
        .or(health)
        .or(sample)
        .with(cors(config))
        .recover(handle_rejection)
}

fn cors(config: &ServerConfig) -> warp::cors::Builder {
    let builder = warp::cors()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST", "OPTIONS"]);

    if config.allows_any_origin() {
        builder.allow_any_origin()
    } else {
        builder.allow_origins(config.cors_allowed_origins.iter().map(String::as_str))
    }
}

fn error_reply(message: &str, status: StatusCode) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(warp::reply::json(&json!({ "error": message })), status)
}

async fn analyze_contribution_handler(
    request: AnalysisRequest,
    analyzer: Arc<ContributionAnalyzer>,
) -> Result<impl Reply, Infallible> {
    match analyzer.analyze(&request).await {
        Ok(report) => Ok(warp::reply::with_status(warp::reply::json(&report), StatusCode::OK)),
        Err(e) => {
            let status = StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            if status.is_client_error() {
                Ok(error_reply(&e.to_string(), status))
            } else {
                let detail = e.diagnostic();
                log::error!("ERROR: {}", detail);
                Ok(error_reply(&detail, status))
            }
        }
    }
}

async fn health_handler() -> Result<impl Reply, Infallible> {
    Ok(warp::reply::json(&json!({ "status": "ok" })))
}

/// Fixed report for exercising clients without calling the agent.
pub fn sample_report() -> ContributionReport {
    ContributionAnalyzer::report_from_text(
        "Project name: ASTRA_Autogen
Author name: MUVivekanand
Total commits: 10
No of commits by author: 4
Contribution Percentage: 40.0%
Contribution Rating: 4/6",
    )
}

async fn sample_report_handler() -> Result<impl Reply, Infallible> {
    log::info!("Test endpoint called");
    Ok(warp::reply::json(&sample_report()))
}

async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found".to_string())
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, format!("Invalid request body: {}", e))
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large".to_string())
    } else if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        (StatusCode::UNSUPPORTED_MEDIA_TYPE, "Expected a JSON request body".to_string())
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        (StatusCode::LENGTH_REQUIRED, "Content-Length header required".to_string())
    } else if let Some(e) = err.find::<warp::cors::CorsForbidden>() {
        (StatusCode::FORBIDDEN, e.to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
    } else {
        log::error!("Unhandled rejection: {:?}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
    };

    Ok(error_reply(&message, status))
}
