//! Dashboard report for a recommendation deep link.
//!
//! Reads the parameters out of a deep link, asks the API for the full
//! recommendation, and prints the report.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use cogni::adapters::client::{HttpClientConfig, HttpRecommendationClient};
use cogni::application::{BuildReportHandler, BuildReportQuery};
use cogni::config::{AppConfig, DashboardConfig};
use cogni::domain::recommendation::DeepLinkBuilder;
use cogni::domain::report::DashboardParams;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cogni-report")]
#[command(about = "Render the Cogni recommendation report for a dashboard link")]
struct Args {
    /// Dashboard deep link, or just its query string
    link: String,

    /// Recommendation API base URL (overrides COGNI__DASHBOARD__API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Dashboard base URL used for alternative links
    #[arg(long)]
    dashboard_url: Option<String>,

    /// API timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_filter = if args.verbose { "cogni=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load()?;
    config.dashboard.validate()?;

    let params = DashboardParams::from_link(&args.link)?;

    let client = HttpRecommendationClient::new(args.client_config(&config.dashboard))?;
    tracing::debug!("Using recommendation endpoint {}", client.endpoint());

    let links = DeepLinkBuilder::new(args.dashboard_url(&config.dashboard));
    let handler = BuildReportHandler::new(Arc::new(client), links);

    let view = handler.handle(BuildReportQuery { params }).await;
    println!("{}", view.render());

    if !view.is_ready() {
        std::process::exit(1);
    }
    Ok(())
}

impl Args {
    /// Command-line overrides win over the dashboard configuration.
    fn client_config(&self, dashboard: &DashboardConfig) -> HttpClientConfig {
        HttpClientConfig {
            api_url: self
                .api_url
                .clone()
                .unwrap_or_else(|| dashboard.api_url.clone()),
            timeout: self
                .timeout
                .map(Duration::from_secs)
                .unwrap_or_else(|| dashboard.request_timeout()),
        }
    }

    fn dashboard_url(&self, dashboard: &DashboardConfig) -> String {
        self.dashboard_url
            .clone()
            .unwrap_or_else(|| dashboard.base_url.clone())
    }
}
