use anyhow::Context;
use auditus_core::{Auditor, BROWSER_USER_AGENT, FetchConfig, PageSpeedConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod echo;
mod session;

pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Audit web pages for on-page SEO signals from an interactive menu
#[derive(Parser, Debug)]
#[command(name = "auditus")]
#[command(author = "Auditus Contributors")]
#[command(version = "1.0.0")]
#[command(about = "Audit web pages for on-page SEO signals", long_about = None)]
struct Args {
    /// Google PageSpeed API key (can also be set from the menu)
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// HTTP timeout in seconds for page fetches
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Set up the tracing subscriber, keeping log output on stderr so the
/// report stream on stdout stays clean
fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("auditus_core=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    setup_logging(args.verbose);

    let fetch_config = FetchConfig {
        timeout: args.timeout,
        user_agent: args.user_agent.unwrap_or_else(|| BROWSER_USER_AGENT.to_string()),
    };

    let mut auditor = Auditor::with_config(fetch_config, PageSpeedConfig::default())
        .context("Failed to initialize HTTP client")?;

    if let Some(key) = args.api_key {
        auditor.set_api_key(key);
    }

    let mut session = session::Session::new(auditor);
    session.run().await
}
