use anyhow::Context;
use tracing_subscriber::EnvFilter;

use httpsms_sender::config::AppConfig;
use httpsms_sender::services::clock::SystemClock;
use httpsms_sender::services::messaging::httpsms::HttpSmsProvider;
use httpsms_sender::services::sender;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    // stdout is reserved for the provider response
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env();
    let timeout = config.timeout().context("invalid HTTPSMS_TIMEOUT_SECS")?;
    let provider = HttpSmsProvider::new(timeout).context("failed to build HTTP client")?;

    let response = sender::send_message(&provider, &SystemClock, &config)
        .await
        .context("failed to send SMS via httpSMS")?;

    println!("{}", sender::render_response(&response));

    Ok(())
}
