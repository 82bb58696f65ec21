use delayed_json::{config::Config, server};

use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(tracing::Level::INFO.into())
                .from_env_lossy(),
        )
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .with_ansi(false)
        .init();

    let config = Config::init();

    server::start(config).await?;
    Ok(())
}
