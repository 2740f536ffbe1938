mod common;
use common::get_connector;
use endeks::{Endeks, Timeframe};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. Create connector (mock in CI when ENDEKS_EXAMPLES_USE_MOCK is set).
    let connector = get_connector();

    // 2. Build the engine and start the background refresh loop.
    let mut builder = Endeks::builder().connector(connector);
    if std::env::var("ENDEKS_EXAMPLES_USE_MOCK").is_ok() {
        // The mock fixture covers calendar 2023.
        builder = builder.history_start("2023-01-01".parse()?);
    }
    let engine = builder.build()?;
    let poller = engine.spawn_poller();

    // 3. Render a window per timeframe tab.
    for timeframe in [
        Timeframe::W1,
        Timeframe::M1,
        Timeframe::M3,
        Timeframe::Ytd,
        Timeframe::Y1,
    ] {
        let view = engine.window(timeframe).await?;
        let s = view.summary;
        println!(
            "{timeframe:>4}: {} points, latest {:.2}, change {:+.2} ({:+.2}%)",
            view.dates.len(),
            s.latest,
            s.change,
            s.pct_change
        );
    }

    // 4. Stop the refresh loop before exiting.
    poller.stop().await;
    Ok(())
}
