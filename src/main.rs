//! Stream Proxy - Main entry point

use stream_proxy::{MetadataCatalog, ProxyConfig, StdinGate, StreamingGateway};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter("stream_proxy=info")
        .init();

    info!("Starting Stream Proxy v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = ProxyConfig::default();
    info!("Loaded configuration: {:?}", config);

    // Seed the metadata catalog
    let catalog = MetadataCatalog::from_entries(&config.catalog)?;
    info!(videos = catalog.len(), "metadata catalog seeded");

    // Interaction starts with the proxy; the playback engine is only
    // constructed if the session is confirmed
    let mut gateway = StreamingGateway::new(catalog, Box::new(StdinGate));

    let outcome = gateway.play(&config.default_video_id).await;
    info!(
        playing = outcome.is_playing(),
        outcome = ?outcome,
        "playback session finished"
    );

    Ok(())
}
