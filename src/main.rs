use clinic_relay::startup;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting clinic relay");

    // Load configuration; a missing credentials path stops the process here
    let config = startup::load_config()?;

    // Serve until shutdown
    startup::start_server(config).await
}
