use std::sync::Arc;

use anyhow::Context;
use no1engineer::{
    app::App, config::get_configuration, storage::MemStorage, telemetry::get_subscriber,
};
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = get_configuration().context("Failed to read configuration.")?;

    get_subscriber(&config.log_level, std::io::stderr).init();

    let app = App::with(&config)
        .await
        .context("The listener should be able to bind the address.")?;

    tracing::info!(host = %app.host(), port = app.port(), "starting server");
    app.serve(Arc::new(MemStorage::new()))
        .await
        .context("The server stopped unexpectedly.")?;

    Ok(())
}
