//! Process bootstrap: load configuration, install logging, assemble the
//! service graph, and serve until a shutdown signal arrives.

use tokio_util::sync::CancellationToken;

use shipping_optimizer::config::Settings;
use shipping_optimizer::http::handlers::AppState;
use shipping_optimizer::http::server;
use shipping_optimizer::registry::PackSizeRegistry;

#[tokio::main]
async fn main() {
    shipping_optimizer::telemetry::init();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!(%err, "invalid server port");
            std::process::exit(1);
        }
    };

    let addr = match settings.socket_addr() {
        Ok(addr) => addr,
        Err(err) => {
            tracing::error!(%err, "invalid server address");
            std::process::exit(1);
        }
    };

    let registry = PackSizeRegistry::new();
    let shutdown = CancellationToken::new();
    let app = server::router(AppState::with_shutdown(registry, shutdown.clone()));

    if let Err(err) = server::serve(app, addr, server::shutdown_signal(), shutdown).await {
        tracing::error!(%err, "server failed");
        std::process::exit(1);
    }
}
