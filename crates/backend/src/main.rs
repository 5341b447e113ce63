pub mod routes;
pub mod shared;
pub mod system;
pub mod upstream;

use contracts::dashboards::d402_indicator_explorer::query::FORWARDED_PATHS;
use tokio::net::TcpListener;
use upstream::{AppState, UpstreamClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let static_dir = shared::config::resolve_static_dir(&config.server.static_dir);
    if !static_dir.is_dir() {
        tracing::warn!(
            "Static directory {} does not exist; build the frontend first",
            static_dir.display()
        );
    }

    let upstream = UpstreamClient::new(&config.upstream)?;
    tracing::info!(
        "Forwarding {} to {}",
        FORWARDED_PATHS.join(", "),
        upstream.base_url()
    );
    tracing::info!("Serving frontend from {}", static_dir.display());

    let app = routes::configure_routes(AppState::new(upstream), &static_dir);

    let addr = config.server.addr();
    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: {} is already in use. Please ensure no other process is using this port.",
                    addr
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
