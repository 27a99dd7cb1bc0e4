pub mod routes;
pub mod shared;
pub mod system;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use routes::AppState;
use shared::config::{get_static_dir, load_config};
use system::auth::identity::SupabaseClient;
use system::middleware::request_logger::RequestLogOptions;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = load_config()?;
    let state = AppState {
        identity: Arc::new(SupabaseClient::new(
            &config.identity.url,
            &config.identity.anon_key,
        )),
    };
    tracing::info!("Identity provider: {}", config.identity.url);

    let static_dir = get_static_dir(&config);
    tracing::info!("Serving static files from {}", static_dir.display());

    let app = routes::configure_routes(
        state,
        &static_dir,
        RequestLogOptions {
            headers: config.server.debug_requests,
        },
    );
    routes::log_routes();

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind to port {}. Error: {}", config.server.port, e);
            return Err(e.into());
        }
    };

    tracing::info!("Server running at http://localhost:{}", config.server.port);
    axum::serve(listener, app).await?;

    Ok(())
}
