use tracing_subscriber::{EnvFilter, fmt};

use cinema_tickets::core::purchase::policy::PurchasePolicy;
use cinema_tickets::shell::{http, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // In-memory sinks for now; real payment and reservation adapters slot in
    // behind the same ports.
    let state = AppState::new(PurchasePolicy::default());
    let app = http::router(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("purchase endpoint: http://{addr}/purchase-tickets");
    axum::serve(listener, app).await?;
    Ok(())
}
