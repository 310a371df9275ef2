use std::sync::Arc;

use dotenv::dotenv;
use tokio::net::TcpListener;

use show_tracker::db::MockStore;
use show_tracker::handlers::api_router;
use show_tracker::services::ShowCrudService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize tracing for logs
    tracing_subscriber::fmt::init();

    // Get port from environment or use default
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .expect("PORT must be a number");

    // The demo server starts with the sample shows; everything lives in
    // memory for the process lifetime only
    let store = MockStore::seeded();
    let show_service = Arc::new(ShowCrudService::new(store));

    let app = api_router(show_service);

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
