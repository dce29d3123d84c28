use dotenvy::dotenv;
use gtrain::{app, seeds};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (silently ignore if missing)
    dotenv().ok();

    // Initialise structured logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug,tower_http=debug", env!("CARGO_PKG_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load config from environment
    let config = app::config::Config::from_env()
        .expect("Failed to load config (check LEARNING_STEP and other env vars)");

    // Build the in-memory workspace, optionally with demo data
    let mut workspace = app::workspace::Workspace::empty();
    if config.seed_demo_data {
        seeds::run_seeds(&mut workspace).unwrap_or_else(|e| {
            tracing::error!("Failed to seed demo data: {}", e);
            std::process::exit(1);
        });
    }

    // Build the advisory adapter from config
    let advisor = app::advisory::from_config(&config)
        .unwrap_or_else(|e| {
            tracing::error!("Failed to initialize advisory adapter: {}", e);
            std::process::exit(1);
        });

    // Build the application state
    let bind_addr = config.bind_addr.clone();
    let state = app::AppState {
        workspace: app::workspace::SharedWorkspace::new(workspace),
        advisor,
        config,
    };
    let router = gtrain::create_router(state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to {}: {}", bind_addr, e));

    tracing::info!("Listening on http://{}", bind_addr);

    axum::serve(listener, router).await.unwrap();
}
