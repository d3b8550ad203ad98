use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use curriculum_browser::{config, content, handlers, state::AppState};

#[tokio::main]
async fn main() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "curriculum_browser=debug,tower_http=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let catalog = match content::load_catalog() {
    Ok(catalog) => catalog,
    Err(e) => {
      tracing::error!("Failed to load catalog: {}", e);
      std::process::exit(1);
    }
  };

  let app = handlers::router(AppState::new(catalog));

  let bind_addr = config::server_bind_addr();
  let listener = tokio::net::TcpListener::bind(&bind_addr)
    .await
    .unwrap_or_else(|_| panic!("Failed to bind to {}", bind_addr));

  tracing::info!("Server running on http://localhost:{}", config::server_port());

  axum::serve(listener, app)
    .await
    .expect("Server failed to start");
}
