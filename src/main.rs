use tokio::signal;
use tracing_subscriber::EnvFilter;

use dotenvy::dotenv;

use crema_forms::app::create_app;
use crema_forms::config::Settings;
use crema_forms::state::SharedAppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("crema_forms=info,tower_http=info")),
    )
    .init();

  let settings = Settings::load()?;
  tracing::info!(
    "Relaying submissions with template {} as {}",
    settings.template_path.display(),
    settings.provider.from
  );

  let app_state = SharedAppState::new(&settings);
  let app = create_app(app_state);

  let address = format!("0.0.0.0:{}", settings.port);
  let listener = tokio::net::TcpListener::bind(&address).await?;

  tracing::info!("Server running on http://{}", address);

  axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
