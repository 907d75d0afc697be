use std::sync::Arc;

use login_service::config::Config;
use login_service::domain::login::clock::Clock;
use login_service::domain::login::clock::SystemClock;
use login_service::domain::login::service::LoginService;
use login_service::inbound::http::router::create_router;
use login_service::outbound::stores::InMemoryMfaAttemptTracker;
use login_service::outbound::stores::InMemorySecureWordStore;
use login_service::outbound::stores::InMemoryUserDirectory;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "login_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "login-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(http_port = config.server.http_port, "Configuration loaded");

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let user_directory = Arc::new(InMemoryUserDirectory::with_demo_users(
        &config.auth.password_salt,
    ));
    let secure_word_store = Arc::new(InMemorySecureWordStore::new(Arc::clone(&clock)));
    let attempt_tracker = Arc::new(InMemoryMfaAttemptTracker::new(Arc::clone(&clock)));

    let login_service = Arc::new(LoginService::new(
        user_directory,
        secure_word_store,
        attempt_tracker,
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(login_service);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
