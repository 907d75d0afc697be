use std::sync::Arc;

use login_service::domain::login::clock::Clock;
use login_service::domain::login::clock::ManualClock;
use login_service::domain::login::service::LoginService;
use login_service::inbound::http::router::create_router;
use login_service::outbound::stores::InMemoryMfaAttemptTracker;
use login_service::outbound::stores::InMemorySecureWordStore;
use login_service::outbound::stores::InMemoryUserDirectory;

pub const TEST_SALT: &str = "your-secret-salt";

/// Test application that spawns a real server on a random port.
///
/// The stores run against a shared manual clock so tests can simulate
/// expiry and lockout windows without sleeping.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let clock = Arc::new(ManualClock::new(1_700_000_000_000));

        let user_directory = Arc::new(InMemoryUserDirectory::with_demo_users(TEST_SALT));
        let secure_word_store = Arc::new(InMemorySecureWordStore::new(
            Arc::clone(&clock) as Arc<dyn Clock>
        ));
        let attempt_tracker = Arc::new(InMemoryMfaAttemptTracker::new(
            Arc::clone(&clock) as Arc<dyn Clock>
        ));

        let login_service = Arc::new(LoginService::new(
            user_directory,
            secure_word_store,
            attempt_tracker,
        ));

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let router = create_router(login_service);
        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Server crashed");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            clock,
        }
    }

    /// Helper for POST requests
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }
}
