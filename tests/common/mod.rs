use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tokio::sync::OnceCell;

use journal_api::state::AppState;
use journal_api::store::memory::MemoryStore;
use journal_api::store::Store;

static SERVER: OnceCell<TestServer> = OnceCell::const_new();
static COUNTER: AtomicU32 = AtomicU32::new(0);

// Seeded admin account available to every test in this binary
#[allow(dead_code)]
pub const ADMIN_USER: &str = "root";
#[allow(dead_code)]
pub const ADMIN_PASSWORD: &str = "root-password";

pub struct TestServer {
    pub base_url: String,
}

impl TestServer {
    async fn spawn() -> Result<Self> {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
        store
            .bootstrap_admin(ADMIN_USER, ADMIN_PASSWORD, "root@example.com")
            .context("failed to seed admin account")?;

        let app = journal_api::app(AppState::new(store));

        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Run the server on its own runtime thread so it outlives the
        // per-test runtimes that `#[tokio::test]` creates and tears down.
        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("test server runtime");
            rt.block_on(async move {
                let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
                    .await
                    .expect("failed to bind test listener");
                axum::serve(listener, app).await.expect("test server");
            });
        });

        let server = Self { base_url };
        server.wait_ready(Duration::from_secs(10)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/api/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

/// One server (and one store) per test binary; tests use unique usernames to
/// stay independent of each other.
pub async fn ensure_server() -> Result<&'static TestServer> {
    SERVER
        .get_or_try_init(|| async { TestServer::spawn().await })
        .await
}

/// Generate a username no other test in this binary will use.
#[allow(dead_code)]
pub fn unique_username(prefix: &str) -> String {
    format!("{}_{}", prefix, COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// Register an account and log it in, returning the session token.
#[allow(dead_code)]
pub async fn register_and_login(base_url: &str, username: &str, password: &str) -> Result<String> {
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/auth/register", base_url))
        .json(&serde_json::json!({
            "username": username,
            "password": password,
            "email": format!("{}@example.com", username),
        }))
        .send()
        .await?;
    anyhow::ensure!(
        res.status() == StatusCode::CREATED,
        "register failed: {}",
        res.status()
    );

    login(base_url, username, password).await
}

/// Log in an existing account, returning the session token.
#[allow(dead_code)]
pub async fn login(base_url: &str, username: &str, password: &str) -> Result<String> {
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/auth/login", base_url))
        .json(&serde_json::json!({ "username": username, "password": password }))
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::OK, "login failed: {}", res.status());

    let body = res.json::<serde_json::Value>().await?;
    body["token"]
        .as_str()
        .map(str::to_string)
        .context("login response missing token")
}
