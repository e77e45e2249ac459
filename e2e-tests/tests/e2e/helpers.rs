use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use assistant_runtime::history::HistoryStore;
use assistant_runtime::state::{build_router, AppState};
use spamcheck_rs::artifacts::ArtifactStore;
use spamcheck_rs::config::ArtifactConfig;
use tempfile::TempDir;

/// Fitted vectorizer fixture: a small vocabulary covering the spam, ham and
/// phishing phrases the scenarios use, with one bigram column.
pub const FIXTURE_VECTORIZER: &str = r#"{
    "vocabulary": {
        "congratulations": 0,
        "won": 1,
        "free": 2,
        "prize": 3,
        "free prize": 4,
        "click": 5,
        "urgent": 6,
        "verify": 7,
        "bank": 8,
        "account": 9,
        "password": 10,
        "lunch": 11,
        "meet": 12,
        "tomorrow": 13,
        "noon": 14
    },
    "idf": [2.0, 1.8, 1.5, 1.9, 2.2, 1.6, 2.1, 1.7, 1.9, 1.8, 2.0, 1.4, 1.3, 1.5, 1.6],
    "ngram_range": [1, 2]
}"#;

/// Calibrated classifier fixture matched to [`FIXTURE_VECTORIZER`].
pub const FIXTURE_CLASSIFIER: &str = r#"{
    "weights": [1.2, 1.0, 0.9, 1.3, 1.6, 0.8, 1.1, 1.0, 1.2, 1.1, 1.3, -1.4, -1.0, -0.9, -1.1],
    "intercept": -0.4,
    "calibrators": [
        {"slope": 1.7, "offset": 0.1},
        {"slope": 1.5, "offset": -0.05},
        {"slope": 1.6, "offset": 0.0}
    ]
}"#;

/// Same weights with the intercept pushed far negative, so after a reload
/// every message lands on the ham side.
pub const ALL_HAM_CLASSIFIER: &str = r#"{
    "weights": [1.2, 1.0, 0.9, 1.3, 1.6, 0.8, 1.1, 1.0, 1.2, 1.1, 1.3, -1.4, -1.0, -0.9, -1.1],
    "intercept": -99.0,
    "calibrators": [
        {"slope": 1.7, "offset": 0.1},
        {"slope": 1.5, "offset": -0.05},
        {"slope": 1.6, "offset": 0.0}
    ]
}"#;

/// In-process service instance bound to an ephemeral port.
pub struct TestEnv {
    pub base_url: String,
    pub client: reqwest::Client,
    artifacts: TempDir,
}

impl TestEnv {
    /// Write fixture artifacts, build the full application state and start
    /// serving it on 127.0.0.1.
    pub async fn spawn() -> Self {
        let artifacts = TempDir::new().expect("create temp dir");
        std::fs::write(artifacts.path().join("vectorizer.json"), FIXTURE_VECTORIZER)
            .expect("write vectorizer fixture");
        std::fs::write(artifacts.path().join("classifier.json"), FIXTURE_CLASSIFIER)
            .expect("write classifier fixture");

        let config = ArtifactConfig {
            vectorizer_path: artifacts
                .path()
                .join("vectorizer.json")
                .display()
                .to_string(),
            classifier_path: artifacts
                .path()
                .join("classifier.json")
                .display()
                .to_string(),
        };
        let store = Arc::new(ArtifactStore::new(&config));
        store.load().expect("fixture artifacts must load");

        let db_url = format!("sqlite://{}", artifacts.path().join("history.db").display());
        let history = HistoryStore::connect(&db_url).await.expect("history store");

        let state = Arc::new(AppState::new(store, history));
        let app = build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("test server");
        });

        Self {
            base_url: format!("http://{}", addr),
            client: reqwest::Client::new(),
            artifacts,
        }
    }

    /// Path of the classifier artifact, for tests that swap it.
    pub fn classifier_path(&self) -> PathBuf {
        self.artifacts.path().join("classifier.json")
    }

    /// Wait until /health answers.
    pub async fn wait_until_healthy(&self) -> Result<(), String> {
        let url = format!("{}/health", self.base_url);
        let start = std::time::Instant::now();

        loop {
            if start.elapsed().as_secs() > 10 {
                return Err(format!("Timeout waiting for service: {}", url));
            }
            match self.client.get(&url).send().await {
                Ok(resp) if resp.status().is_success() => return Ok(()),
                _ => tokio::time::sleep(Duration::from_millis(100)).await,
            }
        }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("GET request")
    }

    pub async fn post(&self, path: &str, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .json(&body)
            .send()
            .await
            .expect("POST request")
    }

    /// POST /api/check and parse the JSON body.
    pub async fn check(&self, session_id: &str, message: &str) -> serde_json::Value {
        let resp = self
            .post(
                "/api/check",
                serde_json::json!({ "session_id": session_id, "message": message }),
            )
            .await;
        assert!(resp.status().is_success(), "check failed: {}", resp.status());
        resp.json().await.expect("check response body")
    }

    /// POST /api/ask and parse the JSON body.
    pub async fn ask(&self, session_id: &str, question: &str) -> serde_json::Value {
        let resp = self
            .post(
                "/api/ask",
                serde_json::json!({ "session_id": session_id, "question": question }),
            )
            .await;
        assert!(resp.status().is_success(), "ask failed: {}", resp.status());
        resp.json().await.expect("ask response body")
    }

    /// GET /api/history with optional extra query parameters.
    pub async fn history(&self, session_id: &str, extra: &str) -> serde_json::Value {
        let resp = self
            .get(&format!("/api/history?session_id={}{}", session_id, extra))
            .await;
        assert!(
            resp.status().is_success(),
            "history failed: {}",
            resp.status()
        );
        resp.json().await.expect("history response body")
    }
}

/// Test result helper
#[derive(Debug)]
pub struct TestResult {
    pub name: String,
    pub passed: bool,
    pub message: String,
    pub duration: Duration,
}

impl TestResult {
    pub fn success(name: String, duration: Duration) -> Self {
        Self {
            name,
            passed: true,
            message: "✅ Test passed".to_string(),
            duration,
        }
    }

    pub fn failure(name: String, message: String, duration: Duration) -> Self {
        Self {
            name,
            passed: false,
            message: format!("❌ Test failed: {}", message),
            duration,
        }
    }

    pub fn print(&self) {
        println!("\n{}", "=".repeat(80));
        println!("📝 Test: {}", self.name);
        println!("⏱️  Duration: {:?}", self.duration);
        println!("{}", self.message);
        println!("{}", "=".repeat(80));
    }
}

/// Generate a unique session id for a test run.
pub fn generate_session_id(prefix: &str) -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis();
    format!("{}_{}", prefix, timestamp)
}
