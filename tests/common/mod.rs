#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use serde_json::Value;
use storefront_api::{
    config::AppConfig,
    db,
    events::{self, EventSender},
    handlers::AppServices,
    mailer::{Mailer, MailerError, OutboundEmail},
    AppState,
};
use tempfile::TempDir;
use tokio::sync::mpsc;
use tower::ServiceExt;

/// Test double for the mail gateway. Records every attempt; flipping `fail`
/// makes subsequent sends error like an unreachable gateway.
#[derive(Default)]
pub struct TestMailer {
    fail: AtomicBool,
    attempts: Mutex<Vec<OutboundEmail>>,
    sent: Mutex<Vec<OutboundEmail>>,
}

impl TestMailer {
    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }

    /// Every send attempt, successful or not
    pub fn attempts(&self) -> Vec<OutboundEmail> {
        self.attempts.lock().unwrap().clone()
    }

    /// Successfully delivered emails
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.attempts.lock().unwrap().clear();
        self.sent.lock().unwrap().clear();
    }
}

#[async_trait]
impl Mailer for TestMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailerError> {
        self.attempts.lock().unwrap().push(email.clone());
        if self.fail.load(Ordering::SeqCst) {
            return Err(MailerError::Transport("connection refused".to_string()));
        }
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

/// Helper harness spinning up application state backed by a file-based
/// SQLite database in a temp directory.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub mailer: Arc<TestMailer>,
    _tmp: TempDir,
    _event_task: tokio::task::JoinHandle<()>,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let tmp = TempDir::new().expect("temp dir");
        let db_path = tmp.path().join("storefront_test.db");
        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

        let mut cfg = AppConfig::new(
            db_url,
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
            "owner@example.com".to_string(),
            "hello@example.com".to_string(),
            "noreply@example.com".to_string(),
        );
        cfg.whatsapp_number = "+1 (555) 010-7788".to_string();
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let db_pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("database should connect");
        db::run_migrations(&db_pool)
            .await
            .expect("migrations should apply");

        let db_arc = Arc::new(db_pool);

        let (event_tx, event_rx) = mpsc::channel(64);
        let event_sender = EventSender::new(event_tx);
        let event_task = tokio::spawn(events::process_events(event_rx));

        let mailer = Arc::new(TestMailer::default());

        let services = AppServices::new(
            db_arc.clone(),
            Arc::new(event_sender.clone()),
            mailer.clone(),
            &cfg,
        );

        let state = AppState {
            db: db_arc,
            config: cfg,
            event_sender,
            services,
        };

        let router = Router::new()
            .route("/", get(|| async { "storefront-api up" }))
            .nest("/api/v1", storefront_api::api_v1_routes())
            .with_state(state.clone());

        Self {
            router,
            state,
            mailer,
            _tmp: tmp,
            _event_task: event_task,
        }
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("request builds");
        self.send(request).await
    }

    pub async fn post_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds");
        self.send(request).await
    }

    pub async fn put_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("PUT")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request should complete");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should read");

        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::String(
                String::from_utf8_lossy(&bytes).to_string(),
            ))
        };

        (status, json)
    }
}
