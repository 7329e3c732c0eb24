use std::{net::TcpListener, sync::Arc, time::Duration};

use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use async_trait::async_trait;
use parking_lot::Mutex;
use portfolio_contact::{
    notify::{NotificationMessage, Notifier},
    routes::configure_routes,
    settings::{AppConfig, AppEnvironment},
    AppState,
};
use reqwest::Client;
use serde_json::json;

/// Test notifier that records every dispatched message.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<NotificationMessage>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, message: &NotificationMessage) -> anyhow::Result<()> {
        self.sent.lock().push(message.clone());
        Ok(())
    }
}

pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_limit(5).await
    }

    pub async fn spawn_with_limit(limit: u32) -> Self {
        let mut config = test_config();
        config.rate_limit_max_requests = limit;

        let notifier = Arc::new(RecordingNotifier::default());
        let dyn_notifier: Arc<dyn Notifier> = notifier.clone();
        let state = web::Data::new(AppState::with_notifier(&config, dyn_notifier));

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .wrap(NormalizePath::trim())
                .configure(configure_routes)
        })
        .listen(listener)
        .expect("Failed to bind server")
        .workers(1)
        .run();

        tokio::spawn(server);

        let client = Client::new();
        while client.get(format!("{}/health", address)).send().await.is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        Self {
            address,
            client,
            notifier,
        }
    }

    pub async fn post_contact(&self, ip: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/contact", self.address))
            .header("x-forwarded-for", ip)
            .header("user-agent", "test-agent")
            .json(body)
            .send()
            .await
            .expect("Failed to post contact form")
    }

    pub async fn post_contact_raw(&self, ip: &str, body: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/api/contact", self.address))
            .header("x-forwarded-for", ip)
            .header("user-agent", "test-agent")
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("Failed to post contact form")
    }

    pub fn sent_notifications(&self) -> Vec<NotificationMessage> {
        self.notifier.sent.lock().clone()
    }
}

pub fn valid_submission() -> serde_json::Value {
    json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "budget": "$1k-$5k",
        "message": "I would like to discuss a project with you.",
        "website": ""
    })
}

fn test_config() -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Portfolio Contact Test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        worker_count: 1,
        cors_allowed_origins: vec!["*".to_string()],
        rate_limit_max_requests: 5,
        rate_limit_window_secs: 600,
        sweep_interval_secs: 60,
        notify_sender: "no-reply@example.com".to_string(),
        notify_recipient: "hello@example.com".to_string(),
    }
}
