//! Integration test harness for OTT Hub.
//!
//! Every [`TestApp`] runs the real storefront router on an ephemeral local
//! port with its own catalog, and talks to it through a `reqwest` client
//! with a cookie store, so each `TestApp` is one visitor session.
//!
//! Payment notifications go to a [`FakeTelegram`] server that records every
//! `sendMessage` body it receives.
//!
//! # Example
//!
//! ```rust,ignore
//! #[tokio::test]
//! async fn test_health() {
//!     let app = TestApp::spawn().await;
//!     let resp = app.get("/health").await;
//!     assert_eq!(resp.status(), 200);
//! }
//! ```

#![allow(clippy::missing_panics_doc)]

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex, PoisonError};

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use reqwest::{Client, Response, redirect::Policy};
use secrecy::SecretString;
use serde_json::Value;

use otthub_storefront::config::{AdminCredentials, AppEnvironment, StorefrontConfig, TelegramConfig};
use otthub_storefront::state::AppState;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "test-admin-password";
pub const CHAT_ID: &str = "4242";
const BOT_TOKEN: &str = "123456:test-bot-token";

/// How the fake Telegram server answers `sendMessage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelegramBehavior {
    Accept,
    Reject,
}

/// Recording stand-in for the Telegram Bot API.
#[derive(Clone)]
pub struct FakeTelegram {
    pub base_url: String,
    messages: Arc<Mutex<Vec<Value>>>,
}

#[derive(Clone)]
struct FakeTelegramState {
    behavior: TelegramBehavior,
    messages: Arc<Mutex<Vec<Value>>>,
}

impl FakeTelegram {
    /// Start the fake API on an ephemeral port.
    pub async fn spawn(behavior: TelegramBehavior) -> Self {
        let messages = Arc::new(Mutex::new(Vec::new()));
        let state = FakeTelegramState {
            behavior,
            messages: Arc::clone(&messages),
        };

        let router = Router::new()
            .route("/{bot}/sendMessage", post(send_message))
            .with_state(state);

        let addr = serve(router).await;
        Self {
            base_url: format!("http://{addr}"),
            messages,
        }
    }

    /// Every `sendMessage` body received so far.
    pub fn messages(&self) -> Vec<Value> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

async fn send_message(
    State(state): State<FakeTelegramState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state
        .messages
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(body);

    match state.behavior {
        TelegramBehavior::Accept => (StatusCode::OK, Json(serde_json::json!({ "ok": true }))),
        TelegramBehavior::Reject => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "ok": false, "description": "Bad Request: chat not found" })),
        ),
    }
}

/// Bind `router` to an ephemeral local port and serve it in the background.
async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });
    addr
}

/// Development-mode configuration pointing notifications at `telegram`.
pub fn test_config(telegram: Option<&FakeTelegram>) -> StorefrontConfig {
    StorefrontConfig {
        environment: AppEnvironment::Development,
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        session_secret: SecretString::from("integration-test-session-secret-0123456789abcdef"),
        admin: AdminCredentials {
            username: ADMIN_USER.to_string(),
            password: SecretString::from(ADMIN_PASS),
        },
        telegram: telegram.map(|fake| TelegramConfig {
            api_base: fake.base_url.clone(),
            bot_token: SecretString::from(BOT_TOKEN),
            chat_id: CHAT_ID.to_string(),
        }),
        sentry_dsn: None,
    }
}

/// A running storefront plus one visitor's HTTP client.
pub struct TestApp {
    pub base_url: String,
    pub client: Client,
    pub state: AppState,
}

impl TestApp {
    /// Storefront with notifications disabled.
    pub async fn spawn() -> Self {
        Self::spawn_with_config(test_config(None)).await
    }

    /// Storefront that notifies `telegram`.
    pub async fn spawn_with_telegram(telegram: &FakeTelegram) -> Self {
        Self::spawn_with_config(test_config(Some(telegram))).await
    }

    pub async fn spawn_with_config(config: StorefrontConfig) -> Self {
        let state = AppState::new(config).expect("build app state");
        let addr = serve(otthub_storefront::app(state.clone())).await;

        Self {
            base_url: format!("http://{addr}"),
            client: visitor_client(),
            state,
        }
    }

    /// Another visitor of the same running storefront, with an empty cookie jar.
    pub fn new_visitor(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: visitor_client(),
            state: self.state.clone(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET without following redirects.
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request")
    }

    /// POST a urlencoded form without following redirects.
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST request")
    }

    /// GET a page and return its body.
    pub async fn page(&self, path: &str) -> String {
        self.get(path).await.text().await.expect("response body")
    }

    pub async fn login_admin(&self) -> Response {
        self.post_form("/admin", &[("username", ADMIN_USER), ("password", ADMIN_PASS)])
            .await
    }
}

fn visitor_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(Policy::none())
        .build()
        .expect("build reqwest client")
}

/// `Location` header of a redirect response.
pub fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|value| value.to_str().ok())
}
