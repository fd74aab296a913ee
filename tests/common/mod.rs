#![allow(dead_code)]

use std::path::Path;

use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use equip_ledger::api::ApiClient;
use equip_ledger::config::AppConfig;
use equip_ledger::session::{FileSessionStore, Session, SessionContext, SessionStore};

pub const TOKEN: &str = "valid-token";

/// Canned responses served by the fake ledger API
#[derive(Clone)]
pub struct Fixture {
    pub returned: (StatusCode, Value),
    pub borrowed: (StatusCode, Value),
    pub users: (StatusCode, Value),
    /// Served as a 200 `text/html` body in place of `returned` when set
    pub returned_raw: Option<&'static str>,
}

impl Default for Fixture {
    fn default() -> Self {
        Self {
            returned: (StatusCode::OK, json!({ "data": returned_rows() })),
            borrowed: (StatusCode::OK, json!({ "data": { "data": borrowed_rows() } })),
            users: (
                StatusCode::OK,
                json!({ "data": [
                    { "email": "a@example.com", "name": "Nguyen Van A" },
                    { "email": "b@example.com", "name": "Tran Thi B" },
                ] }),
            ),
            returned_raw: None,
        }
    }
}

pub fn returned_rows() -> Value {
    json!([
        ["Ngày trả", "Tên thiết bị", "Seri/SĐT", "Biển số xe", "Người trả", "Ghi chú"],
        ["01/02/2023", "Radio", "123", "29A-111", "Nguyen Van A", ""],
        ["15/01/2023", "Scanner abc", "45", "30B-222", "  Nguyen Van A  ", "spare"],
        ["20/01/2023", "Laptop", "abc", "31C-333", "Tran Thi B", ""],
    ])
}

pub fn borrowed_rows() -> Value {
    json!([
        ["Ngày mượn", "Tên thiết bị", "Seri/SĐT", "Biển số xe", "Người mượn", "Ghi chú"],
        ["03/03/2023", "Radio", "0901234567", "29A-111", "Nguyen Van A"],
    ])
}

pub struct FakeLedger {
    pub port: u16,
    pub server_url: String,
}

async fn serve(State(fixture): State<Fixture>, headers: HeaderMap, which: &str) -> Response {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", TOKEN))
        .unwrap_or(false);
    if !authorized {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "unauthorized" }))).into_response();
    }

    if let (true, Some(raw)) = (which == "returned", fixture.returned_raw) {
        return (StatusCode::OK, [(header::CONTENT_TYPE, "text/html")], raw).into_response();
    }

    let (status, body) = match which {
        "returned" => fixture.returned,
        "borrowed" => fixture.borrowed,
        _ => fixture.users,
    };
    (status, Json(body)).into_response()
}

async fn echo_auth(headers: HeaderMap) -> Json<Value> {
    let auth = headers.get("authorization").and_then(|v| v.to_str().ok()).map(str::to_string);
    Json(json!({ "data": auth }))
}

impl FakeLedger {
    pub async fn spawn(fixture: Fixture) -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let server_url = format!("http://127.0.0.1:{}", port);

        let app = Router::new()
            .route("/api/returned-items", get(|s: State<Fixture>, h: HeaderMap| serve(s, h, "returned")))
            .route("/api/borrowed-items", get(|s: State<Fixture>, h: HeaderMap| serve(s, h, "borrowed")))
            .route("/api/users", get(|s: State<Fixture>, h: HeaderMap| serve(s, h, "users")))
            .route("/api/echo-auth", get(echo_auth))
            .with_state(fixture);

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind fake ledger API")?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self { port, server_url })
    }
}

pub fn logged_in(dir: &Path, token: Option<&str>, name: Option<&str>) -> Result<()> {
    let store = FileSessionStore::new(dir);
    store.save(&Session {
        token: token.map(str::to_string),
        user_email: Some("a@example.com".to_string()),
        user_name: name.map(str::to_string),
        logged_in_at: None,
    })?;
    Ok(())
}

pub fn client_for(server_url: &str, dir: &Path) -> Result<ApiClient> {
    let config = AppConfig::development().with_base_url(server_url)?;
    let session = SessionContext::init(Box::new(FileSessionStore::new(dir)))?;
    Ok(ApiClient::new(&config.api, session)?)
}
