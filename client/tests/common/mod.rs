//! In-process mock of the remote user collection.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use reqwest::Url;
use serde_json::{json, Value};

pub const CREATED_AT: &str = "2025-10-30T08:12:00.000Z";

/// A request as the mock saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct Seen {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
pub struct MockState {
    pub records: Vec<Value>,
    pub next_id: u64,
    pub seen: Vec<Seen>,
    /// Replaces the list response when set
    pub list_override: Option<(StatusCode, String)>,
    /// Status returned by every write when set
    pub fail_writes: Option<StatusCode>,
    /// How many writes may still fail; unlimited when unset
    pub failures_left: Option<usize>,
    pub list_delay: Option<Duration>,
}

type Shared = Arc<Mutex<MockState>>;

/// A running mock server.
pub struct MockCollection {
    pub addr: SocketAddr,
    pub state: Shared,
}

impl MockCollection {
    /// Start a server holding `names` as records with ids 1..=n.
    pub async fn start(names: &[&str]) -> Self {
        let records: Vec<Value> = names
            .iter()
            .enumerate()
            .map(|(i, name)| record(&(i + 1).to_string(), name))
            .collect();
        let state = Arc::new(Mutex::new(MockState {
            next_id: records.len() as u64 + 1,
            records,
            ..Default::default()
        }));

        let app = Router::new()
            .route("/users", get(list_users).post(create_user))
            .route("/users/{id}", put(update_user).delete(delete_user))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn url(&self) -> Url {
        Url::parse(&format!("http://{}/users", self.addr)).unwrap()
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.state.lock().unwrap().seen.clone()
    }

    pub fn clear_seen(&self) {
        self.state.lock().unwrap().seen.clear();
    }

    pub fn names(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .records
            .iter()
            .map(|r| r["name"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    pub fn override_list(&self, status: StatusCode, body: &str) {
        self.state.lock().unwrap().list_override = Some((status, body.to_string()));
    }

    pub fn fail_writes(&self, status: Option<StatusCode>) {
        let mut s = self.state.lock().unwrap();
        s.fail_writes = status;
        s.failures_left = None;
    }

    /// Fail the next `count` writes with `status`, then accept writes again.
    pub fn fail_next_writes(&self, status: StatusCode, count: usize) {
        let mut s = self.state.lock().unwrap();
        s.fail_writes = Some(status);
        s.failures_left = Some(count);
    }

    pub fn delay_list(&self, delay: Duration) {
        self.state.lock().unwrap().list_delay = Some(delay);
    }
}

pub fn record(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "phone": "555-0100",
        "department": "Engineering",
        "createdAt": CREATED_AT,
    })
}

fn write_failure(s: &mut MockState) -> Option<StatusCode> {
    let status = s.fail_writes?;
    if let Some(left) = s.failures_left.as_mut() {
        if *left == 0 {
            return None;
        }
        *left -= 1;
    }
    Some(status)
}

fn merge_fields(target: &mut Value, body: &Value) {
    for key in ["name", "email", "phone", "department"] {
        if let Some(v) = body.get(key) {
            target[key] = v.clone();
        }
    }
}

async fn list_users(State(state): State<Shared>) -> Response {
    let delay = {
        let mut s = state.lock().unwrap();
        s.seen.push(Seen {
            method: "GET",
            path: "/users".into(),
            body: None,
        });
        s.list_delay
    };
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let s = state.lock().unwrap();
    match &s.list_override {
        Some((status, body)) => (*status, body.clone()).into_response(),
        None => Json(Value::Array(s.records.clone())).into_response(),
    }
}

async fn create_user(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut s = state.lock().unwrap();
    s.seen.push(Seen {
        method: "POST",
        path: "/users".into(),
        body: Some(body.clone()),
    });
    if let Some(status) = write_failure(&mut s) {
        return status.into_response();
    }

    let id = s.next_id.to_string();
    s.next_id += 1;
    let mut created = record(&id, "");
    merge_fields(&mut created, &body);
    s.records.push(created.clone());
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn update_user(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut s = state.lock().unwrap();
    s.seen.push(Seen {
        method: "PUT",
        path: format!("/users/{id}"),
        body: Some(body.clone()),
    });
    if let Some(status) = write_failure(&mut s) {
        return status.into_response();
    }

    match s.records.iter_mut().find(|r| r["id"] == id.as_str()) {
        Some(target) => {
            merge_fields(target, &body);
            Json(target.clone()).into_response()
        }
        None => (StatusCode::NOT_FOUND, "\"Not found\"").into_response(),
    }
}

async fn delete_user(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let mut s = state.lock().unwrap();
    s.seen.push(Seen {
        method: "DELETE",
        path: format!("/users/{id}"),
        body: None,
    });
    if let Some(status) = write_failure(&mut s) {
        return status.into_response();
    }

    match s.records.iter().position(|r| r["id"] == id.as_str()) {
        Some(index) => Json(s.records.remove(index)).into_response(),
        None => (StatusCode::NOT_FOUND, "\"Not found\"").into_response(),
    }
}
