//! Shared fixtures for the HTTP integration tests

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
    Router,
};
use serde_json::Value;
use tower::util::ServiceExt; // for oneshot

use users_api::api::{build_router, AppState};
use users_api::domain::repositories::{RepositoryError, UserRepository};
use users_api::domain::user::{User, UserPayload};

pub const BASE: &str = "/api/go";

/// Width of the `name` and `email` columns
pub const COLUMN_CHARS: usize = 100;

/// Mirrors PostgreSQL refusing a value too long for `VARCHAR(100)`
fn check_width(payload: &UserPayload) -> Result<(), RepositoryError> {
    for value in [&payload.name, &payload.email] {
        if value.chars().count() > COLUMN_CHARS {
            return Err(RepositoryError::Database(sqlx::Error::Protocol(
                "value too long for type character varying(100)".to_string(),
            )));
        }
    }
    Ok(())
}

#[derive(Default)]
struct Table {
    next_id: i32,
    rows: BTreeMap<i32, User>,
}

/// In-memory UserRepository with SERIAL-like id assignment
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: Mutex<Table>,
    calls: AtomicUsize,
}

impl InMemoryUserRepository {
    /// Number of repository calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        self.touch();
        let table = self.table.lock().unwrap();
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        self.touch();
        let table = self.table.lock().unwrap();
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, payload: UserPayload) -> Result<User, RepositoryError> {
        self.touch();
        check_width(&payload)?;
        let mut table = self.table.lock().unwrap();
        table.next_id += 1;
        let user = payload.into_user(table.next_id);
        table.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: i32, payload: UserPayload) -> Result<Option<User>, RepositoryError> {
        self.touch();
        let mut table = self.table.lock().unwrap();
        match table.rows.get_mut(&id) {
            Some(row) => {
                check_width(&payload)?;
                *row = payload.into_user(id);
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        self.touch();
        let mut table = self.table.lock().unwrap();
        Ok(table.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

/// UserRepository whose every call fails
pub struct FailingUserRepository;

fn failure() -> RepositoryError {
    RepositoryError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        Err(failure())
    }

    async fn find_by_id(&self, _id: i32) -> Result<Option<User>, RepositoryError> {
        Err(failure())
    }

    async fn create(&self, _payload: UserPayload) -> Result<User, RepositoryError> {
        Err(failure())
    }

    async fn update(&self, _id: i32, _payload: UserPayload) -> Result<Option<User>, RepositoryError> {
        Err(failure())
    }

    async fn delete(&self, _id: i32) -> Result<bool, RepositoryError> {
        Err(failure())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Err(failure())
    }
}

/// Router over a fresh in-memory repository
pub fn setup_app() -> (Router, Arc<InMemoryUserRepository>) {
    let repo = Arc::new(InMemoryUserRepository::default());
    let app = build_router(AppState::new(repo.clone()), BASE);
    (app, repo)
}

/// Router whose storage always fails
pub fn setup_failing_app() -> Router {
    build_router(AppState::new(Arc::new(FailingUserRepository)), BASE)
}

pub async fn send(
    app: &Router,
    method: &str,
    path: &str,
    body: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(format!("{}{}", BASE, path));
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

/// Sends a request and returns status plus the decoded JSON body
/// (`Value::Null` for an empty body)
pub async fn send_json(
    app: &Router,
    method: &str,
    path: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let response = send(app, method, path, body).await;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
