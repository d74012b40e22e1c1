//! Shared utilities for integration testing: a programmable mock maze service.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use blind_maze_solver::config::SolverConfig;

pub const MAZE_ID: &str = "maze-17";

/// Behaviour and call counters of the mock service.
#[derive(Default)]
pub struct MockMaze {
    rows: Vec<String>,
    /// Statuses returned by successive create calls; 201 once drained.
    create_script: Mutex<VecDeque<u16>>,
    /// Statuses returned by successive submit calls; 200 once drained.
    submit_script: Mutex<VecDeque<u16>>,
    /// Statuses returned by successive check calls before the grid answers.
    check_script: Mutex<VecDeque<u16>>,
    /// Body returned for every legal cell instead of the echo.
    echo_override: Option<String>,
    /// Body returned for one legal cell instead of its echo.
    echo_at: HashMap<(i64, i64), String>,
    /// Dimensions reported by create instead of the grid's.
    dimensions_override: Option<(i64, i64)>,

    pub create_calls: AtomicUsize,
    pub check_calls: AtomicUsize,
    pub submit_calls: AtomicUsize,
    pub submissions: Mutex<Vec<Value>>,
    pub auth_headers: Mutex<Vec<String>>,
}

impl MockMaze {
    /// Grid rows: `.` open, `#` wall (403), `!` server error (500).
    pub fn new(rows: &[&str]) -> Self {
        Self {
            rows: rows.iter().map(|r| r.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn with_create_script(self, statuses: &[u16]) -> Self {
        *self.create_script.lock().unwrap() = statuses.iter().copied().collect();
        self
    }

    pub fn with_submit_script(self, statuses: &[u16]) -> Self {
        *self.submit_script.lock().unwrap() = statuses.iter().copied().collect();
        self
    }

    pub fn with_check_script(self, statuses: &[u16]) -> Self {
        *self.check_script.lock().unwrap() = statuses.iter().copied().collect();
        self
    }

    pub fn with_echo(mut self, body: &str) -> Self {
        self.echo_override = Some(body.to_string());
        self
    }

    pub fn with_echo_at(mut self, x: i64, y: i64, body: &str) -> Self {
        self.echo_at.insert((x, y), body.to_string());
        self
    }

    pub fn with_dimensions(mut self, height: i64, width: i64) -> Self {
        self.dimensions_override = Some((height, width));
        self
    }

    pub fn creates(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn checks(&self) -> usize {
        self.check_calls.load(Ordering::SeqCst)
    }

    pub fn submits(&self) -> usize {
        self.submit_calls.load(Ordering::SeqCst)
    }

    pub fn last_submission(&self) -> Option<Value> {
        self.submissions.lock().unwrap().last().cloned()
    }

    fn dimensions(&self) -> (i64, i64) {
        self.dimensions_override.unwrap_or_else(|| {
            let height = self.rows.len() as i64;
            let width = self.rows.first().map_or(0, |r| r.chars().count()) as i64;
            (height, width)
        })
    }

    fn tile(&self, x: i64, y: i64) -> Option<char> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.rows.get(y)?.chars().nth(x)
    }
}

/// A running mock service.
pub struct MockServer {
    pub addr: SocketAddr,
    pub maze: Arc<MockMaze>,
}

impl MockServer {
    pub fn base_url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Solver configuration pointed at this server.
    pub fn config(&self) -> SolverConfig {
        let mut config = SolverConfig::default();
        config.api.base_url = self.base_url();
        config.api.request_timeout_secs = 5;
        config
    }
}

#[derive(Deserialize)]
struct CheckQuery {
    x: i64,
    y: i64,
}

fn status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap()
}

fn record_auth(maze: &MockMaze, headers: &axum::http::HeaderMap) {
    if let Some(value) = headers.get("authorization").and_then(|v| v.to_str().ok()) {
        maze.auth_headers.lock().unwrap().push(value.to_string());
    }
}

async fn create(State(maze): State<Arc<MockMaze>>, headers: axum::http::HeaderMap) -> Response {
    maze.create_calls.fetch_add(1, Ordering::SeqCst);
    record_auth(&maze, &headers);

    let code = maze.create_script.lock().unwrap().pop_front().unwrap_or(201);
    if code != 201 {
        return (status(code), "unavailable").into_response();
    }

    let (height, width) = maze.dimensions();
    (
        StatusCode::CREATED,
        Json(json!({ "id": MAZE_ID, "height": height, "width": width })),
    )
        .into_response()
}

async fn check(
    State(maze): State<Arc<MockMaze>>,
    Path(id): Path<String>,
    Query(q): Query<CheckQuery>,
) -> Response {
    maze.check_calls.fetch_add(1, Ordering::SeqCst);

    if id != MAZE_ID {
        return (StatusCode::NOT_FOUND, "no such maze").into_response();
    }
    if let Some(code) = maze.check_script.lock().unwrap().pop_front() {
        return (status(code), "scripted").into_response();
    }

    match maze.tile(q.x, q.y) {
        Some('.') => {
            let body = maze
                .echo_at
                .get(&(q.x, q.y))
                .or(maze.echo_override.as_ref())
                .cloned()
                .unwrap_or_else(|| format!("Position: {}, {}", q.x, q.y));
            (StatusCode::OK, body).into_response()
        }
        Some('!') => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        _ => (StatusCode::FORBIDDEN, "wall").into_response(),
    }
}

async fn solve(
    State(maze): State<Arc<MockMaze>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    maze.submit_calls.fetch_add(1, Ordering::SeqCst);
    maze.submissions.lock().unwrap().push(body);

    if id != MAZE_ID {
        return (StatusCode::NOT_FOUND, "no such maze").into_response();
    }
    let code = maze.submit_script.lock().unwrap().pop_front().unwrap_or(200);
    (status(code), "").into_response()
}

/// Start the mock service on an ephemeral port.
pub async fn start_mock_maze(maze: MockMaze) -> MockServer {
    let maze = Arc::new(maze);
    let app = Router::new()
        .route("/", post(create))
        .route("/{id}/check", get(check))
        .route("/{id}/solve", post(solve))
        .with_state(maze.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockServer { addr, maze }
}
