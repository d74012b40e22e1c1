//! HTTP client for the maze service.
//!
//! # Responsibilities
//! - Build per-maze endpoint URLs relative to the base endpoint
//! - Attach the credential pair to every request
//! - Classify each response by status for the operation that issued it
//!
//! One method call is one HTTP exchange; retrying is the caller's concern.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use url::Url;

use crate::client::error::ApiError;
use crate::config::{ApiConfig, CredentialsConfig};
use crate::error::operation;
use crate::maze::types::{MazeDescriptor, MazeId, MazePath, Position};
use crate::observability::metrics;

/// Answer to a move check that is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckReply {
    /// 200 with the body the service returned.
    Open(String),
    /// 403: the cell is a wall.
    Forbidden,
}

/// Answer to a submission that is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitReply {
    Accepted,
    /// 422: the service judged the path wrong.
    Rejected,
}

/// Maze service client.
#[derive(Clone)]
pub struct MazeApiClient {
    http: Client,
    base_url: Url,
    credentials: CredentialsConfig,
    transient_status: StatusCode,
}

impl MazeApiClient {
    /// Create a client for `config.base_url`.
    pub fn new(
        config: &ApiConfig,
        credentials: CredentialsConfig,
        transient_status: u16,
    ) -> Result<Self, ApiError> {
        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        let http = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        let transient_status = StatusCode::from_u16(transient_status)
            .map_err(|_| ApiError::Status(transient_status))?;

        tracing::debug!(base_url = %base_url, "Maze API client initialized");

        Ok(Self {
            http,
            base_url,
            credentials,
            transient_status,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// POST to the base endpoint; 201 carries the new maze.
    pub async fn create_maze(&self) -> Result<MazeDescriptor, ApiError> {
        let resp = self
            .http
            .post(self.base_url.clone())
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .send()
            .await?;
        let status = self.observe(operation::CREATE_MAZE, &resp);

        match status {
            StatusCode::CREATED => {
                let text = resp.text().await?;
                serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
            }
            s => Err(self.classify(s)),
        }
    }

    /// GET `{base}/{id}/check?x=..&y=..`.
    pub async fn check_position(&self, id: &MazeId, pos: Position) -> Result<CheckReply, ApiError> {
        let url = self.maze_endpoint(id, "check")?;
        let resp = self
            .http
            .get(url)
            .query(&[("x", pos.x), ("y", pos.y)])
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .send()
            .await?;
        let status = self.observe(operation::CHECK_MOVE, &resp);

        match status {
            StatusCode::OK => Ok(CheckReply::Open(resp.text().await?)),
            StatusCode::FORBIDDEN => Ok(CheckReply::Forbidden),
            s => Err(self.classify(s)),
        }
    }

    /// POST `{base}/{id}/solve` with the path as a JSON array of `{x, y}`.
    pub async fn submit_solution(&self, id: &MazeId, path: &MazePath) -> Result<SubmitReply, ApiError> {
        let url = self.maze_endpoint(id, "solve")?;
        let resp = self
            .http
            .post(url)
            .json(path)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .send()
            .await?;
        let status = self.observe(operation::SUBMIT_SOLUTION, &resp);

        match status {
            StatusCode::OK => Ok(SubmitReply::Accepted),
            StatusCode::UNPROCESSABLE_ENTITY => Ok(SubmitReply::Rejected),
            s => Err(self.classify(s)),
        }
    }

    /// `{base}/{id}/{action}` with the id percent-encoded as one path segment.
    ///
    /// Empty and dot-segment ids are refused: URL normalization would fold
    /// them into the surrounding path.
    fn maze_endpoint(&self, id: &MazeId, action: &str) -> Result<Url, ApiError> {
        if matches!(id.as_str(), "" | "." | "..") {
            return Err(ApiError::UnroutableId(id.to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::UnroutableId(id.to_string()))?
            .pop_if_empty()
            .push(id.as_str())
            .push(action);
        Ok(url)
    }

    fn observe(&self, operation: &'static str, resp: &Response) -> StatusCode {
        let status = resp.status();
        tracing::debug!(operation, status = status.as_u16(), url = %resp.url(), "Maze API response");
        metrics::record_request(operation, status.as_u16());
        status
    }

    fn classify(&self, status: StatusCode) -> ApiError {
        if status == self.transient_status {
            ApiError::Transient(status.as_u16())
        } else {
            ApiError::Status(status.as_u16())
        }
    }
}
