//! HTTP API client for the board server.
//!
//! ERROR HANDLING
//! ==============
//! Every method returns a typed error. One-shot commands propagate it to
//! `main` and exit nonzero; the session path logs and carries on without
//! retry, so all variants get the same best-effort treatment there.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use board::point::Point;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status} for {operation}")]
    Status { operation: &'static str, status: u16 },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Typed client for the three board endpoints plus the health check.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http: reqwest::Client::new(),
        }
    }

    /// `POST /board/add` — submit one point. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn add_point(&self, point: &Point) -> Result<(), ApiError> {
        let response = self.http.post(self.endpoint("/board/add")).json(point).send().await?;
        check_status("add point", &response)?;
        Ok(())
    }

    /// `GET /board/points` — the full board snapshot, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable payload.
    pub async fn fetch_points(&self) -> Result<Vec<Point>, ApiError> {
        let response = self.http.get(self.endpoint("/board/points")).send().await?;
        check_status("fetch points", &response)?;
        Ok(response.json::<Vec<Point>>().await?)
    }

    /// `DELETE /board/clear` — drop every point on the server.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn clear(&self) -> Result<(), ApiError> {
        let response = self.http.delete(self.endpoint("/board/clear")).send().await?;
        check_status("clear board", &response)?;
        Ok(())
    }

    /// `GET /healthz` — liveness probe.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn healthz(&self) -> Result<(), ApiError> {
        let response = self.http.get(self.endpoint("/healthz")).send().await?;
        check_status("health check", &response)?;
        Ok(())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn check_status(operation: &'static str, response: &reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status { operation, status: status.as_u16() })
    }
}
