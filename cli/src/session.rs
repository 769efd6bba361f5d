//! The synchronized board session.
//!
//! DESIGN
//! ======
//! `BoardSession` is the host runtime for [`board::client::BoardClient`]: it
//! owns the client and the API handle, and maps the client's optimistic
//! mutations onto best-effort network calls. The session holds the client
//! `&mut`, so drag, poll, and clear handlers execute one at a time; only the
//! submission futures overlap, and those never touch client state.
//!
//! ERROR HANDLING
//! ==============
//! Network failures on the session path are logged to stderr and otherwise
//! ignored: no retry, no backoff, no rollback of optimistic appends. A lost
//! call leaves local and remote views diverged until the next successful poll
//! overwrites the local one.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::time::Duration;

use board::client::BoardClient;
use board::point::Point;
use tokio::task::JoinHandle;

use crate::api::ApiClient;

/// Fixed period of the recurring board refresh. Nothing in the session ever
/// cancels or coalesces it.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

pub struct BoardSession {
    client: BoardClient,
    api: ApiClient,
}

impl BoardSession {
    /// Create a session with an empty board and a fresh user color.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { client: BoardClient::new(), api }
    }

    /// The owned board client.
    #[must_use]
    pub fn client(&self) -> &BoardClient {
        &self.client
    }

    /// Initial fetch. A failure is logged and leaves the board empty; the
    /// recurring poll catches up once the server is reachable.
    pub async fn initialize(&mut self) {
        self.refresh_points().await;
    }

    /// Drag gesture at `(x, y)`: optimistic local append, then fire-and-forget
    /// submission of the new point.
    pub fn on_drag(&mut self, x: f64, y: f64) -> JoinHandle<bool> {
        let point = self.client.on_drag(x, y);
        self.submit_point(point)
    }

    /// Submit one point on a spawned task. On failure, one error line goes to
    /// stderr and the point is not retried; the optimistic append stands.
    ///
    /// The handle is returned so short-lived hosts can await delivery before
    /// exiting; the long-running session never does.
    pub fn submit_point(&self, point: Point) -> JoinHandle<bool> {
        let api = self.api.clone();
        tokio::spawn(async move {
            match api.add_point(&point).await {
                Ok(()) => true,
                Err(error) => {
                    eprintln!("error submitting point: {error}");
                    false
                }
            }
        })
    }

    /// Fetch the board and replace the local collection wholesale. On failure
    /// the previous collection stays untouched.
    pub async fn refresh_points(&mut self) {
        match self.api.fetch_points().await {
            Ok(points) => self.client.apply_snapshot(points),
            Err(error) => eprintln!("error loading points: {error}"),
        }
    }

    /// Clear the server board, then the local one. On failure the local
    /// points stay visible, stale until the next poll.
    pub async fn clear_all(&mut self) {
        match self.api.clear().await {
            Ok(()) => self.client.apply_clear(),
            Err(error) => eprintln!("error clearing board: {error}"),
        }
    }

    /// Simulate a held-pointer drag from `from` to `to`: feed `steps` evenly
    /// interpolated positions through the client one at a time, submitting
    /// each resulting point. Returns how many submissions the server took.
    #[allow(clippy::cast_precision_loss)]
    pub async fn drag_stroke(&mut self, from: (f64, f64), to: (f64, f64), steps: usize) -> usize {
        let mut submissions = Vec::with_capacity(steps);
        for i in 0..steps {
            let t = if steps <= 1 { 0.0 } else { i as f64 / (steps - 1) as f64 };
            let x = from.0 + (to.0 - from.0) * t;
            let y = from.1 + (to.1 - from.1) * t;
            submissions.push(self.on_drag(x, y));
        }

        let mut submitted = 0;
        for handle in submissions {
            if handle.await.unwrap_or(false) {
                submitted += 1;
            }
        }
        submitted
    }
}
