//! # In-Memory Rate Transport
//!
//! Replays canned responses for testing.
//!
//! Replies are served in the order they were queued, one per `fetch`, and
//! every requested URL is recorded. Once the queue is empty further fetches
//! fail with a connection error.

use crate::infrastructure::transport::error::{TransportError, TransportResult};
use crate::infrastructure::transport::traits::RateTransport;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory implementation of [`RateTransport`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryTransport {
    replies: Arc<Mutex<VecDeque<TransportResult<String>>>>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl InMemoryTransport {
    /// Creates a transport with no queued replies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport that answers with the given bodies in order.
    #[must_use]
    pub fn with_bodies<I, S>(bodies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let replies = bodies.into_iter().map(|body| Ok(body.into())).collect();
        Self {
            replies: Arc::new(Mutex::new(replies)),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a successful body.
    pub async fn push_body(&self, body: impl Into<String>) {
        self.replies.lock().await.push_back(Ok(body.into()));
    }

    /// Queues a transport failure.
    pub async fn push_error(&self, error: TransportError) {
        self.replies.lock().await.push_back(Err(error));
    }

    /// Returns every URL fetched so far, in order.
    pub async fn requested_urls(&self) -> Vec<String> {
        self.requested.lock().await.clone()
    }

    /// Returns the number of replies not yet served.
    pub async fn remaining(&self) -> usize {
        self.replies.lock().await.len()
    }
}

#[async_trait]
impl RateTransport for InMemoryTransport {
    async fn fetch(&self, url: &str) -> TransportResult<String> {
        self.requested.lock().await.push(url.to_string());
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::connection("no canned response queued")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_in_order_and_records_urls() {
        let transport = InMemoryTransport::with_bodies(["first", "second"]);

        assert_eq!(transport.fetch("http://a").await.unwrap(), "first");
        assert_eq!(transport.fetch("http://b").await.unwrap(), "second");
        assert_eq!(transport.requested_urls().await, ["http://a", "http://b"]);
        assert_eq!(transport.remaining().await, 0);
    }

    #[tokio::test]
    async fn empty_queue_fails() {
        let transport = InMemoryTransport::new();
        let error = transport.fetch("http://a").await.unwrap_err();
        assert!(matches!(error, TransportError::Connection { .. }));
    }

    #[tokio::test]
    async fn queued_errors_are_returned() {
        let transport = InMemoryTransport::new();
        transport.push_error(TransportError::timeout("slow")).await;
        transport.push_body("{}").await;

        assert!(transport.fetch("http://a").await.is_err());
        assert_eq!(transport.fetch("http://b").await.unwrap(), "{}");
    }
}
