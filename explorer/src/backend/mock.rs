//! Mock directory backend for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use super::traits::*;

/// What the mock answers with.
#[derive(Debug, Clone)]
enum Behavior {
    Respond(Vec<RemoteInstitution>),
    Timeout,
    Status(u16),
    Unavailable,
}

/// Mock backend for testing.
///
/// Answers every query the same way and counts calls.
pub struct MockBackend {
    behavior: Behavior,
    call_count: AtomicU32,
    last_query: Mutex<Option<RemoteQuery>>,
}

impl MockBackend {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            call_count: AtomicU32::new(0),
            last_query: Mutex::new(None),
        }
    }

    /// Answer with these institutions.
    pub fn responding(institutions: Vec<RemoteInstitution>) -> Self {
        Self::with_behavior(Behavior::Respond(institutions))
    }

    /// Answer successfully with an empty list.
    pub fn empty() -> Self {
        Self::responding(Vec::new())
    }

    /// Fail as if the request timed out.
    pub fn timing_out() -> Self {
        Self::with_behavior(Behavior::Timeout)
    }

    /// Fail with an HTTP status.
    pub fn failing_with_status(status: u16) -> Self {
        Self::with_behavior(Behavior::Status(status))
    }

    /// Fail as if the backend were switched off.
    pub fn unavailable() -> Self {
        Self::with_behavior(Behavior::Unavailable)
    }

    /// Get the number of times search was called.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Most recent query seen.
    pub fn last_query(&self) -> Option<RemoteQuery> {
        self.last_query.lock().ok().and_then(|q| q.clone())
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::empty()
    }
}

#[async_trait]
impl DirectoryBackend for MockBackend {
    fn id(&self) -> &str {
        "mock"
    }

    async fn search(&self, query: &RemoteQuery) -> Result<Vec<RemoteInstitution>, BackendError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_query.lock() {
            *last = Some(query.clone());
        }

        match &self.behavior {
            Behavior::Respond(institutions) => Ok(institutions.clone()),
            Behavior::Timeout => Err(BackendError::Timeout(format!(
                "mock timeout for {}",
                query.text()
            ))),
            Behavior::Status(status) => Err(BackendError::Status {
                status: *status,
                body: "mock failure".to_string(),
            }),
            Behavior::Unavailable => Err(BackendError::Unavailable("Mock backend disabled".to_string())),
        }
    }
}
