use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value as Json;

use schemata_athena::{Transport, TransportError, WireRequest};

/// Transport that answers from a queue and keeps every request it saw.
#[derive(Default)]
pub struct RecordingTransport {
    replies: Mutex<VecDeque<Result<Json, TransportError>>>,
    requests: Mutex<Vec<WireRequest>>,
}

impl RecordingTransport {
    pub fn replying(replies: impl IntoIterator<Item = Result<Json, TransportError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<WireRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn invoke(&self, request: WireRequest) -> Result<Json, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Connection("no reply queued".into())))
    }
}
