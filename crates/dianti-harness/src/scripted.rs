//! Scripted stand-in for the HTTP transport.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, PoisonError},
};

use dianti_client::{Transport, TransportError};
use dianti_proto::{ApiRequest, StateResponse};

/// Transport double answering from a canned response queue.
///
/// Clones share the queue and the request log, so a test hands one clone
/// to the session and keeps another for assertions. An exchange past the
/// end of the script fails with [`TransportError::Exhausted`], which is
/// also how tests simulate a fatal transport failure mid-run.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    responses: Mutex<VecDeque<StateResponse>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    /// Empty script; queue responses with [`ScriptedTransport::push`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Script answering with the given responses, in order.
    pub fn with_responses(responses: impl IntoIterator<Item = StateResponse>) -> Self {
        let transport = Self::new();
        for response in responses {
            transport.push(response);
        }
        transport
    }

    /// Queue one more response.
    pub fn push(&self, response: StateResponse) {
        self.inner
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
    }

    /// Every request exchanged so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.inner.requests.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Number of exchanges performed.
    pub fn exchanges(&self) -> usize {
        self.inner.requests.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Transport for ScriptedTransport {
    async fn exchange(&self, request: ApiRequest) -> Result<StateResponse, TransportError> {
        self.inner.requests.lock().unwrap_or_else(PoisonError::into_inner).push(request);

        self.inner
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .ok_or_else(|| TransportError::Exhausted { reason: "script ran dry".to_owned() })
    }
}
