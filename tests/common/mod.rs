//! Helpers for integration tests.

use std::sync::Mutex;

use async_trait::async_trait;

use uptube::publisher::{
    MediaSource, PublishError, PublishReceipt, PublishRequest, PublishResult, VideoPublisher,
};

/// Publisher double that records every request and answers with a fixed
/// receipt.
#[derive(Default)]
pub struct RecordingPublisher {
    requests: Mutex<Vec<(PublishRequest, MediaSource)>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<(PublishRequest, MediaSource)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait(?Send)]
impl VideoPublisher for RecordingPublisher {
    async fn publish(
        &self,
        request: &PublishRequest,
        media: &MediaSource,
    ) -> PublishResult<PublishReceipt> {
        self.requests
            .lock()
            .unwrap()
            .push((request.clone(), media.clone()));
        Ok(PublishReceipt {
            external_id: "vid123".to_string(),
            external_url: "https://www.youtube.com/watch?v=vid123".to_string(),
        })
    }
}

/// Publisher double that always fails with the configured error.
pub struct FailingPublisher {
    pub error: PublishError,
}

#[async_trait(?Send)]
impl VideoPublisher for FailingPublisher {
    async fn publish(
        &self,
        _request: &PublishRequest,
        _media: &MediaSource,
    ) -> PublishResult<PublishReceipt> {
        Err(self.error.clone())
    }
}
