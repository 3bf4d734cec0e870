//! Shared fakes for exercising notifiers without touching AWS.

use crate::core::NotifyError;
use crate::hostname::HostnameResolver;
use crate::notification::sns::SnsPublisher;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// One message captured by the [`RecordingPublisher`].
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedMessage {
    pub topic_arn: String,
    pub subject: String,
    pub message: String,
}

/// An in-memory publisher that records every publish it receives.
///
/// Clones share the same recording, so a test can hand one clone to a
/// notifier and inspect the other.
#[derive(Clone, Default)]
pub struct RecordingPublisher {
    published: Arc<Mutex<Vec<PublishedMessage>>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent publish fail with the given reason.
    pub fn fail_with(&self, reason: &str) {
        *self.failure.lock().unwrap() = Some(reason.to_string());
    }

    /// The messages published so far, in order.
    pub fn published(&self) -> Vec<PublishedMessage> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl SnsPublisher for RecordingPublisher {
    async fn publish(
        &self,
        topic_arn: &str,
        subject: &str,
        message: &str,
    ) -> Result<(), NotifyError> {
        if let Some(reason) = self.failure.lock().unwrap().clone() {
            return Err(NotifyError::Publish {
                topic: topic_arn.to_string(),
                source: reason.into(),
            });
        }
        self.published.lock().unwrap().push(PublishedMessage {
            topic_arn: topic_arn.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}

/// A resolver that always reports the wrapped host name.
pub struct FakeHostname(pub String);

impl HostnameResolver for FakeHostname {
    fn resolve(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// A resolver for hosts whose name cannot be determined.
pub struct NoHostname;

impl HostnameResolver for NoHostname {
    fn resolve(&self) -> Option<String> {
        None
    }
}
