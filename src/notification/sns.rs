//! A notifier that publishes error occurrences to an AWS SNS topic.

use crate::config::SnsConfig;
use crate::core::{ErrorEvent, Notifier, NotifyError, RequestContext};
use crate::formatting::{compose_body, compose_subject};
use crate::hostname::{HostnameResolver, SystemHostname};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use tracing::{debug, error, info, instrument};

/// A trait for clients that can publish one message to an SNS topic.
#[async_trait]
pub trait SnsPublisher: Send + Sync {
    /// Publishes a single subject/message pair to the given topic.
    async fn publish(
        &self,
        topic_arn: &str,
        subject: &str,
        message: &str,
    ) -> Result<(), NotifyError>;
}

/// The production publisher, backed by the AWS SDK client.
pub struct SnsClient {
    client: aws_sdk_sns::Client,
}

impl SnsClient {
    /// Builds a client from the ambient AWS environment configuration
    /// (credentials, region, endpoint), with no extra arguments.
    pub async fn from_env() -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest()).load().await;
        Self {
            client: aws_sdk_sns::Client::new(&shared),
        }
    }

    /// Wraps a client built from an explicit SDK configuration. Tests use
    /// this to point the publisher at a stub endpoint.
    pub fn from_conf(conf: aws_sdk_sns::Config) -> Self {
        Self {
            client: aws_sdk_sns::Client::from_conf(conf),
        }
    }
}

#[async_trait]
impl SnsPublisher for SnsClient {
    async fn publish(
        &self,
        topic_arn: &str,
        subject: &str,
        message: &str,
    ) -> Result<(), NotifyError> {
        match self
            .client
            .publish()
            .topic_arn(topic_arn)
            .subject(subject)
            .message(message)
            .send()
            .await
        {
            Ok(output) => {
                debug!(message_id = ?output.message_id(), "Published to SNS.");
                Ok(())
            }
            Err(e) => {
                error!(topic_arn = %topic_arn, error = %e, "SNS publish failed");
                Err(NotifyError::Publish {
                    topic: topic_arn.to_string(),
                    source: Box::new(e),
                })
            }
        }
    }
}

/// Formats a caught error and publishes it once to a configured SNS topic.
///
/// Holds only immutable configuration plus the client handle, so it is
/// safe to reuse across sequential calls. There is no retry and no
/// delivery confirmation; a collaborator failure propagates to the caller.
pub struct SnsNotifier<P: SnsPublisher = SnsClient> {
    config: SnsConfig,
    publisher: P,
    hostname: Box<dyn HostnameResolver>,
}

impl SnsNotifier<SnsClient> {
    /// Creates a notifier whose publish client is built from the ambient
    /// AWS environment.
    pub async fn from_env(config: SnsConfig) -> Self {
        Self::new(config, SnsClient::from_env().await)
    }
}

impl<P: SnsPublisher> SnsNotifier<P> {
    /// Creates a notifier with an explicit publisher.
    pub fn new(config: SnsConfig, publisher: P) -> Self {
        Self {
            config,
            publisher,
            hostname: Box::new(SystemHostname),
        }
    }

    /// Substitutes the host-name source.
    pub fn with_hostname_resolver(mut self, resolver: impl HostnameResolver + 'static) -> Self {
        self.hostname = Box::new(resolver);
        self
    }
}

#[async_trait]
impl<P: SnsPublisher> Notifier for SnsNotifier<P> {
    fn name(&self) -> &str {
        "sns"
    }

    #[instrument(skip(self, error, context), fields(kind = error.kind()))]
    async fn notify(
        &self,
        error: &dyn ErrorEvent,
        context: Option<&RequestContext>,
        accumulated_count: Option<usize>,
    ) -> Result<(), NotifyError> {
        // Every body embeds the host line, so a machine without a host
        // name cannot produce a message at all.
        let hostname = self.hostname.resolve().ok_or(NotifyError::Hostname)?;

        let subject = compose_subject(&self.config.sns_prefix, error, accumulated_count);
        let body = compose_body(error, context, accumulated_count, &hostname);

        self.publisher
            .publish(&self.config.topic_arn, &subject, &body)
            .await?;

        info!(topic_arn = %self.config.topic_arn, "Error notification published.");
        Ok(())
    }
}
