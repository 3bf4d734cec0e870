//! Encapsulation for setting up external services.

use crate::{
    config::Config,
    notification::{log::LogNotifier, manager::NotificationManager, sns::SnsNotifier},
};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Builds a notification manager from the configuration.
///
/// The log channel is always registered. The SNS channel is added only
/// when it is configured with a topic to publish to.
pub async fn setup_notification_manager(config: &Config) -> Result<NotificationManager> {
    let mut manager = NotificationManager::new();
    for kind in &config.ignored_kinds {
        manager.ignore_kind(kind.clone());
    }

    manager.register(Arc::new(LogNotifier));

    if let Some(sns_config) = &config.sns {
        if sns_config.topic_arn.is_empty() {
            tracing::warn!("SNS notifications are configured, but no topic ARN was provided. SNS notifications will be disabled.");
        } else {
            let notifier = SnsNotifier::from_env(sns_config.clone()).await;
            manager.register(Arc::new(notifier));
            info!(topic_arn = %sns_config.topic_arn, "SNS notification channel enabled.");
        }
    }

    Ok(manager)
}
