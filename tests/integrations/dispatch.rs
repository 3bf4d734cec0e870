//! Integration tests for dispatching one error to several channels.

#[path = "../helpers/mod.rs"]
mod helpers;

use errwatch::config::SnsConfig;
use errwatch::core::CapturedError;
use errwatch::notification::log::LogNotifier;
use errwatch::notification::manager::NotificationManager;
use errwatch::notification::sns::SnsNotifier;
use errwatch::notification::test_utils::{FakeHostname, RecordingPublisher};
use std::sync::Arc;

fn manager_with_sns(publisher: RecordingPublisher) -> NotificationManager {
    let sns = SnsNotifier::new(
        SnsConfig {
            topic_arn: "topicARN".to_string(),
            sns_prefix: "[App Exception]".to_string(),
        },
        publisher,
    )
    .with_hostname_resolver(FakeHostname("example.com".to_string()));

    let mut manager = NotificationManager::new();
    manager.register(Arc::new(LogNotifier));
    manager.register(Arc::new(sns));
    manager
}

#[tokio::test]
async fn test_occurrence_count_reaches_the_subject_line() {
    helpers::init_tracing();
    let publisher = RecordingPublisher::new();
    let manager = manager_with_sns(publisher.clone());
    let error = helpers::fake_error();

    for _ in 0..3 {
        assert!(manager.notify(&error, None).await);
    }

    let subjects: Vec<String> = publisher
        .published()
        .into_iter()
        .map(|p| p.subject)
        .collect();
    assert_eq!(
        subjects,
        vec![
            "[App Exception] - A MyException occurred",
            "[App Exception] - 2 MyException occurred",
            "[App Exception] - 3 MyException occurred",
        ]
    );
}

#[tokio::test]
async fn test_ignored_kind_reaches_no_channel() {
    let publisher = RecordingPublisher::new();
    let mut manager = manager_with_sns(publisher.clone());
    manager.ignore_kind("MyException");

    let notified = manager.notify(&helpers::fake_error(), None).await;

    assert!(!notified);
    assert!(publisher.published().is_empty());
}

#[tokio::test]
async fn test_counts_are_tracked_per_kind() {
    let publisher = RecordingPublisher::new();
    let manager = manager_with_sns(publisher.clone());
    let first = CapturedError::new("FirstError", "boom");
    let second = CapturedError::new("SecondError", "crash");

    manager.notify(&first, None).await;
    manager.notify(&second, None).await;
    manager.notify(&first, None).await;

    let subjects: Vec<String> = publisher
        .published()
        .into_iter()
        .map(|p| p.subject)
        .collect();
    assert_eq!(
        subjects,
        vec![
            "[App Exception] - A FirstError occurred",
            "[App Exception] - A SecondError occurred",
            "[App Exception] - 2 FirstError occurred",
        ]
    );
}

#[tokio::test]
async fn test_request_context_is_forwarded_to_channels() {
    let publisher = RecordingPublisher::new();
    let manager = manager_with_sns(publisher.clone());

    manager
        .notify(&helpers::fake_error(), Some(&helpers::examples_request()))
        .await;

    let published = publisher.published();
    assert_eq!(published.len(), 1);
    assert!(published[0].message.starts_with(
        "A MyException occurred while GET </examples> was processed by examples#index\n"
    ));
}
