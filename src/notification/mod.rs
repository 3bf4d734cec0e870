//! Handles the dispatching of error occurrences to notification channels.
//!
//! This module defines a decoupled notification system: the application
//! hands a caught error to the [`NotificationManager`], which fans it out
//! to every registered [`Notifier`](crate::core::Notifier) without being
//! aware of what each destination is.

pub mod log;
pub mod manager;
pub mod sns;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use log::LogNotifier;
pub use manager::NotificationManager;
pub use sns::{SnsClient, SnsNotifier, SnsPublisher};
