/// errwatch - Error notification dispatch with an SNS adapter
///
/// This library formats caught errors into human-readable alerts and
/// publishes them to registered notification channels, most notably an
/// AWS SNS topic.
pub mod config;
pub mod core;
pub mod formatting;
pub mod hostname;
pub mod notification;
pub mod services;

// Re-export core types for convenience
pub use crate::core::*;
