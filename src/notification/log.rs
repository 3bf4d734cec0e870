use crate::core::{ErrorEvent, Notifier, NotifyError, RequestContext};
use async_trait::async_trait;
use tracing::error;

/// A notifier that writes error occurrences to the local log stream.
///
/// Registered unconditionally so that every dispatched error leaves a
/// trace on the host even when no remote channel is configured.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    fn name(&self) -> &str {
        "log"
    }

    async fn notify(
        &self,
        error: &dyn ErrorEvent,
        context: Option<&RequestContext>,
        accumulated_count: Option<usize>,
    ) -> Result<(), NotifyError> {
        let occurrences = accumulated_count.unwrap_or(1);
        match context.and_then(|c| c.request_line()) {
            Some((method, path)) => {
                error!(
                    kind = error.kind(),
                    occurrences,
                    request = %format!("{method} {path}"),
                    "{}",
                    error.message()
                );
            }
            None => {
                error!(kind = error.kind(), occurrences, "{}", error.message());
            }
        }
        Ok(())
    }
}
