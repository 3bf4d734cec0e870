// src/formatting.rs

use crate::core::{ErrorEvent, RequestContext};

/// Composes the one-line subject: `"<prefix> - <token> <kind> occurred"`.
pub fn compose_subject(
    prefix: &str,
    error: &dyn ErrorEvent,
    accumulated_count: Option<usize>,
) -> String {
    format!(
        "{} - {} {} occurred",
        prefix,
        leading_token(accumulated_count),
        error.kind()
    )
}

/// Composes the message body: the contextual sentence, the exception
/// message, the host name, and the backtrace, each section line-break
/// terminated. An empty backtrace still gets its header.
pub fn compose_body(
    error: &dyn ErrorEvent,
    context: Option<&RequestContext>,
    accumulated_count: Option<usize>,
    hostname: &str,
) -> String {
    let mut body = describe_occurrence(error, context, accumulated_count);
    body.push('\n');
    body.push_str(&format!("Exception: {}\n", error.message()));
    body.push_str(&format!("Hostname: {}\n", hostname));
    body.push_str("Backtrace:\n");
    for line in error.backtrace() {
        body.push_str(line);
        body.push('\n');
    }
    body
}

/// The contextual first sentence: request phrasing when the context
/// carries a usable request line, background phrasing otherwise.
fn describe_occurrence(
    error: &dyn ErrorEvent,
    context: Option<&RequestContext>,
    accumulated_count: Option<usize>,
) -> String {
    let token = leading_token(accumulated_count);
    match context.and_then(|c| c.request_line()) {
        Some((method, path)) => {
            let mut sentence = format!(
                "{} {} occurred while {} <{}>",
                token,
                error.kind(),
                method,
                path
            );
            if let Some((controller, action)) = context.and_then(|c| c.handler()) {
                sentence.push_str(&format!(" was processed by {}#{}", controller, action));
            }
            sentence
        }
        // "occured" is part of the established message format; alert
        // filters downstream match on the exact phrase.
        None => format!("{} {} occured in background", token, error.kind()),
    }
}

/// Renders the accumulated-occurrences count: the bare integer once the
/// same kind has been seen more than once, the article "A" otherwise.
fn leading_token(accumulated_count: Option<usize>) -> String {
    match accumulated_count {
        Some(count) if count > 1 => count.to_string(),
        _ => "A".to_string(),
    }
}
