//! Commit-message rewriting for push-event webhook payloads.
//!
//! Only `commits[*].message` is touched. Every other field, known or not, is forwarded as it
//! arrived, so the payload is handled as a [`serde_json::Value`] rather than a typed struct.

use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::transform::MessagePipeline;

/// Rewrite every commit message in `payload` in place. Returns how many changed.
///
/// Payloads without a `commits` array (pings, issue events, ...) are left alone.
pub fn format_commit_messages(payload: &mut Value, pipeline: &MessagePipeline) -> usize {
    let Some(commits) = payload.get_mut("commits").and_then(Value::as_array_mut) else {
        return 0;
    };

    let mut changed = 0usize;
    for commit in commits.iter_mut() {
        let Some(Value::String(message)) = commit.get_mut("message") else {
            continue;
        };
        let formatted = pipeline.apply(message);
        if formatted != *message {
            *message = formatted;
            changed += 1;
        }
    }

    debug!(changed, "formatted commit messages");
    changed
}

/// Parse a raw request body, rewrite its commit messages and serialise it back.
pub fn format_commit_messages_json(body: &str, pipeline: &MessagePipeline) -> Result<String> {
    let mut payload: Value = serde_json::from_str(body)?;
    format_commit_messages(&mut payload, pipeline);
    Ok(serde_json::to_string(&payload)?)
}
