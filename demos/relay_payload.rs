//! Runs a sample push-event body through the default message pipeline.
//!
//! Run:
//!   RUST_LOG=backtick_guard=trace cargo run --example relay_payload

use backtick_guard::{MessagePipeline, RepairOptions, format_commit_messages_json};
use tracing_subscriber::EnvFilter;

const BODY: &str = r#"{
  "ref": "refs/heads/main",
  "commits": [
    { "id": "a1", "message": ":sparkles: add `MessagePipeline::with_options` for custom surfaces" },
    { "id": "b2", "message": ":bug: close the `visible_prefix span" },
    { "id": "c3", "message": "docs: nothing to see here" }
  ]
}"#;

fn main() -> Result<(), backtick_guard::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let pipeline = MessagePipeline::with_options(RepairOptions::default())?;
    let out = format_commit_messages_json(BODY, &pipeline)?;

    let value: serde_json::Value = serde_json::from_str(&out)?;
    for commit in value["commits"].as_array().into_iter().flatten() {
        let message = commit["message"].as_str().unwrap_or_default();
        println!("{:<4} {message:?}", commit["id"].as_str().unwrap_or("?"));
        println!(
            "     surface shows {:?}",
            RepairOptions::default().visible_prefix(message)
        );
    }
    Ok(())
}
