//! Canonicalization of recognized record shapes.
//!
//! The upstream runtime may grow new record kinds at any time, so the
//! transformer is built around one guarantee: it never fails. Constructor
//! nodes whose type name is in the canonical registry are rewritten into the
//! stable message/content shapes downstream rendering is coded against;
//! everything else passes through with only its children transformed.
//!
//! Canonical shapes are mappings discriminated by a `"type"` entry:
//!
//! | raw record        | canonical shape                                    |
//! |-------------------|----------------------------------------------------|
//! | `AssistantMessage`| `{type: assistant, content: [block, ...]}`         |
//! | `UserMessage`     | `{type: user, content: [block, ...]}`              |
//! | `ResultMessage`   | `{type: result, subtype, duration_ms, ...}`        |
//! | `TextBlock`       | `{type: text, text}`                               |
//! | `ToolUseBlock`    | `{type: tool_use, id, name, input}`                |
//! | `ToolResultBlock` | `{type: tool_result, tool_use_id, content}`        |
//!
//! Fields absent from the raw node are omitted, never fabricated, and a
//! message `content` that is a single block rather than a sequence is
//! normalized to a one-element sequence.

use crate::value::Value;

/// The closed set of record kinds with a canonical shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordKind {
    Assistant,
    User,
    Result,
    Text,
    ToolUse,
    ToolResult,
}

impl RecordKind {
    fn from_name(name: &str) -> Option<RecordKind> {
        match name {
            "AssistantMessage" => Some(RecordKind::Assistant),
            "UserMessage" => Some(RecordKind::User),
            "ResultMessage" => Some(RecordKind::Result),
            "TextBlock" => Some(RecordKind::Text),
            "ToolUseBlock" => Some(RecordKind::ToolUse),
            "ToolResultBlock" => Some(RecordKind::ToolResult),
            _ => None,
        }
    }
}

/// Fields a `ResultMessage` carries through verbatim.
const RESULT_FIELDS: &[&str] = &[
    "result",
    "subtype",
    "duration_ms",
    "duration_api_ms",
    "is_error",
    "num_turns",
    "session_id",
    "total_cost_usd",
    "usage",
];

/// Rewrite recognized constructor nodes into canonical shapes, recursing
/// into sequences, mappings, and unrecognized constructor fields.
///
/// Total over any parsed value, and idempotent on its own output: canonical
/// shapes contain no constructor nodes with registered names, so a second
/// pass is the identity.
pub fn transform(value: Value) -> Value {
    match value {
        Value::Sequence(items) => Value::Sequence(items.into_iter().map(transform).collect()),
        Value::Mapping(entries) => Value::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k, transform(v)))
                .collect(),
        ),
        Value::Object { name, fields } => match RecordKind::from_name(&name) {
            Some(kind) => canonicalize(kind, fields),
            // Forward compatibility: unknown record kinds keep their shape.
            None => Value::Object {
                name,
                fields: fields.into_iter().map(|(k, v)| (k, transform(v))).collect(),
            },
        },
        leaf => leaf,
    }
}

fn canonicalize(kind: RecordKind, fields: Vec<(String, Value)>) -> Value {
    match kind {
        RecordKind::Assistant => message("assistant", fields),
        RecordKind::User => message("user", fields),
        RecordKind::Result => record("result", fields, RESULT_FIELDS),
        RecordKind::Text => record("text", fields, &["text"]),
        RecordKind::ToolUse => record("tool_use", fields, &["id", "name", "input"]),
        RecordKind::ToolResult => record("tool_result", fields, &["tool_use_id", "content"]),
    }
}

/// Canonical message: `{type: <tag>, content: [...]}` with `content`
/// normalized to a sequence of transformed blocks.
fn message(tag: &str, mut fields: Vec<(String, Value)>) -> Value {
    let mut out = vec![("type".to_string(), Value::String(tag.to_string()))];
    if let Some(content) = take(&mut fields, "content") {
        let blocks = match content {
            Value::Sequence(items) => items.into_iter().map(transform).collect(),
            single => vec![transform(single)],
        };
        out.push(("content".to_string(), Value::Sequence(blocks)));
    }
    Value::Mapping(out)
}

/// Canonical record: `{type: <tag>}` plus each listed field that the raw
/// node actually carries, in the listed order, values transformed.
fn record(tag: &str, mut fields: Vec<(String, Value)>, keys: &[&str]) -> Value {
    let mut out = vec![("type".to_string(), Value::String(tag.to_string()))];
    for key in keys {
        if let Some(v) = take(&mut fields, key) {
            out.push((key.to_string(), transform(v)));
        }
    }
    Value::Mapping(out)
}

fn take(fields: &mut Vec<(String, Value)>, key: &str) -> Option<Value> {
    let idx = fields.iter().position(|(k, _)| k == key)?;
    Some(fields.remove(idx).1)
}
