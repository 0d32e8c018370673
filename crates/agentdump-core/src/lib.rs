//! # agentdump-core
//!
//! Parser and canonicalizer for **repr-style debug dumps** emitted by an
//! agent runtime.
//!
//! Such dumps are textual object representations, not JSON: typed records
//! printed as constructor calls (`AssistantMessage(content=[...])`) mixed
//! with mapping, sequence, string, number, and keyword literals, nested to
//! arbitrary depth. This crate parses one dump into a generic tagged value
//! tree and canonicalizes the record shapes it recognizes into a stable
//! message model, leaving unrecognized shapes untouched for forward
//! compatibility.
//!
//! ## Quick start
//!
//! ```rust
//! use agentdump_core::decode;
//!
//! let dump = "AssistantMessage(content=[TextBlock(text='hi')])";
//! let json = decode(dump).unwrap();
//! assert_eq!(json, r#"{"type":"assistant","content":[{"type":"text","text":"hi"}]}"#);
//! ```
//!
//! ## Modules
//!
//! - [`cursor`] — read position over the raw input; no grammar knowledge
//! - [`parser`] — recursive-descent grammar, dump string → [`Value`]
//! - [`transform`] — canonicalization of recognized record shapes
//! - [`value`] — the generic tagged value tree and its JSON projection
//! - [`error`] — structured parse errors with byte offsets
//!
//! Parsing and transformation are pure, synchronous functions of their
//! input: no I/O, no shared state, safe to call concurrently.

pub mod cursor;
pub mod error;
pub mod parser;
pub mod transform;
pub mod value;

pub use error::ParseError;
pub use parser::{parse, parse_with_limit, DEFAULT_MAX_DEPTH};
pub use transform::transform;
pub use value::Value;

/// Parse a dump, canonicalize it, and serialize the result to compact JSON.
///
/// The intended fallback on error is to display the original dump string
/// as-is rather than fail a whole transcript; the returned [`ParseError`]
/// carries the byte offset for diagnostics.
pub fn decode(dump: &str) -> error::Result<String> {
    let value = transform(parse(dump)?);
    Ok(value.to_json())
}
