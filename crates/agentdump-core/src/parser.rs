//! Recursive-descent parser for repr-style dumps.
//!
//! The grammar is the literal-and-constructor-call subset an agent runtime
//! actually prints when its typed records are dumped as text:
//!
//! - Constructor calls: `AssistantMessage(content=[...], model='...')`
//! - Mapping literals: `{'q': 'x', limit: 10}` (string or bare keys)
//! - Sequence literals: `[1, 2, 3]`
//! - String literals: `'...'` or `"..."` with a small escape set
//! - Numbers (integer, decimal, exponent, optionally negative)
//! - The keywords `True`, `False`, `None`
//! - Bare identifiers as a fallback for any other unquoted token
//!
//! # Key design decisions
//!
//! - **Single-token lookahead, no backtracking**: the leading character (or
//!   lexed word) fully determines the production, so every rule either
//!   consumes its syntax completely or fails at the exact offending offset.
//! - **Word lexing before keyword dispatch**: identifiers are lexed to their
//!   full alphanumeric/underscore run first, then compared against the
//!   reserved names. `AssistantMessageExtra` can therefore never be
//!   misparsed as an `AssistantMessage` call.
//! - **Explicit depth guard**: containers track their nesting depth and fail
//!   with [`ParseError::NestingTooDeep`] instead of letting a pathological
//!   input exhaust the call stack.

use crate::cursor::Cursor;
use crate::error::{ParseError, Result};
use crate::value::Value;

/// Default cap on container nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Record type names the upstream runtime is known to emit as constructor
/// calls. A name outside this set followed by `(` is not a constructor call;
/// it lexes as a bare identifier and the `(` fails the enclosing production.
///
/// This set is deliberately wider than the canonical model in
/// [`crate::transform`]: kinds listed here but unknown to the transformer
/// parse fine and pass through untouched.
const RECORD_NAMES: &[&str] = &[
    "AssistantMessage",
    "UserMessage",
    "SystemMessage",
    "ResultMessage",
    "StreamEvent",
    "TextBlock",
    "ThinkingBlock",
    "ToolUseBlock",
    "ToolResultBlock",
];

/// Parse a dump containing exactly one top-level value.
///
/// Leading and trailing whitespace is tolerated; any other trailing data is
/// an error. Nesting is capped at [`DEFAULT_MAX_DEPTH`].
pub fn parse(input: &str) -> Result<Value> {
    parse_with_limit(input, DEFAULT_MAX_DEPTH)
}

/// Like [`parse`] with an explicit cap on container nesting depth.
pub fn parse_with_limit(input: &str, max_depth: usize) -> Result<Value> {
    let mut cur = Cursor::new(input);
    let value = parse_value(&mut cur, 0, max_depth)?;
    cur.skip_whitespace();
    match cur.peek() {
        None => Ok(value),
        Some(ch) => Err(ParseError::UnexpectedCharacter {
            ch,
            position: cur.position(),
        }),
    }
}

/// Dispatch on the character at the cursor. `depth` is the number of
/// containers enclosing this value.
fn parse_value(cur: &mut Cursor, depth: usize, max_depth: usize) -> Result<Value> {
    cur.skip_whitespace();
    let ch = match cur.peek() {
        None => return Err(ParseError::UnexpectedEndOfInput),
        Some(ch) => ch,
    };
    match ch {
        '\'' | '"' => Ok(Value::String(parse_string(cur)?)),
        '{' => parse_mapping(cur, depth, max_depth),
        '[' => parse_sequence(cur, depth, max_depth),
        c if c == '-' || c.is_ascii_digit() => parse_number(cur),
        c if is_ident_char(c) => parse_word(cur, depth, max_depth),
        c => Err(ParseError::UnexpectedCharacter {
            ch: c,
            position: cur.position(),
        }),
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Consume a maximal run of identifier characters. The caller has already
/// checked that at least one is present.
fn parse_ident(cur: &mut Cursor) -> String {
    let mut word = String::new();
    while let Some(c) = cur.peek() {
        if !is_ident_char(c) {
            break;
        }
        word.push(c);
        cur.advance();
    }
    word
}

/// A token starting with an identifier character: reserved literal keyword,
/// recognized constructor call, or bare identifier.
fn parse_word(cur: &mut Cursor, depth: usize, max_depth: usize) -> Result<Value> {
    let word = parse_ident(cur);
    match word.as_str() {
        "True" => Ok(Value::Bool(true)),
        "False" => Ok(Value::Bool(false)),
        "None" => Ok(Value::Null),
        name if RECORD_NAMES.contains(&name) => parse_call(cur, word, depth, max_depth),
        _ => Ok(Value::Ident(word)),
    }
}

/// Constructor-call argument list: `(key=value, ...)`. The record name has
/// already been consumed.
fn parse_call(cur: &mut Cursor, name: String, depth: usize, max_depth: usize) -> Result<Value> {
    if depth >= max_depth {
        return Err(ParseError::NestingTooDeep { limit: max_depth });
    }
    cur.expect("(")?;
    let mut fields = Vec::new();
    loop {
        cur.skip_whitespace();
        if cur.eat(")") {
            return Ok(Value::Object { name, fields });
        }
        let key = match cur.peek() {
            None => return Err(ParseError::UnexpectedEndOfInput),
            Some(c) if is_ident_char(c) => parse_ident(cur),
            Some(c) => {
                return Err(ParseError::UnexpectedCharacter {
                    ch: c,
                    position: cur.position(),
                })
            }
        };
        cur.skip_whitespace();
        cur.expect("=")?;
        let value = parse_value(cur, depth + 1, max_depth)?;
        insert_entry(&mut fields, key, value);
        cur.skip_whitespace();
        if cur.eat(",") {
            continue;
        }
        cur.expect(")")?;
        return Ok(Value::Object { name, fields });
    }
}

/// Mapping literal: `{key: value, ...}` with string-literal or bare keys.
fn parse_mapping(cur: &mut Cursor, depth: usize, max_depth: usize) -> Result<Value> {
    if depth >= max_depth {
        return Err(ParseError::NestingTooDeep { limit: max_depth });
    }
    cur.expect("{")?;
    let mut entries = Vec::new();
    loop {
        cur.skip_whitespace();
        if cur.eat("}") {
            return Ok(Value::Mapping(entries));
        }
        let key = parse_key(cur)?;
        cur.skip_whitespace();
        cur.expect(":")?;
        let value = parse_value(cur, depth + 1, max_depth)?;
        insert_entry(&mut entries, key, value);
        cur.skip_whitespace();
        if cur.eat(",") {
            continue;
        }
        cur.expect("}")?;
        return Ok(Value::Mapping(entries));
    }
}

/// A mapping key: quoted string or bare identifier.
fn parse_key(cur: &mut Cursor) -> Result<String> {
    match cur.peek() {
        None => Err(ParseError::UnexpectedEndOfInput),
        Some('\'') | Some('"') => parse_string(cur),
        Some(c) if is_ident_char(c) => Ok(parse_ident(cur)),
        Some(c) => Err(ParseError::UnexpectedCharacter {
            ch: c,
            position: cur.position(),
        }),
    }
}

/// Sequence literal: `[value, ...]`.
fn parse_sequence(cur: &mut Cursor, depth: usize, max_depth: usize) -> Result<Value> {
    if depth >= max_depth {
        return Err(ParseError::NestingTooDeep { limit: max_depth });
    }
    cur.expect("[")?;
    let mut items = Vec::new();
    loop {
        cur.skip_whitespace();
        if cur.eat("]") {
            return Ok(Value::Sequence(items));
        }
        items.push(parse_value(cur, depth + 1, max_depth)?);
        cur.skip_whitespace();
        if cur.eat(",") {
            continue;
        }
        cur.expect("]")?;
        return Ok(Value::Sequence(items));
    }
}

/// String literal. The opening quote character decides the closing one, so
/// `"it's"` needs no escaping. Escapes: `\n`, `\t`, `\r`; any other escaped
/// character (including `\\`, `\'`, `\"`) yields the character itself.
fn parse_string(cur: &mut Cursor) -> Result<String> {
    let quote = match cur.advance() {
        None => return Err(ParseError::UnexpectedEndOfInput),
        Some(q) => q,
    };
    let mut out = String::new();
    loop {
        match cur.advance() {
            None => return Err(ParseError::UnexpectedEndOfInput),
            Some(c) if c == quote => return Ok(out),
            Some('\\') => match cur.advance() {
                None => return Err(ParseError::UnexpectedEndOfInput),
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                // \\ \' \" plus the lenient fallback for unknown escapes.
                Some(other) => out.push(other),
            },
            Some(c) => out.push(c),
        }
    }
}

/// Numeric literal: optional `-`, digit run, optional fraction, optional
/// exponent. A `-` with no digits after it matches no rule and fails here;
/// a `.` or `e` that would carry no digits is left unconsumed (so `1.` is
/// the number `1` followed by a stray dot).
fn parse_number(cur: &mut Cursor) -> Result<Value> {
    let start = cur.position();
    let rest = cur.rest();
    let len = scan_number(rest);
    if len == 0 {
        // Only reachable for a lone '-', since a leading digit always scans.
        return Err(ParseError::UnexpectedCharacter {
            ch: '-',
            position: start,
        });
    }
    let text = &rest[..len];
    let number = text.parse::<f64>().map_err(|_| ParseError::UnexpectedCharacter {
        ch: '-',
        position: start,
    })?;
    cur.eat(text);
    Ok(Value::Number(number))
}

/// Byte length of the numeric token at the start of `s`, or 0 if there is
/// no integer part.
fn scan_number(s: &str) -> usize {
    let b = s.as_bytes();
    let mut i = 0;
    if i < b.len() && b[i] == b'-' {
        i += 1;
    }
    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    if i == int_start {
        return 0;
    }
    if i < b.len() && b[i] == b'.' {
        let mut j = i + 1;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > i + 1 {
            i = j;
        }
    }
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    i
}

/// Insert a `key=value` pair. A duplicate key takes the later value but
/// keeps the position of its first occurrence.
fn insert_entry(entries: &mut Vec<(String, Value)>, key: String, value: Value) {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some(slot) => slot.1 = value,
        None => entries.push((key, value)),
    }
}
