//! Reserved token namespace
//!
//! Token subformats starting with `authorization` or `conversation` carry
//! protocol meaning, as does a `messagetype` of `control`. Several tokens of
//! the same reserved kind may coexist when qualified by a suffix, e.g.
//! `conversation:billing`.

use crate::format::{compare, MatchMode};

pub const AUTHORIZATION: &str = "authorization";
pub const CONVERSATION: &str = "conversation";
pub const CONTROL: &str = "control";

fn has_prefix(field: &str, prefix: &str) -> bool {
    field
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

pub fn is_auth(field: &str) -> bool {
    has_prefix(field, AUTHORIZATION)
}

pub fn is_conversation(field: &str) -> bool {
    has_prefix(field, CONVERSATION)
}

pub fn is_reserved(field: &str) -> bool {
    is_auth(field) || is_conversation(field)
}

/// Exact (case-insensitive) match against `control`.
pub fn is_control(field: &str) -> bool {
    compare(Some(field), Some(CONTROL), MatchMode::Exact)
}

/// Residual qualifier of a reserved field name.
///
/// Strips the recognized prefix, then `separator` if it follows, then
/// surrounding whitespace. Unrecognized names pass through unchanged.
pub fn suffix<'a>(field: &'a str, separator: &str) -> &'a str {
    let prefix_len = if is_auth(field) {
        AUTHORIZATION.len()
    } else if is_conversation(field) {
        CONVERSATION.len()
    } else {
        return field;
    };
    let rest = &field[prefix_len..];
    rest.strip_prefix(separator).unwrap_or(rest).trim()
}
