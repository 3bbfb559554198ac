//! Envelope constructors, one per payload category
//!
//! Each builds a root envelope with no submessages. Use
//! [`Message::with_messagetype`] / [`Message::with_label`] for the optional
//! root fields and the `add_*` methods for submessages.

use crate::format::Format;
use crate::message::{binary_subformat, Content, Message};
use crate::reserved;
use serde_json::Value;

/// Text envelope in `language`.
pub fn create_text(content: impl Into<String>, language: &str) -> Message {
    Message::new(Format::Text, language, Content::Text(content.into()))
}

/// Text envelope marked as a protocol-control message.
pub fn create_control(content: impl Into<String>, language: &str) -> Message {
    create_text(content, language).with_messagetype(reserved::CONTROL)
}

/// Token envelope of `token_type`.
pub fn create_token(token: impl Into<String>, token_type: &str) -> Message {
    Message::new(Format::Token, token_type, Content::Text(token.into()))
}

/// Structured envelope with subformat `JSON`.
pub fn create_json(json: Value) -> Message {
    Message::new(Format::Structured, "JSON", json)
}

/// Structured envelope of `content_type`.
pub fn create_structured(content: impl Into<Content>, content_type: &str) -> Message {
    Message::new(Format::Structured, content_type, content)
}

/// Binary envelope with subformat `<binary_type>/<encoding>`.
pub fn create_binary(content: impl Into<String>, binary_type: &str, encoding: &str) -> Message {
    Message::new(
        Format::Binary,
        binary_subformat(binary_type, encoding),
        Content::Text(content.into()),
    )
}

/// `image/<encoding>` binary envelope.
pub fn create_image(content: impl Into<String>, encoding: &str) -> Message {
    create_binary(content, "image", encoding)
}

/// `audio/<encoding>` binary envelope.
pub fn create_audio(content: impl Into<String>, encoding: &str) -> Message {
    create_binary(content, "audio", encoding)
}

/// `video/<encoding>` binary envelope.
pub fn create_video(content: impl Into<String>, encoding: &str) -> Message {
    create_binary(content, "video", encoding)
}

/// Free-text location envelope.
pub fn create_location_text(location: impl Into<String>) -> Message {
    Message::new(Format::Location, "text", Content::Text(location.into()))
}

/// GPS location envelope.
pub fn create_location_gps(location: impl Into<Content>) -> Message {
    Message::new(Format::Location, "gps", location)
}

/// Error envelope carrying a code.
pub fn create_error_code(code: impl Into<Content>) -> Message {
    Message::new(Format::Error, "code", code)
}

/// Error envelope carrying a description.
pub fn create_error_text(description: impl Into<String>) -> Message {
    Message::new(Format::Error, "text", Content::Text(description.into()))
}

/// Generic envelope under a caller-chosen subformat.
pub fn create_generic(content: impl Into<Content>, subformat: &str) -> Message {
    Message::new(Format::Generic, subformat, content)
}
