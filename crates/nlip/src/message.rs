//! NLIP message envelope and submessage types
//!
//! The wire shape is flat:
//!
//! ```json
//! {"messagetype": "...", "format": "text", "subformat": "english",
//!  "content": "...", "label": "...", "submessages": [ ... ]}
//! ```
//!
//! Absent optionals are omitted and an empty submessage list is never sent.

use crate::error::Result;
use crate::format::{compare, Format, MatchMode};
use crate::reserved;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_LANGUAGE: &str = "english";

/// Payload of an envelope or submessage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Text(String),
    /// Any non-string JSON value: objects, arrays, numbers, booleans.
    Json(Value),
}

impl Content {
    /// String payload, if this is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Content::Text(s) => Some(s),
            Content::Json(_) => None,
        }
    }

    /// Non-string JSON payload, if any.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Content::Json(v) => Some(v),
            Content::Text(_) => None,
        }
    }

    /// JSON `null` counts as no content at all.
    pub fn is_null(&self) -> bool {
        matches!(self, Content::Json(Value::Null))
    }
}

impl Default for Content {
    fn default() -> Self {
        Content::Json(Value::Null)
    }
}

impl std::fmt::Display for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Content::Text(s) => write!(f, "{}", s),
            Content::Json(v) => write!(f, "{}", v),
        }
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Content::Text(s)
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::Text(s.to_string())
    }
}

impl From<Value> for Content {
    fn from(v: Value) -> Self {
        match v {
            Value::String(s) => Content::Text(s),
            other => Content::Json(other),
        }
    }
}

/// Shared filter for top-level and submessage extraction.
///
/// Format must match; subformat and label accept anything when the filter
/// side is `None`.
fn field_matches(
    format: Format,
    subformat: &str,
    label: Option<&str>,
    want_format: Format,
    want_subformat: Option<&str>,
    want_label: Option<&str>,
) -> bool {
    format == want_format
        && compare(Some(subformat), want_subformat, MatchMode::WildcardOnNull)
        && compare(label, want_label, MatchMode::WildcardOnNull)
}

/// Secondary payload attached to an envelope, one level deep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubMessage {
    pub format: Format,
    pub subformat: String,
    #[serde(default, skip_serializing_if = "Content::is_null")]
    pub content: Content,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl SubMessage {
    /// Leaf payload; `label` is optional.
    pub fn new(
        format: Format,
        subformat: impl Into<String>,
        content: impl Into<Content>,
        label: Option<&str>,
    ) -> Self {
        Self {
            format,
            subformat: subformat.into(),
            content: content.into(),
            label: label.map(String::from),
        }
    }

    /// Replace the payload in place (token refresh).
    pub fn update_content(&mut self, content: impl Into<Content>) {
        self.content = content.into();
    }

    /// Content if format matches and subformat/label match or are unfiltered.
    pub fn extract_field(
        &self,
        format: Format,
        subformat: Option<&str>,
        label: Option<&str>,
    ) -> Option<&Content> {
        field_matches(
            self.format,
            &self.subformat,
            self.label.as_deref(),
            format,
            subformat,
            label,
        )
        .then_some(&self.content)
        .filter(|content| !content.is_null())
    }
}

/// Root message envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messagetype: Option<String>,
    pub format: Format,
    pub subformat: String,
    #[serde(default, skip_serializing_if = "Content::is_null")]
    pub content: Content,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submessages: Vec<SubMessage>,
}

impl Message {
    /// Root envelope with no messagetype, label or submessages.
    pub fn new(format: Format, subformat: impl Into<String>, content: impl Into<Content>) -> Self {
        Self {
            messagetype: None,
            format,
            subformat: subformat.into(),
            content: content.into(),
            label: None,
            submessages: Vec::new(),
        }
    }

    /// Set the free-form message type.
    pub fn with_messagetype(mut self, messagetype: impl Into<String>) -> Self {
        self.messagetype = Some(messagetype.into());
        self
    }

    /// Set the root label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// True when `messagetype` is the reserved `control` value.
    pub fn is_control_msg(&self) -> bool {
        self.messagetype.as_deref().is_some_and(reserved::is_control)
    }

    /// Append, preserving insertion order.
    pub fn add_submessage(&mut self, submessage: SubMessage) {
        self.submessages.push(submessage);
    }

    /// Attach a conversation token, keeping at most one per label.
    ///
    /// When a token already exists for `label`, nothing is added; with
    /// `force_change` every conversation submessage is rewritten in place.
    pub fn add_conversation_token(
        &mut self,
        token: impl Into<String>,
        force_change: bool,
        label: Option<&str>,
    ) {
        let token: String = token.into();
        if self.extract_conversation_token(label).is_none() {
            self.add_submessage(SubMessage::new(
                Format::Token,
                reserved::CONVERSATION,
                token,
                label,
            ));
        } else if force_change {
            for sub in self
                .submessages
                .iter_mut()
                .filter(|sub| reserved::is_conversation(&sub.subformat))
            {
                sub.update_content(token.clone());
            }
        }
    }

    /// Attach an authorization token. Add-once per label, never overwritten.
    pub fn add_authentication_token(&mut self, token: impl Into<String>, label: Option<&str>) {
        if self.extract_authentication_token(label).is_none() {
            self.add_submessage(SubMessage::new(
                Format::Token,
                reserved::AUTHORIZATION,
                Content::Text(token.into()),
                label,
            ));
        }
    }

    /// Match against the top-level payload only. Null content never matches.
    pub fn extract_field(
        &self,
        format: Format,
        subformat: Option<&str>,
        label: Option<&str>,
    ) -> Option<&Content> {
        field_matches(
            self.format,
            &self.subformat,
            self.label.as_deref(),
            format,
            subformat,
            label,
        )
        .then_some(&self.content)
        .filter(|content| !content.is_null())
    }

    /// Top-level match first, then submessage matches in insertion order.
    pub fn extract_field_list(
        &self,
        format: Format,
        subformat: Option<&str>,
        label: Option<&str>,
    ) -> Vec<&Content> {
        self.extract_field(format, subformat, label)
            .into_iter()
            .chain(
                self.submessages
                    .iter()
                    .filter_map(|sub| sub.extract_field(format, subformat, label)),
            )
            .collect()
    }

    /// Join every text field in `language` with `separator`.
    pub fn extract_text(&self, language: &str, separator: &str) -> Option<String> {
        let parts = self.extract_field_list(Format::Text, Some(language), None);
        if parts.is_empty() {
            return None;
        }
        Some(
            parts
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(separator),
        )
    }

    /// English text joined with single spaces.
    pub fn text(&self) -> Option<String> {
        self.extract_text(DEFAULT_LANGUAGE, " ")
    }

    /// First token of `token_type`, top-level before submessages.
    pub fn extract_token(&self, token_type: &str, label: Option<&str>) -> Option<&Content> {
        self.extract_field_list(Format::Token, Some(token_type), label)
            .into_iter()
            .next()
    }

    /// First conversation token matching `label`.
    pub fn extract_conversation_token(&self, label: Option<&str>) -> Option<&Content> {
        self.extract_token(reserved::CONVERSATION, label)
    }

    /// First authorization token matching `label`.
    pub fn extract_authentication_token(&self, label: Option<&str>) -> Option<&Content> {
        self.extract_token(reserved::AUTHORIZATION, label)
    }

    /// First submessage whose label matches, ignoring case.
    pub fn find_labeled_submessage(&self, label: &str) -> Option<&SubMessage> {
        self.submessages
            .iter()
            .find(|sub| compare(sub.label.as_deref(), Some(label), MatchMode::Exact))
    }

    // Submessage constructors

    /// Append a text submessage in `language`.
    pub fn add_text(&mut self, content: impl Into<String>, language: &str, label: Option<&str>) {
        self.add_submessage(SubMessage::new(
            Format::Text,
            language,
            Content::Text(content.into()),
            label,
        ));
    }

    /// Reserved token types route to the conversation/authorization handlers.
    pub fn add_token(&mut self, token: impl Into<String>, token_type: &str, label: Option<&str>) {
        if reserved::is_auth(token_type) {
            self.add_authentication_token(token, label);
        } else if reserved::is_conversation(token_type) {
            self.add_conversation_token(token, true, label);
        } else {
            self.add_submessage(SubMessage::new(
                Format::Token,
                token_type,
                Content::Text(token.into()),
                label,
            ));
        }
    }

    /// Append a structured JSON submessage.
    pub fn add_json(&mut self, json: Value, label: Option<&str>) {
        self.add_submessage(SubMessage::new(Format::Structured, "JSON", json, label));
    }

    /// Append structured content of `content_type` (CSV, HTML, ...).
    pub fn add_structured_text(
        &mut self,
        content: impl Into<String>,
        content_type: &str,
        label: Option<&str>,
    ) {
        self.add_submessage(SubMessage::new(
            Format::Structured,
            content_type,
            Content::Text(content.into()),
            label,
        ));
    }

    /// Append a binary payload with subformat `<binary_type>/<encoding>`.
    pub fn add_binary(
        &mut self,
        content: impl Into<String>,
        binary_type: &str,
        encoding: &str,
        label: Option<&str>,
    ) {
        self.add_submessage(SubMessage::new(
            Format::Binary,
            binary_subformat(binary_type, encoding),
            Content::Text(content.into()),
            label,
        ));
    }

    /// Append an `image/<encoding>` binary submessage.
    pub fn add_image(&mut self, content: impl Into<String>, encoding: &str, label: Option<&str>) {
        self.add_binary(content, "image", encoding, label);
    }

    /// Append an `audio/<encoding>` binary submessage.
    pub fn add_audio(&mut self, content: impl Into<String>, encoding: &str, label: Option<&str>) {
        self.add_binary(content, "audio", encoding, label);
    }

    /// Append a `video/<encoding>` binary submessage.
    pub fn add_video(&mut self, content: impl Into<String>, encoding: &str, label: Option<&str>) {
        self.add_binary(content, "video", encoding, label);
    }

    /// Append a free-text location.
    pub fn add_location_text(&mut self, location: impl Into<String>, label: Option<&str>) {
        self.add_submessage(SubMessage::new(
            Format::Location,
            "text",
            Content::Text(location.into()),
            label,
        ));
    }

    /// Append a GPS location.
    pub fn add_location_gps(&mut self, location: impl Into<Content>, label: Option<&str>) {
        self.add_submessage(SubMessage::new(Format::Location, "gps", location, label));
    }

    /// Append an error code.
    pub fn add_error_code(&mut self, code: impl Into<Content>, label: Option<&str>) {
        self.add_submessage(SubMessage::new(Format::Error, "code", code, label));
    }

    /// Append an error description.
    pub fn add_error_text(&mut self, description: impl Into<String>, label: Option<&str>) {
        self.add_submessage(SubMessage::new(
            Format::Error,
            "text",
            Content::Text(description.into()),
            label,
        ));
    }

    /// Append a generic payload under a caller-chosen subformat.
    pub fn add_generic(&mut self, content: impl Into<Content>, subformat: &str, label: Option<&str>) {
        self.add_submessage(SubMessage::new(Format::Generic, subformat, content, label));
    }

    // Serialization

    /// Plain JSON object with absent fields omitted.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Wire JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a decoded JSON value into an envelope.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Parse wire JSON into an envelope.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Binary subformat convention: `<mediaKind>/<encoding>`, e.g. `image/png`.
pub fn binary_subformat(binary_type: &str, encoding: &str) -> String {
    format!("{}/{}", binary_type, encoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory;
    use serde_json::json;

    fn conversation_tokens(msg: &Message) -> Vec<&SubMessage> {
        msg.submessages
            .iter()
            .filter(|s| reserved::is_conversation(&s.subformat))
            .collect()
    }

    #[test]
    fn test_submessage_extract_field_filters() {
        let sub = SubMessage::new(Format::Text, "English", "hi", Some("Greeting"));

        assert_eq!(sub.extract_field(Format::Text, None, None), Some(&Content::from("hi")));
        assert!(sub.extract_field(Format::Text, Some("english"), None).is_some());
        assert!(sub.extract_field(Format::Text, Some("english"), Some("greeting")).is_some());
        assert!(sub.extract_field(Format::Text, None, Some("GREETING")).is_some());

        assert!(sub.extract_field(Format::Token, None, None).is_none());
        assert!(sub.extract_field(Format::Text, Some("french"), None).is_none());
        assert!(sub.extract_field(Format::Text, None, Some("farewell")).is_none());
    }

    #[test]
    fn test_unlabeled_submessage_matches_any_label_filter() {
        let sub = SubMessage::new(Format::Token, "session", "t", None);
        // A missing label on the submessage side is also a wildcard.
        assert!(sub.extract_field(Format::Token, None, Some("any")).is_some());
    }

    #[test]
    fn test_extract_field_list_order() {
        let mut msg = factory::create_text("top", DEFAULT_LANGUAGE);
        msg.add_text("first", "english", None);
        msg.add_json(json!({"k": 1}), None);
        msg.add_text("second", "ENGLISH", None);

        let fields = msg.extract_field_list(Format::Text, Some("english"), None);
        let rendered: Vec<String> = fields.iter().map(|c| c.to_string()).collect();
        assert_eq!(rendered, vec!["top", "first", "second"]);
    }

    #[test]
    fn test_extract_field_top_level_only() {
        let mut msg = factory::create_json(json!({"a": 1}));
        msg.add_text("aside", "english", None);

        assert!(msg.extract_field(Format::Text, None, None).is_none());
        assert_eq!(
            msg.extract_field(Format::Structured, Some("json"), None),
            Some(&Content::Json(json!({"a": 1})))
        );
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let mut msg = factory::create_text("Hello", "english");
        msg.add_text("World", "english", None);
        assert_eq!(msg.extract_text("english", " "), Some("Hello World".to_string()));
        assert_eq!(msg.text(), Some("Hello World".to_string()));
        assert_eq!(msg.extract_text("english", "\n"), Some("Hello\nWorld".to_string()));
    }

    #[test]
    fn test_extract_text_language_and_absence() {
        let mut msg = factory::create_json(json!({"rows": []}));
        assert_eq!(msg.text(), None);

        msg.add_text("Bonjour", "french", None);
        assert_eq!(msg.text(), None);
        assert_eq!(msg.extract_text("French", " "), Some("Bonjour".to_string()));
    }

    #[test]
    fn test_conversation_token_not_forced_keeps_first() {
        let mut msg = factory::create_text("hi", "english");
        msg.add_conversation_token("t1", false, None);
        msg.add_conversation_token("t2", false, None);

        assert_eq!(msg.extract_conversation_token(None), Some(&Content::from("t1")));
        assert_eq!(conversation_tokens(&msg).len(), 1);
    }

    #[test]
    fn test_conversation_token_forced_rewrites_in_place() {
        let mut msg = factory::create_text("hi", "english");
        msg.add_conversation_token("t1", false, None);
        msg.add_conversation_token("t2", true, None);

        let tokens = conversation_tokens(&msg);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].content, Content::from("t2"));
    }

    #[test]
    fn test_conversation_token_force_rewrites_every_conversation_entry() {
        let mut msg = factory::create_text("hi", "english");
        msg.add_submessage(SubMessage::new(Format::Token, "conversation", "a", Some("x")));
        msg.add_submessage(SubMessage::new(Format::Token, "Conversation:b", "b", Some("y")));
        msg.add_conversation_token("fresh", true, None);

        assert_eq!(conversation_tokens(&msg).len(), 2);
        assert!(conversation_tokens(&msg)
            .iter()
            .all(|s| s.content == Content::from("fresh")));
    }

    #[test]
    fn test_authentication_token_is_add_once() {
        let mut msg = factory::create_text("hi", "english");
        msg.add_authentication_token("first", None);
        msg.add_authentication_token("second", None);

        assert_eq!(msg.extract_authentication_token(None), Some(&Content::from("first")));
        assert_eq!(msg.submessages.len(), 1);
    }

    #[test]
    fn test_add_token_dispatch() {
        let mut msg = factory::create_text("hi", "english");
        msg.add_token("c1", "conversation", None);
        msg.add_token("c2", "CONVERSATION", None);
        msg.add_token("a1", "authorization", None);
        msg.add_token("a2", "authorization", None);
        msg.add_token("s1", "session", None);

        assert_eq!(msg.submessages.len(), 3);
        assert_eq!(msg.extract_conversation_token(None), Some(&Content::from("c2")));
        assert_eq!(msg.extract_authentication_token(None), Some(&Content::from("a1")));
        assert_eq!(msg.extract_token("Session", None), Some(&Content::from("s1")));
    }

    #[test]
    fn test_find_labeled_submessage() {
        let mut msg = factory::create_text("hi", "english");
        msg.add_text("unlabeled", "english", None);
        msg.add_image("aGk=", "png", Some("Photo"));
        msg.add_location_text("Toronto", Some("photo"));

        let found = msg.find_labeled_submessage("photo").unwrap();
        assert_eq!(found.subformat, "image/png");
        assert!(msg.find_labeled_submessage("missing").is_none());
    }

    #[test]
    fn test_submessage_constructors() {
        let mut msg = factory::create_text("hi", "english");
        msg.add_binary("AAA", "file", "pdf", None);
        msg.add_audio("BBB", "wav", None);
        msg.add_video("CCC", "mp4", None);
        msg.add_structured_text("a,b\n1,2", "CSV", None);
        msg.add_location_gps(json!({"lat": 43.6, "lon": -79.4}), None);
        msg.add_error_code(json!(404), None);
        msg.add_error_text("not found", None);
        msg.add_generic("opaque", "custom", None);

        let shapes: Vec<(Format, &str)> = msg
            .submessages
            .iter()
            .map(|s| (s.format, s.subformat.as_str()))
            .collect();
        assert_eq!(
            shapes,
            vec![
                (Format::Binary, "file/pdf"),
                (Format::Binary, "audio/wav"),
                (Format::Binary, "video/mp4"),
                (Format::Structured, "CSV"),
                (Format::Location, "gps"),
                (Format::Error, "code"),
                (Format::Error, "text"),
                (Format::Generic, "custom"),
            ]
        );
    }

    #[test]
    fn test_serialization_omits_absent_fields() {
        let msg = factory::create_text("hi", "english");
        let value = msg.to_value().unwrap();
        assert_eq!(value, json!({"format": "text", "subformat": "english", "content": "hi"}));
        assert!(!msg.to_json().unwrap().contains("submessages"));
    }

    #[test]
    fn test_serialization_wire_names() {
        let mut msg = factory::create_control("reset", "english").with_label("ops");
        msg.add_conversation_token("abc", false, None);
        let value = msg.to_value().unwrap();

        assert_eq!(value["messagetype"], "control");
        assert_eq!(value["label"], "ops");
        assert_eq!(
            value["submessages"],
            json!([{"format": "token", "subformat": "conversation", "content": "abc"}])
        );
    }

    #[test]
    fn test_round_trip_preserves_queries() {
        let mut msg = factory::create_text("Hello", "english");
        msg.add_text("World", "english", None);
        msg.add_conversation_token("abc123", false, None);
        msg.add_json(json!({"items": [1, 2]}), Some("aside"));

        let parsed = Message::from_json(&msg.to_json().unwrap()).unwrap();
        assert_eq!(parsed, msg);
        assert_eq!(parsed.text(), msg.text());
        assert_eq!(
            parsed.extract_conversation_token(None),
            msg.extract_conversation_token(None)
        );
        assert!(parsed.messagetype.is_none());
        assert!(parsed.label.is_none());
    }

    #[test]
    fn test_parse_response_forms() {
        let msg = Message::from_value(json!({
            "format": "Text",
            "subformat": "english",
            "content": "reply",
            "submessages": [
                {"format": "TOKEN", "subformat": "conversation", "content": "xyz"}
            ]
        }))
        .unwrap();
        assert_eq!(msg.text(), Some("reply".to_string()));
        assert_eq!(msg.extract_conversation_token(None), Some(&Content::from("xyz")));

        let bare = Message::from_value(json!({"format": "token", "subformat": "conversation"})).unwrap();
        assert!(bare.content.is_null());
        assert!(bare.submessages.is_empty());
    }

    #[test]
    fn test_parse_rejects_invalid_envelopes() {
        assert!(Message::from_json("not json").is_err());
        assert!(Message::from_value(json!({"format": "video", "subformat": "mp4"})).is_err());
        assert!(Message::from_value(json!({"content": "missing format"})).is_err());
    }

    #[test]
    fn test_is_control_msg() {
        assert!(factory::create_control("x", "english").is_control_msg());
        assert!(factory::create_text("x", "english")
            .with_messagetype("CONTROL")
            .is_control_msg());
        assert!(!factory::create_text("x", "english").is_control_msg());
    }

    #[test]
    fn test_tokens_are_unique_per_label() {
        let mut msg = factory::create_text("hi", "english");
        msg.add_conversation_token("ta", false, Some("a"));
        msg.add_conversation_token("tb", false, Some("b"));
        assert_eq!(conversation_tokens(&msg).len(), 2);

        msg.add_conversation_token("ta2", false, Some("a"));
        assert_eq!(conversation_tokens(&msg).len(), 2);
        assert_eq!(msg.extract_conversation_token(Some("a")), Some(&Content::from("ta")));
        assert_eq!(msg.extract_conversation_token(Some("B")), Some(&Content::from("tb")));

        msg.add_authentication_token("t1", Some("a"));
        msg.add_authentication_token("t2", Some("a"));
        assert_eq!(msg.extract_authentication_token(Some("a")), Some(&Content::from("t1")));
        assert_eq!(msg.submessages.len(), 3);
    }

    #[test]
    fn test_unlabeled_token_satisfies_labeled_lookup() {
        let mut msg = factory::create_text("hi", "english");
        msg.add_conversation_token("shared", false, None);

        assert_eq!(msg.extract_conversation_token(Some("a")), Some(&Content::from("shared")));
        msg.add_conversation_token("ta", false, Some("a"));
        assert_eq!(conversation_tokens(&msg).len(), 1);
    }

    #[test]
    fn test_null_content_is_absent() {
        let mut msg = Message::from_value(json!({
            "format": "text",
            "subformat": "english",
            "content": "hi",
            "submessages": [
                {"format": "token", "subformat": "conversation", "content": null},
                {"format": "token", "subformat": "authorization"}
            ]
        }))
        .unwrap();
        assert!(msg.extract_conversation_token(None).is_none());
        assert!(msg.extract_authentication_token(None).is_none());

        msg.add_conversation_token("real", false, None);
        msg.add_authentication_token("secret", None);
        assert_eq!(msg.extract_conversation_token(None), Some(&Content::from("real")));
        assert_eq!(msg.extract_authentication_token(None), Some(&Content::from("secret")));

        let bare = factory::create_token("", "conversation");
        assert!(bare.extract_field(Format::Token, None, None).is_some());
        let empty = Message::from_value(json!({"format": "token", "subformat": "conversation"})).unwrap();
        assert!(empty.extract_field(Format::Token, None, None).is_none());
    }

    #[test]
    fn test_content_accessors() {
        let text = Content::from("abc");
        assert_eq!(text.as_str(), Some("abc"));
        assert_eq!(text.as_json(), None);

        let json = Content::from(json!({"k": [1, 2]}));
        assert_eq!(json.as_str(), None);
        assert_eq!(json.as_json(), Some(&json!({"k": [1, 2]})));
        assert_eq!(json.to_string(), r#"{"k":[1,2]}"#);
        assert!(Content::default().is_null());
    }
}
