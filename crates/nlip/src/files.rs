//! File-to-base64 encoding for binary submessages

use crate::error::{NlipError, Result};
use crate::message::Message;
use base64::Engine;
use std::path::Path;
use tracing::debug;

/// Coarse media category, decides which `add_*` constructor a file goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Audio,
    Video,
    File,
}

impl MediaKind {
    /// Classify by lower-cased file extension.
    pub fn from_extension(extension: &str) -> Self {
        match extension {
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" | "svg" | "tif" | "tiff" | "heic" => {
                MediaKind::Image
            }
            "mp3" | "wav" | "ogg" | "oga" | "m4a" | "flac" | "aac" | "opus" => MediaKind::Audio,
            "mp4" | "webm" | "mov" | "avi" | "mkv" | "m4v" => MediaKind::Video,
            _ => MediaKind::File,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Audio => "audio",
            MediaKind::Video => "video",
            MediaKind::File => "file",
        }
    }
}

/// A local file read and base64-encoded for the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFile {
    pub name: String,
    /// Lower-cased extension, used as the binary subformat encoding.
    pub extension: String,
    pub kind: MediaKind,
    pub data: String,
}

impl EncodedFile {
    /// Attach as a binary submessage of the matching media kind.
    pub fn attach_to(&self, message: &mut Message) {
        match self.kind {
            MediaKind::Image => message.add_image(self.data.clone(), &self.extension, None),
            MediaKind::Audio => message.add_audio(self.data.clone(), &self.extension, None),
            MediaKind::Video => message.add_video(self.data.clone(), &self.extension, None),
            MediaKind::File => {
                message.add_binary(self.data.clone(), MediaKind::File.as_str(), &self.extension, None)
            }
        }
    }
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn file_extension(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

pub fn encode_bytes(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// Read `path` and base64-encode its contents.
pub async fn encode_file(path: impl AsRef<Path>) -> Result<EncodedFile> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|e| NlipError::Encoding {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let extension = file_extension(path);
    let encoded = EncodedFile {
        name: file_name(path),
        kind: MediaKind::from_extension(&extension),
        data: encode_bytes(&bytes),
        extension,
    };

    debug!(
        "Encoded {} ({} bytes -> {} base64 chars)",
        encoded.name,
        bytes.len(),
        encoded.data.len()
    );

    Ok(encoded)
}
