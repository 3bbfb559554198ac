//! Client-side NLIP message envelope and transport
//!
//! This crate contains:
//! - The format taxonomy and the case-insensitive comparator used by every extraction
//! - The reserved token namespace (authorization, conversation, control)
//! - Message envelope and submessage types with query/mutation operations
//! - Envelope factory constructors
//! - Shared errors
//! - HTTP transport client with conversation correlation (`client` feature)

pub mod error;
pub mod factory;
#[cfg(feature = "client")]
pub mod files;
pub mod format;
pub mod message;
pub mod reserved;

#[cfg(feature = "client")]
pub mod client;

// Re-export commonly used types
#[cfg(feature = "client")]
pub use client::{ClientOptions, NlipClient};
pub use error::{NlipError, Result};
#[cfg(feature = "client")]
pub use files::{EncodedFile, MediaKind};
pub use format::{compare, Format, MatchMode};
pub use message::{Content, Message, SubMessage};
