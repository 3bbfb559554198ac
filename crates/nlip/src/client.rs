//! HTTP transport client with conversation correlation
//!
//! A stateless request/response endpoint is turned into a multi-turn
//! conversation by echoing back the last conversation token the server
//! handed out (the correlator) on every request that does not carry its own.

use crate::error::{NlipError, Result};
use crate::factory;
use crate::files::{self, encode_file};
use crate::message::{Message, DEFAULT_LANGUAGE};
use serde_json::Value;
use std::path::Path;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Transport options
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Bound on one full round trip, body included.
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

/// NLIP client for one endpoint and one logical session.
///
/// Concurrent sends are not serialized: two in-flight calls can both read
/// the same correlator, and the response that resolves last wins the
/// refresh. Callers that need strict ordering must await each send.
#[derive(Debug)]
pub struct NlipClient {
    base_url: String,
    options: ClientOptions,
    http: reqwest::Client,
    correlator: Mutex<Option<String>>,
}

impl NlipClient {
    /// Create a new client for `base_url`
    pub fn new(base_url: impl Into<String>, options: ClientOptions) -> Self {
        Self {
            base_url: base_url.into(),
            options,
            http: reqwest::Client::new(),
            correlator: Mutex::new(None),
        }
    }

    /// Client for the conventional endpoint `http://<host>:<port>/nlip/`
    pub fn from_host_port(host: &str, port: u16, options: ClientOptions) -> Self {
        Self::new(format!("http://{}:{}/nlip/", host, port), options)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Last conversation token received from the server
    pub async fn correlator(&self) -> Option<String> {
        self.correlator.lock().await.clone()
    }

    /// Forget the correlator; the next send starts a fresh conversation.
    pub async fn reset_session(&self) {
        if self.correlator.lock().await.take().is_some() {
            info!("Conversation reset");
        }
    }

    /// Send one envelope and decode the reply.
    ///
    /// The stored correlator is attached when `message` carries no
    /// conversation token of its own, and refreshed from the reply. On any
    /// failure the correlator is left unchanged.
    pub async fn send(&self, mut message: Message) -> Result<Message> {
        if message.extract_conversation_token(None).is_none() {
            if let Some(correlator) = self.correlator().await {
                message.add_conversation_token(correlator, false, None);
            }
        }

        let body = message.to_value()?;
        debug!(
            "Sending NLIP {} message with {} submessage(s) to {}",
            message.format,
            message.submessages.len(),
            self.base_url
        );

        let response = self
            .http
            .post(&self.base_url)
            .timeout(self.options.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("NLIP endpoint error {}: {}", status, body);
            return Err(NlipError::Transport {
                status: status.as_u16(),
                body,
            });
        }

        let response_text = response.text().await.map_err(|e| self.classify(e))?;
        debug!("NLIP raw response: {}", response_text);

        let reply = Message::from_json(&response_text).map_err(|e| {
            warn!("Undecodable NLIP response: {}", e);
            e
        })?;

        if let Some(token) = reply.extract_conversation_token(None) {
            let token = token
                .as_str()
                .map(String::from)
                .unwrap_or_else(|| token.to_string());
            let mut correlator = self.correlator.lock().await;
            if correlator.as_deref() != Some(token.as_str()) {
                debug!("Correlator refreshed: {}", token);
            }
            *correlator = Some(token);
        }

        Ok(reply)
    }

    /// Send plain English text
    pub async fn send_message(&self, text: &str) -> Result<Message> {
        self.send(factory::create_text(text, DEFAULT_LANGUAGE)).await
    }

    /// Send text with one image attached as a base64 binary submessage
    pub async fn send_with_image(&self, text: &str, image: impl AsRef<Path>) -> Result<Message> {
        let encoded = encode_file(image).await?;
        let mut message = factory::create_text(text, DEFAULT_LANGUAGE);
        message.add_image(encoded.data, &encoded.extension, None);
        self.send(message).await
    }

    /// Send text with any number of attachments, each routed by media kind
    pub async fn send_with_files<P: AsRef<Path>>(&self, text: &str, paths: &[P]) -> Result<Message> {
        let mut message = factory::create_text(text, DEFAULT_LANGUAGE);
        for path in paths {
            let encoded = encode_file(path).await?;
            debug!("Attaching {} as {}", encoded.name, encoded.kind.as_str());
            encoded.attach_to(&mut message);
        }
        self.send(message).await
    }

    /// Upload a raw file outside the envelope model.
    ///
    /// One multipart POST to `<base_url>/upload`; the acknowledgement is
    /// returned as-is. Does not touch the correlator.
    pub async fn upload_file(&self, path: impl AsRef<Path>) -> Result<Value> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|e| NlipError::Encoding {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let name = files::file_name(path);
        let part = reqwest::multipart::Part::bytes(bytes).file_name(name.clone());
        let form = reqwest::multipart::Form::new().part("file", part);
        let url = self.upload_url();

        debug!("Uploading {} to {}", name, url);

        let response = self
            .http
            .post(&url)
            .timeout(self.options.timeout)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Upload failed {}: {}", status, body);
            return Err(NlipError::Transport {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await.map_err(|e| self.classify(e))?;
        Ok(serde_json::from_str(&text)?)
    }

    fn upload_url(&self) -> String {
        format!("{}/upload", self.base_url.trim_end_matches('/'))
    }

    fn classify(&self, e: reqwest::Error) -> NlipError {
        if e.is_timeout() {
            warn!("NLIP request timed out after {:?}", self.options.timeout);
            NlipError::Timeout(self.options.timeout)
        } else {
            error!("NLIP request failed: {}", e);
            NlipError::Connection(e.to_string())
        }
    }
}
