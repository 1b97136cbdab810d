//! Outbound message relay for the contact form
//!
//! The portfolio has no backend of its own. Submitting the contact form posts
//! the message to a hosted email relay (EmailJS-compatible), identified by a
//! service id, template id and public key.
//!
//! # Architecture
//!
//! ```text
//! MessageRelay trait
//! └── EmailRelay (HTTP POST, JSON body)
//! ```
//!
//! There is no retry, backoff or timeout. A relay with placeholder credentials
//! refuses every message without touching the network.

use crate::config::RelayConfig;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

/// Message handed to the relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayMessage {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

/// Delivery failure of any kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// Credentials are unset or still the template placeholders
    NotConfigured,
    /// Transport-level failure (DNS, connect, TLS, body read)
    Network(String),
    /// Relay answered with a non-2xx status
    Rejected { status: u16, body: String },
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConfigured => write!(f, "Message relay not configured"),
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Rejected { status, body } => {
                write!(f, "Relay rejected message ({}): {}", status, body)
            }
        }
    }
}

impl std::error::Error for RelayError {}

/// Something that can deliver a contact message
#[async_trait]
pub trait MessageRelay: Send + Sync {
    /// Deliver one message. Called at most once per submit.
    async fn send(&self, message: &RelayMessage) -> Result<(), RelayError>;

    /// Whether the relay has usable credentials
    fn is_configured(&self) -> bool;
}

/// Request body understood by the relay endpoint
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a RelayMessage,
}

/// HTTP relay client
pub struct EmailRelay {
    client: reqwest::Client,
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
    configured: bool,
}

impl EmailRelay {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
            configured: config.is_configured(),
        }
    }

    fn payload<'a>(&'a self, message: &'a RelayMessage) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: message,
        }
    }
}

#[async_trait]
impl MessageRelay for EmailRelay {
    async fn send(&self, message: &RelayMessage) -> Result<(), RelayError> {
        if !self.configured {
            return Err(RelayError::NotConfigured);
        }

        tracing::debug!(endpoint = %self.endpoint, "Posting contact message to relay");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&self.payload(message))
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response
            .text()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;
        Err(RelayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}
