//! Contact message delivery.
//!
//! Browser (csr): the simulated transport waits on a `gloo-timers` sleep and
//! the HTTP transport posts JSON via `gloo-net`.
//! Host builds: the simulated transport resolves immediately and HTTP reports
//! that no browser is available.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is a `ContactError`; the form surfaces any of them as the
//! same generic notice and keeps the fields for a retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::time::Duration;

use crate::config::SiteConfig;
use crate::state::contact::ContactMessage;

/// Latency of the simulated send.
pub const SIMULATED_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("transport failed: {0}")]
    Transport(String),
    #[error("server rejected message: {status}")]
    Rejected { status: u16 },
    #[error("could not encode message: {0}")]
    Encode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

#[cfg(any(test, feature = "csr"))]
fn rejected_status(status: u16) -> Result<(), ContactError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ContactError::Rejected { status }) }
}

/// Where contact messages go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactTransport {
    /// Always succeeds after `delay`; logs the payload.
    Simulated { delay: Duration },
    /// `POST`s the message as JSON and expects a 2xx acknowledgement.
    Http { endpoint: String },
}

impl Default for ContactTransport {
    fn default() -> Self {
        Self::Simulated { delay: SIMULATED_DELAY }
    }
}

impl ContactTransport {
    /// HTTP when the site names an endpoint, simulated otherwise.
    pub fn from_config(config: &SiteConfig) -> Self {
        match config.contact_endpoint.as_deref().map(str::trim) {
            Some(endpoint) if !endpoint.is_empty() => Self::Http { endpoint: endpoint.to_owned() },
            _ => Self::default(),
        }
    }

    /// Deliver a message.
    ///
    /// # Errors
    ///
    /// Returns a `ContactError` if the request cannot be built or sent, or if
    /// the endpoint answers with a non-2xx status.
    pub async fn send(&self, message: &ContactMessage) -> Result<(), ContactError> {
        match self {
            Self::Simulated { delay } => {
                #[cfg(feature = "csr")]
                {
                    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                    gloo_timers::future::TimeoutFuture::new(millis).await;
                }
                #[cfg(not(feature = "csr"))]
                {
                    let _ = delay;
                }
                log::info!("simulated contact send: {}", serde_json::to_string(message).unwrap_or_default());
                Ok(())
            }
            Self::Http { endpoint } => send_http(endpoint, message).await,
        }
    }
}

async fn send_http(endpoint: &str, message: &ContactMessage) -> Result<(), ContactError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(message)
            .map_err(|e| ContactError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ContactError::Transport(e.to_string()))?;
        rejected_status(resp.status())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, message);
        Err(ContactError::Unavailable)
    }
}
