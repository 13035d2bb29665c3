// SPDX-License-Identifier: MPL-2.0
//! Asynchronous delivery of submissions to the feedback endpoint.
//!
//! The widget only depends on the [`Transport`] trait. [`HttpTransport`] is the
//! production implementation posting url-encoded forms with `reqwest`;
//! [`UnavailableTransport`] stands in when the endpoint could not be configured,
//! so every submission lands in the failure branch instead of crashing the host.

use super::payload::SubmissionPayload;
use super::response::SubmissionResult;
use crate::config::EndpointConfig;
use crate::error::{Error, Result, SubmissionFailed};
use futures_util::future::{BoxFuture, FutureExt};
use reqwest::header;

/// User agent sent with every submission.
const USER_AGENT: &str = concat!("thumber/", env!("CARGO_PKG_VERSION"));

/// Future returned by a transport for a single submission.
pub type TransportFuture = BoxFuture<'static, std::result::Result<SubmissionResult, SubmissionFailed>>;

/// Sends one payload and resolves with the parsed response.
///
/// Implementations must convert every failure (network, HTTP status, body)
/// into [`SubmissionFailed`]; nothing else may escape.
pub trait Transport: Send + Sync {
    fn submit(&self, payload: SubmissionPayload) -> TransportFuture;
}

/// Posts submissions to an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: reqwest::Url,
    referer: Option<String>,
    cookie: Option<String>,
}

impl HttpTransport {
    /// Builds a transport for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the URL is missing, unparsable or not
    /// `http(s)`, or if the HTTP client cannot be built.
    pub fn new(endpoint: &EndpointConfig) -> Result<Self> {
        let raw_url = endpoint
            .url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| Error::Config("no feedback endpoint configured".to_string()))?;

        let url = reqwest::Url::parse(raw_url)
            .map_err(|e| Error::Config(format!("invalid endpoint url '{raw_url}': {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "unsupported endpoint scheme '{}'",
                url.scheme()
            )));
        }

        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            url,
            referer: endpoint.referer.clone(),
            cookie: endpoint.cookie.clone(),
        })
    }

    /// The endpoint submissions are posted to.
    #[must_use]
    pub fn url(&self) -> &reqwest::Url {
        &self.url
    }
}

impl Transport for HttpTransport {
    fn submit(&self, payload: SubmissionPayload) -> TransportFuture {
        let mut request = self
            .client
            .post(self.url.clone())
            .header(header::ACCEPT, "application/json")
            .header("X-Requested-With", "XMLHttpRequest")
            .form(&payload.form_fields());

        if let Some(referer) = &self.referer {
            request = request.header(header::REFERER, referer.as_str());
        }
        if let Some(cookie) = &self.cookie {
            request = request.header(header::COOKIE, cookie.as_str());
        }

        async move {
            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(SubmissionFailed::new(format!("HTTP status: {status}")));
            }
            let body = response.bytes().await?;
            SubmissionResult::from_json(&body)
        }
        .boxed()
    }
}

/// Transport that rejects every submission with a fixed reason.
#[derive(Debug, Clone)]
pub struct UnavailableTransport {
    reason: String,
}

impl UnavailableTransport {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Transport for UnavailableTransport {
    fn submit(&self, _payload: SubmissionPayload) -> TransportFuture {
        let failure = SubmissionFailed::new(self.reason.clone());
        async move { Err(failure) }.boxed()
    }
}
