//! HTTP transport for SOAP requests.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::constants;
use crate::error::{ClientError, Result};

/// Raw HTTP reply: status code and the fully buffered body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Reply {
    /// `true` for 2xx statuses. Anything else is routed to fault decoding.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Sends one request body and returns the reply.
pub trait Transport {
    /// Posts `body` to `url`.
    ///
    /// # Errors
    ///
    /// Connection and body read failures. A non-2xx status is *not* an error
    /// at this level; it is reported through [`Reply::status`].
    fn post(&self, url: &str, body: Vec<u8>) -> Result<Reply>;
}

/// Blocking `reqwest` transport.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds the underlying client.
    ///
    /// # Arguments
    ///
    /// * `timeout` - Whole-request timeout. `None` keeps the client's default.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(format!(
            "{}/{}",
            constants::APP_NAME,
            constants::APP_VERSION
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|source| ClientError::ClientBuild { source })?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post(&self, url: &str, body: Vec<u8>) -> Result<Reply> {
        tracing::debug!(url, bytes = body.len(), "sending SOAP request");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, constants::SOAP_CONTENT_TYPE)
            .body(body)
            .send()
            .map_err(|source| ClientError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status().as_u16();

        // Consumes the response, releasing the connection on every path.
        let body = response
            .bytes()
            .map_err(|source| ClientError::ReadBody { source })?
            .to_vec();

        let reply = Reply { status, body };
        if !reply.is_success() {
            tracing::warn!(
                status,
                response = %String::from_utf8_lossy(&reply.body),
                "received non-OK response status"
            );
        }

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_success_range() {
        let reply = |status| Reply {
            status,
            body: Vec::new(),
        };
        assert!(reply(200).is_success());
        assert!(reply(204).is_success());
        assert!(!reply(199).is_success());
        assert!(!reply(404).is_success());
        assert!(!reply(500).is_success());
    }

    #[test]
    fn test_connection_refused_is_transport_error() {
        // Bind then drop a listener to get a port nothing is accepting on.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let transport = HttpTransport::new(Some(Duration::from_secs(5))).unwrap();

        let err = transport
            .post(&format!("http://127.0.0.1:{port}/soap"), b"<x/>".to_vec())
            .unwrap_err();

        assert!(matches!(err, ClientError::Transport { .. }));
        assert_eq!(err.exit_code(), constants::EXIT_TRANSPORT);
    }
}
