// API client module: a small blocking HTTP client that posts one payload
// to the vision server and hands back whatever it answered.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::action::Action;
use crate::error::Result;

pub const HOST: &str = "78.133.154.71";
pub const PORT: u16 = 9000;

/// Where requests go. The CLI always uses [`Endpoint::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Default for Endpoint {
    fn default() -> Self {
        Endpoint {
            host: HOST.into(),
            port: PORT,
        }
    }
}

impl Endpoint {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}:{}{}", self.host, self.port, path)
    }
}

/// Status and body exactly as the server sent them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Fields the server puts in its JSON replies. `status` is 1 on success
/// and 2 when the request was rejected.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
pub struct ReplySummary {
    pub status: Option<i64>,
    pub error_description: Option<String>,
}

impl Reply {
    /// Decode the reply body if it is one of the server's JSON objects.
    pub fn summary(&self) -> Option<ReplySummary> {
        serde_json::from_slice(&self.body).ok()
    }
}

/// Holds a reqwest blocking client and the endpoint it talks to.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    endpoint: Endpoint,
}

impl ApiClient {
    pub fn new() -> Result<Self> {
        Self::with_endpoint(Endpoint::default())
    }

    /// No timeout and no proxy lookup: the request goes straight to the
    /// endpoint and waits as long as the server takes.
    pub fn with_endpoint(endpoint: Endpoint) -> Result<Self> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .no_proxy()
            .build()?;
        Ok(ApiClient { client, endpoint })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// POST `body` to the action's path. No Content-Type is set, and a
    /// non-2xx status is returned like any other reply.
    pub fn post(&self, action: Action, body: String) -> Result<Reply> {
        let url = self.endpoint.url(&action.path());
        debug!(%url, bytes = body.len(), "sending request");

        let res = self.client.post(&url).body(body).send()?;
        let status = res.status().as_u16();
        let body = res.bytes()?.to_vec();

        debug!(status, bytes = body.len(), "received reply");
        Ok(Reply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_is_fixed_server() {
        let endpoint = Endpoint::default();
        assert_eq!(
            endpoint.url(&Action::Segment.path()),
            "http://78.133.154.71:9000/api/segment"
        );
    }

    #[test]
    fn summary_reads_server_error_shape() {
        let reply = Reply {
            status: 400,
            body: br#"{"status":2,"error_description":"unrecognised action for segment api"}"#
                .to_vec(),
        };
        assert_eq!(
            reply.summary(),
            Some(ReplySummary {
                status: Some(2),
                error_description: Some("unrecognised action for segment api".into()),
            })
        );
    }

    #[test]
    fn summary_ignores_non_json_bodies() {
        let reply = Reply {
            status: 502,
            body: b"<html>Bad Gateway</html>".to_vec(),
        };
        assert_eq!(reply.summary(), None);
    }
}
