use crate::types::{Payload, Request, Response};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Performs a request for real. Implementations return the failure as-is;
/// callers decide how to present it.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &Request) -> Result<Response>;
}

#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("failed to build reqwest client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &Request) -> Result<Response> {
        debug!("[transport] {:?} {}", request.method(), request.target());
        let mut builder = self.client.request(request.method().into(), request.target());
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }
        let resp = builder
            .send()
            .await
            .with_context(|| format!("request to {} failed", request.target()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!(
                "request to {} returned status {}",
                request.target(),
                status
            ));
        }
        let bytes = resp
            .bytes()
            .await
            .context("failed to read response body")?;
        Ok(Response {
            status: status.as_u16(),
            body: Payload::Json(decode_body(&bytes)?),
        })
    }
}

fn decode_body(bytes: &[u8]) -> Result<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(bytes).context("failed to parse response body as JSON")
}
