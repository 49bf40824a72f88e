use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::mocks::MockRules;
use crate::transport::HttpTransport;
use crate::types::{Payload, Report, Request, Transaction};
use anyhow::{Context, Result, anyhow};
use log::info;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// A GET endpoint under the API base URL and the typed data it returns.
pub trait Endpoint {
    type Data: DeserializeOwned + Send;

    const PATH: &'static str;

    /// Pull this endpoint's data out of a payload. Untyped JSON is
    /// deserialized; a typed payload of a different shape is an error.
    fn extract(payload: Payload) -> Result<Self::Data>;
}

pub struct Reports;

impl Endpoint for Reports {
    type Data = Vec<Report>;
    const PATH: &'static str = "/reports";

    fn extract(payload: Payload) -> Result<Self::Data> {
        match payload {
            Payload::Reports(reports) => Ok(reports),
            Payload::Json(value) => serde_json::from_value(value).context("malformed reports body"),
            other => Err(anyhow!("expected reports, got {}", other.kind())),
        }
    }
}

pub struct Transactions;

impl Endpoint for Transactions {
    type Data = Vec<Transaction>;
    const PATH: &'static str = "/transactions";

    fn extract(payload: Payload) -> Result<Self::Data> {
        match payload {
            Payload::Transactions(txs) => Ok(txs),
            Payload::Json(value) => {
                serde_json::from_value(value).context("malformed transactions body")
            }
            other => Err(anyhow!("expected transactions, got {}", other.kind())),
        }
    }
}

/// Typed access to the dashboard API. Construct one and hand clones to the
/// views that need it.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Arc<str>,
    dispatcher: Dispatcher,
}

impl ApiClient {
    pub fn new(base_url: &str, dispatcher: Dispatcher) -> Self {
        Self {
            base_url: Arc::from(base_url.trim_end_matches('/')),
            dispatcher,
        }
    }

    /// Wire transport, mock rules and base URL from configuration.
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let timeout = cfg.api.timeout();
        if let Some(timeout) = timeout {
            info!("[api] request timeout {} ms", timeout.as_millis());
        }
        let transport = Arc::new(HttpTransport::new(timeout)?);
        let dispatcher = if cfg.mock.enabled {
            let rules = match &cfg.mock.rules_path {
                Some(path) => MockRules::from_path(path)?,
                None => MockRules::builtin(),
            };
            info!("[api] mock interceptor enabled with {} rules", rules.len());
            Dispatcher::new(rules, transport)
        } else {
            Dispatcher::passthrough(transport)
        };
        Ok(Self::new(&cfg.api.base_url, dispatcher))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue one GET for the endpoint and decode the body.
    ///
    /// Only the transport judges status codes. A mock rule answering with a
    /// non-2xx status still settles as success, the same as the development
    /// interceptor it replaces, so canned error pages need a transport.
    pub async fn fetch<E: Endpoint>(&self) -> Result<E::Data> {
        let request = Request::get(self.url_for(E::PATH));
        let response = self.dispatcher.dispatch(&request).await?;
        E::extract(response.body)
    }

    pub async fn transactions(&self) -> Result<Vec<Transaction>> {
        self.fetch::<Transactions>().await
    }

    pub async fn reports(&self) -> Result<Vec<Report>> {
        self.fetch::<Reports>().await
    }
}
