use crate::mocks::MockRules;
use crate::transport::Transport;
use crate::types::{Request, Response};
use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

/// Sits in front of a [`Transport`] and answers matching requests from the
/// mock rule set. Anything without a matching rule goes to the transport
/// untouched, and its result (success or failure) comes back untouched.
#[derive(Clone)]
pub struct Dispatcher {
    rules: Arc<MockRules>,
    transport: Arc<dyn Transport>,
}

impl Dispatcher {
    pub fn new(rules: MockRules, transport: Arc<dyn Transport>) -> Self {
        Self {
            rules: Arc::new(rules),
            transport,
        }
    }

    /// Forward everything; no rule ever matches.
    pub fn passthrough(transport: Arc<dyn Transport>) -> Self {
        Self::new(MockRules::empty(), transport)
    }

    pub fn rules(&self) -> &MockRules {
        &self.rules
    }

    pub async fn dispatch(&self, request: &Request) -> Result<Response> {
        if let Some(rule) = self.rules.find(request.target()) {
            debug!(
                "[dispatcher] {} answered by mock rule {} ({})",
                request.target(),
                rule.suffix,
                rule.payload.kind()
            );
            return Ok(rule.respond());
        }
        debug!("[dispatcher] {} forwarded to transport", request.target());
        self.transport.send(request).await
    }
}

#[async_trait]
impl Transport for Dispatcher {
    async fn send(&self, request: &Request) -> Result<Response> {
        self.dispatch(request).await
    }
}
