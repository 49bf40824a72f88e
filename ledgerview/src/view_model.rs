use crate::api::{ApiClient, Endpoint};
use log::{debug, warn};
use serde::Serialize;

/// View-facing state of one fetch.
///
/// Starts out loading. Settles into either `data` or `error`, never both,
/// and `loading` is false once settled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchState<T> {
    loading: bool,
    error: Option<String>,
    data: Option<T>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FetchState<T> {
    pub fn new() -> Self {
        Self {
            loading: true,
            error: None,
            data: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    // Data from an earlier settlement stays visible while reloading.
    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn succeed(&mut self, data: T) {
        self.loading = false;
        self.error = None;
        self.data = Some(data);
    }

    fn fail(&mut self, message: &str) {
        self.loading = false;
        self.data = None;
        self.error = Some(message.to_string());
    }
}

/// Owns the [`FetchState`] for one endpoint and drives it through a load.
pub struct ViewModel<E: Endpoint> {
    name: &'static str,
    failure_message: &'static str,
    api: ApiClient,
    state: FetchState<E::Data>,
}

impl<E: Endpoint> ViewModel<E> {
    pub fn new(name: &'static str, failure_message: &'static str, api: ApiClient) -> Self {
        Self {
            name,
            failure_message,
            api,
            state: FetchState::new(),
        }
    }

    pub fn state(&self) -> &FetchState<E::Data> {
        &self.state
    }

    /// Issue one request and settle the state. The failure cause goes to
    /// the log; the state only carries the fixed user-facing message.
    pub async fn load(&mut self) -> &FetchState<E::Data> {
        self.state.begin();
        match self.api.fetch::<E>().await {
            Ok(data) => {
                debug!("[{}] loaded {}", self.name, E::PATH);
                self.state.succeed(data);
            }
            Err(err) => {
                warn!("[{}] failed to fetch {}: {err:#}", self.name, E::PATH);
                self.state.fail(self.failure_message);
            }
        }
        &self.state
    }
}
