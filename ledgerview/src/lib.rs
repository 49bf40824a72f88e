pub mod api;
pub mod config;
pub mod dispatcher;
pub mod mocks;
pub mod transport;
pub mod types;
pub mod view_model;
pub mod views;

pub use api::{ApiClient, Endpoint};
pub use config::{ApiConfig, Config, LoggingConfig, MockConfig};
pub use dispatcher::Dispatcher;
pub use mocks::{MockRule, MockRules};
pub use transport::{HttpTransport, Transport};
pub use types::{Method, Payload, Report, Request, Response, Transaction, TransactionKind};
pub use view_model::{FetchState, ViewModel};
pub use views::{DashboardView, ReportsView, Route};
