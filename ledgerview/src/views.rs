//! The two dashboard pages and the route table that selects between them.

use crate::api::{ApiClient, Reports, Transactions};
use crate::types::{Report, Transaction};
use crate::view_model::{FetchState, ViewModel};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Reports,
}

impl Route {
    /// Empty and unknown paths land on the dashboard.
    pub fn resolve(path: &str) -> Self {
        match path.trim_matches('/') {
            "reports" => Self::Reports,
            _ => Self::Dashboard,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Reports => "reports",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
}

pub const DASHBOARD_STATS: [StatCard; 2] = [
    StatCard {
        label: "Total Revenue",
        value: "$10,000",
    },
    StatCard {
        label: "Total Expenses",
        value: "$4,500",
    },
];

pub struct DashboardView {
    transactions: ViewModel<Transactions>,
}

impl DashboardView {
    pub fn new(api: ApiClient) -> Self {
        Self {
            transactions: ViewModel::new("dashboard", "Failed to load transactions", api),
        }
    }

    pub fn stats(&self) -> &'static [StatCard] {
        &DASHBOARD_STATS
    }

    pub async fn load(&mut self) -> &FetchState<Vec<Transaction>> {
        self.transactions.load().await
    }

    pub fn transactions(&self) -> &FetchState<Vec<Transaction>> {
        self.transactions.state()
    }
}

pub struct ReportsView {
    reports: ViewModel<Reports>,
}

impl ReportsView {
    pub fn new(api: ApiClient) -> Self {
        Self {
            reports: ViewModel::new("reports", "Failed to load reports", api),
        }
    }

    pub async fn load(&mut self) -> &FetchState<Vec<Report>> {
        self.reports.load().await
    }

    pub fn reports(&self) -> &FetchState<Vec<Report>> {
        self.reports.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::Dispatcher;
    use crate::mocks::MockRules;
    use crate::transport::HttpTransport;
    use std::sync::Arc;

    fn mocked_api() -> ApiClient {
        let transport = Arc::new(HttpTransport::new(None).unwrap());
        ApiClient::new(
            "http://localhost:5000/api",
            Dispatcher::new(MockRules::builtin(), transport),
        )
    }

    #[test]
    fn routes_resolve() {
        assert_eq!(Route::resolve(""), Route::Dashboard);
        assert_eq!(Route::resolve("/"), Route::Dashboard);
        assert_eq!(Route::resolve("dashboard"), Route::Dashboard);
        assert_eq!(Route::resolve("/reports/"), Route::Reports);
        assert_eq!(Route::resolve("settings"), Route::Dashboard);
        assert_eq!(Route::resolve(Route::Reports.path()), Route::Reports);
    }

    #[tokio::test]
    async fn dashboard_loads_transactions() {
        let mut view = DashboardView::new(mocked_api());
        assert!(view.transactions().is_loading());

        view.load().await;

        assert_eq!(view.stats()[0].value, "$10,000");
        assert_eq!(view.transactions().data().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn reports_view_loads_reports() {
        let mut view = ReportsView::new(mocked_api());
        let state = view.load().await;
        assert_eq!(state.data().unwrap()[0].id, 1);
    }
}
