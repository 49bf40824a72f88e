use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// An outgoing call. Fields are private so a request cannot change after it is issued.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    target: String,
    method: Method,
    body: Option<Value>,
}

impl Request {
    pub fn new(method: Method, target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            method,
            body: None,
        }
    }

    pub fn get(target: impl Into<String>) -> Self {
        Self::new(Method::Get, target)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub status: u16,
    pub body: Payload,
}

impl Response {
    pub fn ok(body: Payload) -> Self {
        Self { status: 200, body }
    }
}

/// Response body, one variant per known response shape.
///
/// `Json` carries bodies that arrived over the wire and have not been
/// decoded into an endpoint type yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum Payload {
    Reports(Vec<Report>),
    Transactions(Vec<Transaction>),
    Json(Value),
}

impl Payload {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Reports(_) => "reports",
            Self::Transactions(_) => "transactions",
            Self::Json(_) => "json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: u64,
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub date: NaiveDate,
    pub amount: i64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}
