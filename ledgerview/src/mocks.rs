//! Canned responses used by the development interceptor.
//!
//! A rule set is plain data: an ordered list of path suffixes, each with the
//! status and payload to answer with. Rule sets come either from
//! [`MockRules::builtin`] or from a YAML fixture file.

use crate::types::{Payload, Report, Response, Transaction, TransactionKind};
use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;

fn default_status() -> u16 {
    200
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MockRule {
    pub suffix: String,
    /// Reported on the response as-is; a non-2xx status does not turn the
    /// canned payload into a failure.
    #[serde(default = "default_status")]
    pub status: u16,
    pub payload: Payload,
}

impl MockRule {
    pub fn new(suffix: impl Into<String>, payload: Payload) -> Self {
        Self {
            suffix: suffix.into(),
            status: default_status(),
            payload,
        }
    }

    pub fn matches(&self, target: &str) -> bool {
        target.ends_with(&self.suffix)
    }

    pub fn respond(&self) -> Response {
        Response {
            status: self.status,
            body: self.payload.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MockRules {
    #[serde(default)]
    rules: Vec<MockRule>,
}

impl MockRules {
    pub fn new(rules: Vec<MockRule>) -> Result<Self> {
        let set = Self { rules };
        set.validate()?;
        Ok(set)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The rule set served in development mode: quarterly reports and two
    /// sample transactions.
    pub fn builtin() -> Self {
        Self {
            rules: vec![
                MockRule::new(
                    "/reports",
                    Payload::Reports(vec![
                        Report {
                            id: 1,
                            name: "Q1 Report".to_string(),
                            value: 12500,
                        },
                        Report {
                            id: 2,
                            name: "Q2 Report".to_string(),
                            value: 15000,
                        },
                    ]),
                ),
                MockRule::new(
                    "/transactions",
                    Payload::Transactions(vec![
                        Transaction {
                            id: 1,
                            date: date(2023, 1, 15),
                            amount: 1200,
                            kind: TransactionKind::Income,
                        },
                        Transaction {
                            id: 2,
                            date: date(2023, 1, 20),
                            amount: 500,
                            kind: TransactionKind::Expense,
                        },
                    ]),
                ),
            ],
        }
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        let set: Self = serde_yaml::from_str(text).context("invalid mock rule YAML")?;
        set.validate()?;
        Ok(set)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read mock rules {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("in {}", path.display()))
    }

    /// First rule whose suffix the target ends with.
    pub fn find(&self, target: &str) -> Option<&MockRule> {
        self.rules.iter().find(|rule| rule.matches(target))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn validate(&self) -> Result<()> {
        for (idx, rule) in self.rules.iter().enumerate() {
            if rule.suffix.is_empty() {
                bail!("mock rule #{idx} has an empty suffix");
            }
            if !(100..=599).contains(&rule.status) {
                bail!("mock rule #{idx} has invalid status {}", rule.status);
            }
        }
        Ok(())
    }
}

// Literal dates only; `from_ymd_opt` is None solely for out-of-range input.
fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn builtin_reports_rule() {
        let rules = MockRules::builtin();
        let rule = rules.find("http://localhost:5000/api/reports").unwrap();
        let resp = rule.respond();
        assert_eq!(resp.status, 200);
        match resp.body {
            Payload::Reports(reports) => {
                assert_eq!(reports.len(), 2);
                assert_eq!(reports[0].name, "Q1 Report");
                assert_eq!(reports[0].value, 12500);
                assert_eq!(reports[1].name, "Q2 Report");
                assert_eq!(reports[1].value, 15000);
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn builtin_transactions_rule() {
        let rules = MockRules::builtin();
        let rule = rules.find("/api/transactions").unwrap();
        let Payload::Transactions(txs) = rule.respond().body else {
            panic!("expected transactions");
        };
        let kinds: Vec<_> = txs.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TransactionKind::Income, TransactionKind::Expense]);
        assert_eq!(txs[0].date.to_string(), "2023-01-15");
    }

    #[test]
    fn suffix_must_be_at_the_end() {
        let rules = MockRules::builtin();
        assert!(rules.find("/api/reports/2024").is_none());
        assert!(rules.find("/api/users").is_none());
    }

    #[test]
    fn first_match_wins() {
        let rules = MockRules::new(vec![
            MockRule::new("/q1/reports", Payload::Reports(Vec::new())),
            MockRule::new("/reports", Payload::Json(serde_json::json!("fallback"))),
        ])
        .unwrap();
        assert_eq!(
            rules.find("/api/q1/reports").unwrap().suffix,
            "/q1/reports"
        );
        assert_eq!(rules.find("/api/reports").unwrap().suffix, "/reports");
    }

    #[test]
    fn loads_rules_from_yaml_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
rules:
  - suffix: /reports
    payload:
      kind: reports
      items:
        - {{ id: 3, name: Q3 Report, value: 9000 }}
  - suffix: /health
    status: 204
    payload:
      kind: json
      items: null
"#
        )
        .unwrap();

        let rules = MockRules::from_path(file.path()).unwrap();
        assert_eq!(rules.len(), 2);
        let health = rules.find("/api/health").unwrap().respond();
        assert_eq!(health.status, 204);
        assert_eq!(health.body, Payload::Json(serde_json::Value::Null));
    }

    #[test]
    fn shipped_fixture_matches_builtin() {
        let shipped = MockRules::from_yaml(include_str!("../../configs/mocks.yaml")).unwrap();
        assert_eq!(shipped, MockRules::builtin());
    }

    #[test]
    fn empty_suffix_is_rejected() {
        let err = MockRules::from_yaml(
            "rules:\n  - suffix: ''\n    payload: { kind: json, items: 1 }\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("empty suffix"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = MockRules::from_path(Path::new("/nonexistent/mocks.yaml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/mocks.yaml"));
    }
}
