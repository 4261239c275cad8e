//! Sequential scenario runner
//!
//! Runs scenarios one after another against a [`PostsClient`]. A failing
//! case is recorded and the next case still runs; nothing is retried.

use std::time::Instant;

use postcheck_client::{ClientError, PostsClient};
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::assertions::AssertionError;
use crate::scenarios::Scenario;

/// Why a case failed
#[derive(Error, Debug)]
pub enum CaseError {
    /// The response did not meet the expectation
    #[error(transparent)]
    Assertion(#[from] AssertionError),

    /// The request never produced a response
    #[error(transparent)]
    Transport(#[from] ClientError),
}

/// Outcome of one case
#[derive(Debug)]
pub struct CaseOutcome {
    pub name: String,
    pub duration_ms: u128,
    pub error: Option<CaseError>,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.error.is_none()
    }
}

/// Summary report for a run
#[derive(Debug, Default)]
pub struct RunReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u128,
    pub outcomes: Vec<CaseOutcome>,
}

impl RunReport {
    /// Whether every case passed
    pub fn success(&self) -> bool {
        self.failed == 0
    }

    /// Outcomes of the failed cases
    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed())
    }

    /// One-line summary
    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed, {} total in {} ms",
            self.passed, self.failed, self.total, self.duration_ms
        )
    }

    fn record(&mut self, outcome: CaseOutcome) {
        self.total += 1;
        if outcome.passed() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.outcomes.push(outcome);
    }
}

/// Runs scenarios against one target
#[derive(Debug, Clone)]
pub struct Runner {
    client: PostsClient,
}

impl Runner {
    pub fn new(client: PostsClient) -> Self {
        Self { client }
    }

    /// Send one scenario's request and verify the response
    #[instrument(skip_all, fields(case = %scenario.name))]
    pub async fn run_one(&self, scenario: &Scenario) -> Result<(), CaseError> {
        let response = self.client.send(scenario.request.clone()).await?;
        scenario.verify(&response)?;
        Ok(())
    }

    /// Run every scenario in order
    pub async fn run(&self, scenarios: &[Scenario]) -> RunReport {
        let started = Instant::now();
        let mut report = RunReport::default();

        info!(
            base_url = %self.client.config().base_url,
            cases = scenarios.len(),
            "Running posts suite"
        );

        for scenario in scenarios {
            let case_started = Instant::now();
            let error = self.run_one(scenario).await.err();
            let duration_ms = case_started.elapsed().as_millis();

            match &error {
                None => info!(case = %scenario.name, duration_ms = duration_ms as u64, "PASS"),
                Some(e) => warn!(
                    case = %scenario.name,
                    duration_ms = duration_ms as u64,
                    error = %e,
                    "FAIL"
                ),
            }

            report.record(CaseOutcome {
                name: scenario.name.clone(),
                duration_ms,
                error,
            });
        }

        report.duration_ms = started.elapsed().as_millis();
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(name: &str, error: Option<CaseError>) -> CaseOutcome {
        CaseOutcome {
            name: name.to_string(),
            duration_ms: 1,
            error,
        }
    }

    #[test]
    fn test_report_counts() {
        let mut report = RunReport::default();
        report.record(outcome("a", None));
        report.record(outcome(
            "b",
            Some(AssertionError::MissingKey("title".to_string()).into()),
        ));
        report.record(outcome("c", None));

        assert_eq!(report.total, 3);
        assert_eq!(report.passed, 2);
        assert_eq!(report.failed, 1);
        assert!(!report.success());

        let failed: Vec<_> = report.failures().map(|o| o.name.as_str()).collect();
        assert_eq!(failed, vec!["b"]);
    }

    #[test]
    fn test_empty_report_is_success() {
        let report = RunReport::default();
        assert!(report.success());
        assert_eq!(report.summary(), "0 passed, 0 failed, 0 total in 0 ms");
    }

    #[test]
    fn test_case_error_message_is_transparent() {
        let error: CaseError = AssertionError::UnexpectedStatusCode {
            expected: 200,
            actual: 500,
        }
        .into();
        assert_eq!(error.to_string(), "expected status 200, got 500");
    }
}
