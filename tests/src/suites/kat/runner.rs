//! Generic driver that executes a `TestSuite` using a pluggable engine

use tracing::{info, warn};

use super::error::{KatError, Result};
use super::model::{TestCase, TestGroup, TestSuite};

/// Trait every back-end under test implements
pub trait KatEngine {
    /// Execute one case; `Ok(())` means every expected output matched
    fn run(&self, suite: &TestSuite, group: &TestGroup, case: &TestCase) -> Result<()>;
}

/// Tally of one suite run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
}

/// Walks suites and tallies results
pub struct Runner<'e, E: KatEngine> {
    engine: &'e E,
}

impl<'e, E: KatEngine> Runner<'e, E> {
    pub fn new(engine: &'e E) -> Self {
        Self { engine }
    }

    pub fn run_suite(&self, suite: &TestSuite) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for group in &suite.groups {
            info!(
                suite = %suite.algorithm,
                group = group.group_id,
                test_type = %group.test_type,
                direction = group.direction.as_deref().unwrap_or("-"),
                cases = group.tests.len(),
                "running group"
            );

            for case in &group.tests {
                match (self.engine.run(suite, group, case), case.expects_failure()) {
                    (Ok(()), false) | (Err(_), true) => summary.passed += 1,
                    (Ok(()), true) => {
                        summary.failed += 1;
                        warn!(case = case.test_id, "case succeeded but was expected to fail");
                    }
                    (Err(e), false) => {
                        summary.failed += 1;
                        warn!(case = case.test_id, error = %e, "case failed");
                    }
                }
            }
        }

        info!(suite = %suite.algorithm, passed = summary.passed, failed = summary.failed, "suite done");
        if summary.failed > 0 {
            return Err(KatError::Failed {
                failed: summary.failed,
                total: summary.passed + summary.failed,
            });
        }
        Ok(summary)
    }
}
