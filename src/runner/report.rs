use crate::executor::{ApiError, ApiResult};

use super::catalogue::UseCase;

/// What happened to one catalogue step. Failures are values here, not
/// errors: one step's outcome never decides whether the next one runs.
#[derive(Debug)]
pub enum StepOutcome {
    Completed(ApiResult),
    Failed(ApiError),
    Skipped(String),
}

#[derive(Debug)]
pub struct StepRecord {
    pub use_case: UseCase,
    pub outcome: StepOutcome,
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub records: Vec<StepRecord>,
}

impl RunReport {
    pub fn record(&self, use_case: UseCase) -> Option<&StepRecord> {
        self.records.iter().find(|r| r.use_case == use_case)
    }

    pub fn completed(&self) -> usize {
        self.count(|outcome| matches!(outcome, StepOutcome::Completed(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, StepOutcome::Failed(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|outcome| matches!(outcome, StepOutcome::Skipped(_)))
    }

    fn count(&self, predicate: impl Fn(&StepOutcome) -> bool) -> usize {
        self.records
            .iter()
            .filter(|record| predicate(&record.outcome))
            .count()
    }
}
