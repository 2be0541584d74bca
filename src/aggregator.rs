use crate::dispatcher::{ItemOutcome, Outcome};

/// Summary of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    attempted: usize,
    any_failure: bool,
    first_failure: Option<String>,
}

impl BatchResult {
    pub fn attempted(&self) -> usize {
        self.attempted
    }

    pub fn any_failure(&self) -> bool {
        self.any_failure
    }

    /// Detail of the earliest submitted item that failed.
    pub fn first_failure(&self) -> Option<&str> {
        self.first_failure.as_deref()
    }
}

/// Outcomes must be in submission order; "first" failure is the first one
/// in that order, not the first one to finish.
pub fn aggregate(outcomes: &[ItemOutcome]) -> BatchResult {
    let mut failures = outcomes.iter().filter_map(|o| match &o.outcome {
        Outcome::Failed(detail) => Some(detail),
        Outcome::Simulated(_) | Outcome::Succeeded => None,
    });

    let first_failure = failures.next().cloned();

    BatchResult {
        attempted: outcomes.len(),
        any_failure: first_failure.is_some(),
        first_failure,
    }
}
