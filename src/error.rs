use crate::executor::ExecutorError;
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("No repositories found in any configuration files")]
    EmptyBatch,
    #[error("no valid repository configurations found to attempt PR creation, though {present} configurations were present")]
    NoEligibleItems { present: usize },
    #[error("failed to create PR for {name}: {source}")]
    ItemFailed {
        name: String,
        #[source]
        source: ExecutorError,
    },
    #[error("PR body file '{}' for repo '{name}' exists but is unreadable", path.display())]
    BodyUnreadable {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Cannot write the run report")]
    Report(#[from] io::Error),
}
