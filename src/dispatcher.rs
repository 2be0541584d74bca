use crate::{
    batch::validator::EligibleItem, command::CommandLine, error::BatchError,
    executor::CommandExecutor,
};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Per-item result of a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Simulated(String),
    Succeeded,
    Failed(String),
}

/// The outcome of one dispatched item, tagged with the item name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOutcome {
    pub name: String,
    pub outcome: Outcome,
}

pub struct Dispatcher<E> {
    executor: Arc<E>,
    simulate: bool,
}

impl<E: CommandExecutor> Dispatcher<E> {
    pub fn new(executor: E, simulate: bool) -> Self {
        Dispatcher {
            executor: Arc::new(executor),
            simulate,
        }
    }

    pub fn is_simulation(&self) -> bool {
        self.simulate
    }

    /// Runs one task per item and waits for all of them.
    ///
    /// The returned outcomes are in submission order regardless of which
    /// task finished first.
    pub async fn dispatch(&self, items: Vec<EligibleItem>) -> Vec<ItemOutcome> {
        let handles: Vec<(String, JoinHandle<Outcome>)> = items
            .into_iter()
            .map(|EligibleItem { name, item }| {
                let executor = Arc::clone(&self.executor);
                let simulate = self.simulate;
                let task_name = name.to_owned();

                let handle = tokio::spawn(async move {
                    log::debug!(
                        "Processing PR for {} (base: {}, head: {})...",
                        task_name,
                        item.base,
                        item.head
                    );
                    let command = CommandLine::render(&item);

                    if simulate {
                        return Outcome::Simulated(command.preview());
                    }

                    log::info!(
                        "Creating PR for {} (base: {}, head: {})...",
                        task_name,
                        item.base,
                        item.head
                    );
                    match executor.execute(command.args()).await {
                        Ok(()) => Outcome::Succeeded,
                        Err(source) => {
                            let error = BatchError::ItemFailed {
                                name: task_name,
                                source,
                            };
                            log::error!("{}", error);
                            Outcome::Failed(error.to_string())
                        }
                    }
                });

                (name, handle)
            })
            .collect();

        let mut slots = Vec::with_capacity(handles.len());
        for (name, handle) in handles {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(join_error) => {
                    let detail = format!("task for {} panicked: {}", name, join_error);
                    log::error!("{}", detail);
                    Outcome::Failed(detail)
                }
            };

            slots.push(ItemOutcome { name, outcome });
        }

        slots
    }
}
