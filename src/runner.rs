use crate::{
    aggregator::{self, BatchResult},
    batch::{validator, Batch},
    dispatcher::{Dispatcher, ItemOutcome, Outcome},
    error::BatchError,
    executor::CommandExecutor,
};
use std::io::Write;

/// Runs a merged batch and writes one report line per dispatched item to `out`.
///
/// Batch-level problems are returned as errors before anything is dispatched;
/// item failures only show up in the returned [`BatchResult`].
pub async fn run<E, W>(
    mut batch: Batch,
    dispatcher: &Dispatcher<E>,
    out: &mut W,
) -> Result<BatchResult, BatchError>
where
    E: CommandExecutor,
    W: Write,
{
    validator::resolve_bodies(&mut batch).await;
    let eligible = validator::eligible_items(batch)?;

    log::info!(
        "{} {} pull request(s)",
        if dispatcher.is_simulation() {
            "Simulating"
        } else {
            "Creating"
        },
        eligible.len()
    );

    let outcomes = dispatcher.dispatch(eligible).await;
    report(&outcomes, out)?;

    Ok(aggregator::aggregate(&outcomes))
}

fn report<W: Write>(outcomes: &[ItemOutcome], out: &mut W) -> Result<(), BatchError> {
    for ItemOutcome { name, outcome } in outcomes {
        match outcome {
            Outcome::Simulated(preview) => writeln!(out, "DRY RUN: Would execute: {}", preview)?,
            Outcome::Succeeded => writeln!(out, "PR created for {} successfully!", name)?,
            Outcome::Failed(_) => {}
        }
    }
    out.flush()?;

    Ok(())
}
