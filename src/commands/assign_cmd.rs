use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::commands::CommandError;
use crate::commands::report_format::{format_bulk_results, format_pending_card, format_reference_list};
use crate::services::api_client::{ApiError, ConsoleApi};
use crate::services::assignment::PendingAssignment;
use crate::services::bulk_assignment::BulkAssignment;
use crate::services::reference_list::ReferenceList;

const HELP: &str = "Enter a locality id or name to select it, 's' to save & next, \
'k' to skip to a fresh pending item, 'l' to list localities, 'q' to quit.";

pub async fn assign_command(api: &dyn ConsoleApi) -> Result<(), CommandError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_assignment_session(api, stdin.lock(), &mut stdout).await?;
    Ok(())
}

/// Drives the pending-address loop from line-based input. Returns how many
/// addresses were mapped.
pub async fn run_assignment_session<R: BufRead, W: Write>(
    api: &dyn ConsoleApi,
    input: R,
    out: &mut W,
) -> Result<usize, CommandError> {
    let mut assignment = PendingAssignment::start(api).await?;
    writeln!(out, "{}", format_pending_card(&assignment))?;
    if assignment.current().is_none() {
        return Ok(0);
    }
    writeln!(out, "{HELP}")?;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            "" => continue,
            "q" | "quit" => break,
            "?" | "help" => writeln!(out, "{HELP}")?,
            "l" | "list" => writeln!(out, "{}", format_reference_list(assignment.reference()))?,
            "s" | "save" => {
                match assignment.save(api).await {
                    Ok(()) => writeln!(out, "Saved.")?,
                    Err(err) => {
                        warn!(error = %err, "assignment not saved");
                        writeln!(out, "Error: {err}")?;
                    }
                }
                writeln!(out, "{}", format_pending_card(&assignment))?;
                if assignment.current().is_none() {
                    break;
                }
            }
            "k" | "skip" | "r" | "reload" => {
                if let Err(err) = assignment.fetch_next(api).await {
                    writeln!(out, "Error: {err}")?;
                }
                writeln!(out, "{}", format_pending_card(&assignment))?;
                if assignment.current().is_none() {
                    break;
                }
            }
            key => {
                if assignment.select_key(key) {
                    writeln!(out, "{}", format_pending_card(&assignment))?;
                } else {
                    writeln!(out, "Unknown locality '{key}'.")?;
                }
            }
        }
    }

    writeln!(out, "Mapped {} address(es).", assignment.saved_count())?;
    Ok(assignment.saved_count())
}

pub async fn bulk_search_command(api: &dyn ConsoleApi, query: String, page: u32) -> Result<(), CommandError> {
    let mut bulk = BulkAssignment::new(query);
    bulk.run_search(api, page).await?;
    println!("{}", format_bulk_results(&bulk));
    Ok(())
}

/// Maps explicit ids, or every match of `query` on `page`, to one locality.
pub async fn bulk_assign_command(
    api: &dyn ConsoleApi,
    ids: Vec<u64>,
    query: Option<String>,
    page: u32,
    locality: &str,
) -> Result<(), CommandError> {
    let reference = ReferenceList::load(api).await?;
    let locality_id = reference
        .resolve(locality)
        .map(|found| found.id)
        .ok_or_else(|| ApiError::Validation(format!("Unknown locality '{locality}'.")))?;

    let mut bulk = BulkAssignment::default();
    if let Some(query) = query {
        bulk.search = query;
        bulk.run_search(api, page).await?;
        bulk.select_all();
    } else {
        for id in ids {
            bulk.toggle(id);
        }
    }
    bulk.set_target(Some(locality_id));

    let count = bulk.save(api).await?;
    println!("Updated {count} addresses!");
    Ok(())
}
