use std::io::{self, BufRead, Write};

use crate::commands::CommandError;
use crate::commands::report_format::{format_locality_table, format_reference_list};
use crate::services::api_client::{ApiError, ConsoleApi};
use crate::services::locality_checker::{LocalityCheck, check_locality};
use crate::services::locality_table::LocalityTable;
use crate::services::master_locality::MasterLocalityForm;
use crate::services::reference_list::ReferenceList;

pub async fn localities_command(
    api: &dyn ConsoleApi,
    page: u32,
    search: String,
    browse: bool,
) -> Result<(), CommandError> {
    let mut table = LocalityTable::new(search);
    table.load(api, page).await?;
    if browse {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        return browse_locality_table(api, &mut table, stdin.lock(), &mut stdout).await;
    }
    println!("{}", format_locality_table(&table));
    Ok(())
}

/// Pages through an already loaded table from line-based input.
pub async fn browse_locality_table<R: BufRead, W: Write>(
    api: &dyn ConsoleApi,
    table: &mut LocalityTable,
    input: R,
    out: &mut W,
) -> Result<(), CommandError> {
    writeln!(out, "{}", format_locality_table(table))?;
    for line in input.lines() {
        let line = line?;
        let moved = match line.trim() {
            "" => continue,
            "q" | "quit" => break,
            "n" | "next" => table.next_page(api).await,
            "p" | "prev" => table.previous_page(api).await,
            other => {
                writeln!(out, "Unknown command '{other}'. Use n, p or q.")?;
                continue;
            }
        };
        match moved {
            Ok(true) => writeln!(out, "{}", format_locality_table(table))?,
            Ok(false) => writeln!(out, "No more pages that way.")?,
            Err(err) => writeln!(out, "Error: {err}")?,
        }
    }
    Ok(())
}

/// Inline edit of a single table row.
pub async fn remap_command(
    api: &dyn ConsoleApi,
    address_id: u64,
    locality: &str,
    page: u32,
    search: String,
) -> Result<(), CommandError> {
    let reference = ReferenceList::load(api).await?;
    let locality_id = reference
        .resolve(locality)
        .map(|found| found.id)
        .ok_or_else(|| ApiError::Validation(format!("Unknown locality '{locality}'.")))?;

    let mut table = LocalityTable::new(search);
    table.load(api, page).await?;
    table.start_editing(address_id, &reference)?;
    table.select_edit_locality(Some(locality_id));
    table.save_edit(api).await?;

    println!("Address #{address_id} mapped to locality #{locality_id}.");
    println!();
    println!("{}", format_locality_table(&table));
    Ok(())
}

pub async fn add_locality_command(api: &dyn ConsoleApi, name: String, zone: String) -> Result<(), CommandError> {
    let mut reference = ReferenceList::load(api).await?;
    let mut form = MasterLocalityForm::new(name, zone);
    let message = form.submit(api, &mut reference).await?;
    println!("{message}");
    println!("Master list now has {} localities.", reference.localities().len());
    Ok(())
}

pub async fn zones_command(api: &dyn ConsoleApi) -> Result<(), CommandError> {
    let reference = ReferenceList::load(api).await?;
    let zones = reference.zones();
    if zones.is_empty() {
        println!("No zones available.");
    }
    for zone in zones {
        println!("{zone}");
    }
    Ok(())
}

pub async fn check_locality_command(api: &dyn ConsoleApi, name: &str) -> Result<(), CommandError> {
    let reference = ReferenceList::load(api).await?;
    match check_locality(name, &reference)? {
        LocalityCheck::Valid(locality) => {
            println!("Valid Locality: {} (#{})", locality.locality_name, locality.id);
            println!(
                "Zone: {}  KM: {}",
                locality.billing_zone.as_deref().unwrap_or("-"),
                crate::domain::locality::format_km(locality.billing_km)
            );
        }
        LocalityCheck::NotFound => println!("Invalid / Not Found: {}", name.trim()),
    }
    Ok(())
}

pub async fn reference_command(api: &dyn ConsoleApi) -> Result<(), CommandError> {
    let reference = ReferenceList::load(api).await?;
    println!("{}", format_reference_list(&reference));
    Ok(())
}
