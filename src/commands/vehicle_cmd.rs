use std::path::PathBuf;

use crate::commands::CommandError;
use crate::commands::report_format::format_vehicle_table;
use crate::domain::vehicle::{CabType, NewVehicle};
use crate::services::api_client::ConsoleApi;
use crate::services::vehicle_registry::VehicleRegistry;

pub async fn vehicles_command(api: &dyn ConsoleApi, base_url: &str, search: String) -> Result<(), CommandError> {
    let mut registry = VehicleRegistry::new(search);
    registry.load(api).await?;
    println!("{}", format_vehicle_table(&registry.filtered(), base_url));
    Ok(())
}

pub async fn add_vehicle_command(
    api: &dyn ConsoleApi,
    base_url: &str,
    vehicle_no: String,
    contact_no: String,
    cab_type: Option<CabType>,
    ownership: String,
    rc_document: Option<PathBuf>,
) -> Result<(), CommandError> {
    let vehicle = NewVehicle {
        vehicle_no,
        contact_no,
        cab_type,
        vehicle_ownership: ownership,
        rc_document,
    };
    let mut registry = VehicleRegistry::default();
    registry.add(api, &vehicle).await?;
    println!("Vehicle Added Successfully!");
    println!();
    println!("{}", format_vehicle_table(&registry.filtered(), base_url));
    Ok(())
}
