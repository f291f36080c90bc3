use tracing::info;

use crate::domain::vehicle::{NewVehicle, Vehicle};
use crate::services::api_client::{ApiError, ConsoleApi};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleRegistry {
    vehicles: Vec<Vehicle>,
    filter: String,
}

impl VehicleRegistry {
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            vehicles: Vec::new(),
            filter: filter.into(),
        }
    }

    pub async fn load(&mut self, api: &dyn ConsoleApi) -> Result<(), ApiError> {
        self.vehicles = api.vehicles().await?;
        Ok(())
    }

    pub fn filtered(&self) -> Vec<&Vehicle> {
        self.vehicles
            .iter()
            .filter(|vehicle| vehicle.matches(&self.filter))
            .collect()
    }

    /// Registers a vehicle and reloads the list.
    pub async fn add(&mut self, api: &dyn ConsoleApi, vehicle: &NewVehicle) -> Result<(), ApiError> {
        if vehicle.vehicle_no.trim().is_empty() {
            return Err(ApiError::Validation("Vehicle Number is required.".to_string()));
        }
        if let Some(path) = &vehicle.rc_document {
            if !path.is_file() {
                return Err(ApiError::Validation(format!(
                    "RC document {} does not exist.",
                    path.display()
                )));
            }
        }
        api.add_vehicle(vehicle).await?;
        info!(vehicle_no = %vehicle.vehicle_no, "vehicle added");
        self.load(api).await
    }
}

/// Absolute link to an uploaded RC document.
pub fn document_url(base_url: &str, document: &str) -> String {
    if document.starts_with("http://") || document.starts_with("https://") {
        return document.to_string();
    }
    let base = base_url.trim_end_matches('/');
    if document.starts_with('/') {
        format!("{base}{document}")
    } else {
        format!("{base}/{document}")
    }
}
