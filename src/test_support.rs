use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::locality::{LocalityPage, LocalityRow, MasterLocality, PendingAddress, PendingPage};
use crate::domain::pagination::Pagination;
use crate::domain::report::{BillingMonth, DashboardData};
use crate::domain::session::{Credentials, LoginOutcome};
use crate::domain::vehicle::{NewVehicle, Vehicle};
use crate::services::api_client::{ApiError, ConsoleApi};

/// In-memory `ConsoleApi` that records every call it receives.
#[derive(Default)]
pub struct RecordingApi {
    calls: Mutex<Vec<String>>,
    pub login_outcome: LoginOutcome,
    pub dashboard: DashboardData,
    pub locality_pages: HashMap<u32, LocalityPage>,
    pub fail_localities: bool,
    pub masters: Mutex<Vec<MasterLocality>>,
    pub pending: Mutex<VecDeque<PendingAddress>>,
    pub save_failures: Mutex<VecDeque<String>>,
    pub pending_search: PendingPage,
    pub vehicles: Mutex<Vec<Vehicle>>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }
}

#[async_trait]
impl ConsoleApi for RecordingApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome, ApiError> {
        self.record(format!("login {}", credentials.username));
        Ok(self.login_outcome.clone())
    }

    async fn dashboard_data(&self, month: BillingMonth) -> Result<DashboardData, ApiError> {
        self.record(format!("dashboard {month}"));
        Ok(self.dashboard.clone())
    }

    async fn localities(&self, page: u32, search: &str) -> Result<LocalityPage, ApiError> {
        self.record(format!("localities page={page} search={search}"));
        if self.fail_localities {
            return Err(ApiError::Connection);
        }
        Ok(self.locality_pages.get(&page).cloned().unwrap_or_default())
    }

    async fn dropdown_localities(&self) -> Result<Vec<MasterLocality>, ApiError> {
        self.record("dropdown".to_string());
        Ok(self.masters.lock().unwrap().clone())
    }

    async fn next_pending(&self) -> Result<Option<PendingAddress>, ApiError> {
        self.record("next_pending".to_string());
        Ok(self.pending.lock().unwrap().pop_front())
    }

    async fn save_mapping(&self, address_id: u64, locality_id: u64) -> Result<(), ApiError> {
        self.record(format!("save_mapping {address_id}->{locality_id}"));
        match self.save_failures.lock().unwrap().pop_front() {
            Some(reason) => Err(ApiError::Rejected(reason)),
            None => Ok(()),
        }
    }

    async fn search_pending(&self, query: &str, page: u32) -> Result<PendingPage, ApiError> {
        self.record(format!("search_pending q={query} page={page}"));
        Ok(self.pending_search.clone())
    }

    async fn bulk_save(&self, address_ids: &[u64], locality_id: u64) -> Result<u64, ApiError> {
        self.record(format!("bulk_save {address_ids:?}->{locality_id}"));
        Ok(address_ids.len() as u64)
    }

    async fn add_master_locality(
        &self,
        locality_name: &str,
        zone_name: &str,
    ) -> Result<String, ApiError> {
        self.record(format!("add_master {locality_name}@{zone_name}"));
        let mut masters = self.masters.lock().unwrap();
        let id = masters.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        masters.push(master(id, locality_name, zone_name, 0.0));
        Ok(format!("Locality '{locality_name}' added to {zone_name}"))
    }

    async fn vehicles(&self) -> Result<Vec<Vehicle>, ApiError> {
        self.record("vehicles".to_string());
        Ok(self.vehicles.lock().unwrap().clone())
    }

    async fn add_vehicle(&self, vehicle: &NewVehicle) -> Result<(), ApiError> {
        self.record(format!("add_vehicle {}", vehicle.vehicle_no));
        let mut vehicles = self.vehicles.lock().unwrap();
        let id = vehicles.len() as u64 + 1;
        vehicles.push(Vehicle {
            id,
            vehicle_no: vehicle.vehicle_no.clone(),
            contact_no: Some(vehicle.contact_no.clone()).filter(|c| !c.is_empty()),
            cab_type: vehicle.cab_type.map(|cab| cab.as_str().to_string()),
            ownership: Some(vehicle.vehicle_ownership.clone()).filter(|o| !o.is_empty()),
            rc_document: None,
        });
        Ok(())
    }
}

pub fn master(id: u64, name: &str, zone: &str, km: f64) -> MasterLocality {
    MasterLocality {
        id,
        locality_name: name.to_string(),
        billing_zone: Some(zone.to_string()),
        billing_km: Some(km),
    }
}

pub fn pending(id: u64, address: &str) -> PendingAddress {
    PendingAddress {
        id,
        address: address.to_string(),
    }
}

pub fn locality_row(id: u64, address: &str, locality: Option<&str>) -> LocalityRow {
    LocalityRow {
        id,
        address: address.to_string(),
        locality: locality.map(str::to_string),
        ..LocalityRow::default()
    }
}

pub fn locality_page(rows: Vec<LocalityRow>, page: u32, total_pages: u32) -> LocalityPage {
    let total_records = rows.len() as u64;
    LocalityPage {
        results: rows,
        pagination: Pagination {
            current_page: page,
            total_pages,
            total_records,
        },
        global_pending: 42,
    }
}
