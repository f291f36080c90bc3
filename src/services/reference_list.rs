use std::collections::BTreeSet;

use tracing::warn;

use crate::domain::locality::MasterLocality;
use crate::services::api_client::{ApiError, ConsoleApi};

/// Local copy of `/api/dropdown-localities/`. Lookups never hit the network.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceList {
    localities: Vec<MasterLocality>,
}

impl ReferenceList {
    pub fn new(localities: Vec<MasterLocality>) -> Self {
        Self { localities }
    }

    pub async fn load(api: &dyn ConsoleApi) -> Result<Self, ApiError> {
        Ok(Self::new(api.dropdown_localities().await?))
    }

    /// Screens stay usable without the dropdown; they just have nothing to pick.
    pub async fn load_or_empty(api: &dyn ConsoleApi) -> Self {
        match Self::load(api).await {
            Ok(list) => list,
            Err(err) => {
                warn!(error = %err, "failed to load locality dropdown");
                Self::default()
            }
        }
    }

    pub fn localities(&self) -> &[MasterLocality] {
        &self.localities
    }

    pub fn is_empty(&self) -> bool {
        self.localities.is_empty()
    }

    pub fn find(&self, id: u64) -> Option<&MasterLocality> {
        self.localities.iter().find(|locality| locality.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&MasterLocality> {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        self.localities
            .iter()
            .find(|locality| locality.locality_name.trim().to_lowercase() == wanted)
    }

    /// Numeric input is an id, anything else a locality name.
    pub fn resolve(&self, key: &str) -> Option<&MasterLocality> {
        match key.trim().parse::<u64>() {
            Ok(id) => self.find(id),
            Err(_) => self.find_by_name(key),
        }
    }

    /// Sorted, de-duplicated, non-empty billing zones.
    pub fn zones(&self) -> Vec<String> {
        self.localities
            .iter()
            .filter_map(|locality| locality.billing_zone.as_deref())
            .map(str::trim)
            .filter(|zone| !zone.is_empty())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
