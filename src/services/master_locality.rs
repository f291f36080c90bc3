use tracing::warn;

use crate::services::api_client::{ApiError, ConsoleApi};
use crate::services::reference_list::ReferenceList;

/// "Add New Locality" form. The zone must be one the reference list already knows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MasterLocalityForm {
    pub name: String,
    pub zone: String,
}

impl MasterLocalityForm {
    pub fn new(name: impl Into<String>, zone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            zone: zone.into(),
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty() && !self.zone.trim().is_empty()
    }

    /// Creates the locality, clears the form and refreshes `reference` so the new
    /// entry is selectable straight away. Returns the server message.
    pub async fn submit(
        &mut self,
        api: &dyn ConsoleApi,
        reference: &mut ReferenceList,
    ) -> Result<String, ApiError> {
        if !self.can_submit() {
            return Err(ApiError::Validation(
                "Please enter a name and select a zone.".to_string(),
            ));
        }
        let zones = reference.zones();
        let zone = self.zone.trim();
        let Some(zone) = zones.iter().find(|known| known.eq_ignore_ascii_case(zone)) else {
            return Err(ApiError::Validation(format!(
                "Unknown zone '{zone}'. Choose one of: {}",
                zones.join(", ")
            )));
        };

        let message = api.add_master_locality(self.name.trim(), zone).await?;
        *self = Self::default();

        match ReferenceList::load(api).await {
            Ok(refreshed) => *reference = refreshed,
            Err(err) => warn!(error = %err, "failed to refresh locality dropdown"),
        }
        Ok(message)
    }
}
