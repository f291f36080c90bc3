use tracing::{debug, info, warn};

use crate::domain::locality::{PendingAddress, PreviewFields};
use crate::services::api_client::{ApiError, ConsoleApi};
use crate::services::reference_list::ReferenceList;

/// The "Set Locality" loop: one pending address at a time, paired with a locality
/// picked from the preloaded reference list.
#[derive(Debug, Clone, Default)]
pub struct PendingAssignment {
    reference: ReferenceList,
    current: Option<PendingAddress>,
    selected: Option<u64>,
    preview: PreviewFields,
    saved: usize,
}

impl PendingAssignment {
    pub fn new(reference: ReferenceList) -> Self {
        Self {
            reference,
            ..Self::default()
        }
    }

    /// Loads the reference list once, then the first pending address.
    pub async fn start(api: &dyn ConsoleApi) -> Result<Self, ApiError> {
        let mut assignment = Self::new(ReferenceList::load_or_empty(api).await);
        assignment.fetch_next(api).await?;
        Ok(assignment)
    }

    pub fn reference(&self) -> &ReferenceList {
        &self.reference
    }

    pub fn current(&self) -> Option<&PendingAddress> {
        self.current.as_ref()
    }

    pub fn selected(&self) -> Option<u64> {
        self.selected
    }

    pub fn preview(&self) -> &PreviewFields {
        &self.preview
    }

    pub fn saved_count(&self) -> usize {
        self.saved
    }

    /// Replaces the current item with the next unresolved address and clears the form.
    pub async fn fetch_next(&mut self, api: &dyn ConsoleApi) -> Result<Option<&PendingAddress>, ApiError> {
        let next = api.next_pending().await?;
        match &next {
            Some(item) => debug!(address_id = item.id, "fetched pending address"),
            None => info!("no pending addresses left"),
        }
        self.current = next;
        self.clear_selection();
        Ok(self.current.as_ref())
    }

    /// Picks a locality by id. Zone and km come from the local reference list.
    /// Returns `false` when the id is not in the list; the selection is then cleared.
    pub fn select(&mut self, locality_id: u64) -> bool {
        match self.reference.find(locality_id) {
            Some(locality) => {
                self.preview = PreviewFields::from_locality(locality);
                self.selected = Some(locality_id);
                true
            }
            None => {
                self.clear_selection();
                false
            }
        }
    }

    /// Picks a locality by id or exact name.
    pub fn select_key(&mut self, key: &str) -> bool {
        match self.reference.resolve(key).map(|locality| locality.id) {
            Some(id) => self.select(id),
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.preview = PreviewFields::default();
    }

    pub fn can_save(&self) -> bool {
        self.current.is_some() && self.selected.is_some()
    }

    /// Submits the pairing. On success the next item is fetched exactly once; on
    /// failure the current item and selection stay in place for a retry.
    pub async fn save(&mut self, api: &dyn ConsoleApi) -> Result<(), ApiError> {
        let (address_id, locality_id) = match (&self.current, self.selected) {
            (Some(item), Some(locality_id)) => (item.id, locality_id),
            _ => return Err(ApiError::Validation("Select a locality!".to_string())),
        };

        if let Err(err) = api.save_mapping(address_id, locality_id).await {
            warn!(address_id, locality_id, error = %err, "save mapping failed");
            return Err(err);
        }
        self.saved += 1;
        info!(address_id, locality_id, "address mapped");

        self.current = None;
        self.fetch_next(api).await.map(|_| ())
    }
}
