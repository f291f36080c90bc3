use tracing::info;

use crate::domain::locality::PendingAddress;
use crate::domain::pagination::Pagination;
use crate::services::api_client::{ApiError, ConsoleApi};

/// Bulk tab: search pending addresses, tick several, map them to one locality.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulkAssignment {
    pub search: String,
    pub results: Vec<PendingAddress>,
    pub pagination: Pagination,
    selected: Vec<u64>,
    target: Option<u64>,
}

impl BulkAssignment {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Self::default()
        }
    }

    /// Replaces the results. Ticks from the previous result set are dropped.
    pub async fn run_search(&mut self, api: &dyn ConsoleApi, page: u32) -> Result<(), ApiError> {
        let response = api.search_pending(&self.search, page.max(1)).await?;
        self.results = response.results;
        self.pagination = response.pagination;
        self.clear_selection();
        Ok(())
    }

    pub fn selected(&self) -> &[u64] {
        &self.selected
    }

    pub fn toggle(&mut self, id: u64) {
        match self.selected.iter().position(|selected| *selected == id) {
            Some(index) => {
                self.selected.remove(index);
            }
            None => self.selected.push(id),
        }
    }

    pub fn select_all(&mut self) {
        self.selected = self.results.iter().map(|row| row.id).collect();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn set_target(&mut self, locality_id: Option<u64>) {
        self.target = locality_id;
    }

    /// Maps every selected address to the target locality and resets the tab.
    pub async fn save(&mut self, api: &dyn ConsoleApi) -> Result<u64, ApiError> {
        let locality_id = match self.target {
            Some(id) if !self.selected.is_empty() => id,
            _ => return Err(ApiError::Validation("Select addresses!".to_string())),
        };
        let count = api.bulk_save(&self.selected, locality_id).await?;
        info!(count, locality_id, "bulk mapping saved");

        self.results.clear();
        self.search.clear();
        self.selected.clear();
        Ok(count)
    }
}
