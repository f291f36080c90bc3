use tracing::{debug, warn};

use crate::domain::locality::LocalityRow;
use crate::domain::pagination::Pagination;
use crate::services::api_client::{ApiError, ConsoleApi};
use crate::services::reference_list::ReferenceList;

/// Inline edit of one table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEdit {
    pub row_id: u64,
    pub locality_id: Option<u64>,
}

/// "View All" tab: one page of locality rows for the current filter.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalityTable {
    pub rows: Vec<LocalityRow>,
    pub page: u32,
    pub pagination: Pagination,
    pub search: String,
    pub global_pending: u64,
    pub editing: Option<RowEdit>,
}

impl Default for LocalityTable {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            page: 1,
            pagination: Pagination::default(),
            search: String::new(),
            global_pending: 0,
            editing: None,
        }
    }
}

impl LocalityTable {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Self::default()
        }
    }

    /// Fetches `page` and replaces the table contents with the response.
    pub async fn load(&mut self, api: &dyn ConsoleApi, page: u32) -> Result<(), ApiError> {
        let page = page.max(1);
        debug!(page, search = %self.search, "loading locality table");
        match api.localities(page, &self.search).await {
            Ok(response) => {
                self.rows = response.results;
                self.pagination = response.pagination;
                self.global_pending = response.global_pending;
                self.page = page;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to load locality table");
                self.rows.clear();
                Err(err)
            }
        }
    }

    /// Returns `false` when already on the last page.
    pub async fn next_page(&mut self, api: &dyn ConsoleApi) -> Result<bool, ApiError> {
        if !self.pagination.has_next(self.page) {
            return Ok(false);
        }
        self.load(api, self.page + 1).await?;
        Ok(true)
    }

    /// Returns `false` when already on the first page.
    pub async fn previous_page(&mut self, api: &dyn ConsoleApi) -> Result<bool, ApiError> {
        if !self.pagination.has_previous(self.page) {
            return Ok(false);
        }
        self.load(api, self.page - 1).await?;
        Ok(true)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Preselects the row's locality by id, falling back to a name match in the reference list.
    pub fn start_editing(&mut self, row_id: u64, reference: &ReferenceList) -> Result<(), ApiError> {
        let row = self
            .rows
            .iter()
            .find(|row| row.id == row_id)
            .ok_or_else(|| ApiError::Validation(format!("Row {row_id} is not on this page.")))?;
        let locality_id = row.locality_id.or_else(|| {
            row.locality
                .as_deref()
                .and_then(|name| {
                    reference
                        .localities()
                        .iter()
                        .find(|locality| locality.locality_name == name)
                })
                .map(|locality| locality.id)
        });
        self.editing = Some(RowEdit {
            row_id,
            locality_id,
        });
        Ok(())
    }

    pub fn select_edit_locality(&mut self, locality_id: Option<u64>) {
        if let Some(edit) = self.editing.as_mut() {
            edit.locality_id = locality_id;
        }
    }

    pub fn cancel_editing(&mut self) {
        self.editing = None;
    }

    /// Saves the edit, then reloads the current page and leaves edit mode.
    pub async fn save_edit(&mut self, api: &dyn ConsoleApi) -> Result<(), ApiError> {
        let (row_id, locality_id) = match &self.editing {
            Some(RowEdit {
                row_id,
                locality_id: Some(locality_id),
            }) => (*row_id, *locality_id),
            _ => return Err(ApiError::Validation("Select a locality!".to_string())),
        };
        api.save_mapping(row_id, locality_id).await?;
        self.cancel_editing();
        self.load(api, self.page).await
    }
}
