use serde::{Deserialize, Deserializer};

/// Treats an explicit `null` like a missing key.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Paging metadata returned next to every paginated result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_records: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_records: 0,
        }
    }
}

impl Pagination {
    /// The server reports zero pages for an empty result; the table still shows page 1 of 1.
    pub fn page_count(&self) -> u32 {
        self.total_pages.max(1)
    }

    pub fn has_previous(&self, page: u32) -> bool {
        page > 1
    }

    pub fn has_next(&self, page: u32) -> bool {
        page < self.page_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_envelope_defaults_to_single_page() {
        let pagination: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(pagination, Pagination::default());
        assert!(!pagination.has_previous(1));
        assert!(!pagination.has_next(1));
    }

    #[test]
    fn null_fields_fall_back_to_defaults() {
        #[derive(Deserialize)]
        struct Envelope {
            #[serde(default, deserialize_with = "null_as_default")]
            pagination: Pagination,
        }
        let envelope: Envelope = serde_json::from_str(r#"{"pagination": null}"#).unwrap();
        assert_eq!(envelope.pagination, Pagination::default());
    }

    #[test]
    fn next_and_previous_follow_bounds() {
        let pagination = Pagination {
            current_page: 2,
            total_pages: 3,
            total_records: 60,
        };
        assert!(pagination.has_previous(2));
        assert!(pagination.has_next(2));
        assert!(!pagination.has_next(3));
    }

    #[test]
    fn zero_pages_counts_as_one() {
        let pagination = Pagination {
            current_page: 1,
            total_pages: 0,
            total_records: 0,
        };
        assert_eq!(pagination.page_count(), 1);
    }
}
