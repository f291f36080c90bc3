use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::pagination::{Pagination, null_as_default};

/// Mapping state of a raw address. Unknown labels are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MappingStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Mapped,
    Other(String),
}

impl From<String> for MappingStatus {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "pending" => MappingStatus::Pending,
            "approved" => MappingStatus::Approved,
            "rejected" => MappingStatus::Rejected,
            "mapped" => MappingStatus::Mapped,
            _ => MappingStatus::Other(value),
        }
    }
}

impl<'de> Deserialize<'de> for MappingStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.map(MappingStatus::from).unwrap_or_default())
    }
}

impl fmt::Display for MappingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingStatus::Pending => f.write_str("Pending"),
            MappingStatus::Approved => f.write_str("Approved"),
            MappingStatus::Rejected => f.write_str("Rejected"),
            MappingStatus::Mapped => f.write_str("Mapped"),
            MappingStatus::Other(label) => f.write_str(label),
        }
    }
}

/// One row of the locality table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocalityRow {
    pub id: u64,
    pub address: String,
    pub locality: Option<String>,
    pub locality_id: Option<u64>,
    pub billing_zone: Option<String>,
    #[serde(deserialize_with = "deserialize_km")]
    pub billing_km: Option<f64>,
    pub status: MappingStatus,
}

/// Entry of the master reference list used by every locality dropdown.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MasterLocality {
    pub id: u64,
    pub locality_name: String,
    pub billing_zone: Option<String>,
    #[serde(deserialize_with = "deserialize_km")]
    pub billing_km: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PendingAddress {
    pub id: u64,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocalityPage {
    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<LocalityRow>,
    #[serde(deserialize_with = "null_as_default")]
    pub pagination: Pagination,
    #[serde(deserialize_with = "null_as_default")]
    pub global_pending: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PendingPage {
    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<PendingAddress>,
    #[serde(deserialize_with = "null_as_default")]
    pub pagination: Pagination,
}

/// Read-only zone/distance preview for the selected locality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewFields {
    pub zone: String,
    pub km: String,
}

impl PreviewFields {
    pub fn from_locality(locality: &MasterLocality) -> Self {
        Self {
            zone: locality.billing_zone.clone().unwrap_or_default(),
            km: format_km(locality.billing_km),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.zone.is_empty() && self.km.is_empty()
    }
}

pub fn format_km(km: Option<f64>) -> String {
    km.map(|value| value.to_string()).unwrap_or_default()
}

fn deserialize_km<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_collections_become_empty_pages() {
        let page: LocalityPage = serde_json::from_value(serde_json::json!({
            "results": null,
            "pagination": null,
            "global_pending": null
        }))
        .unwrap();
        assert_eq!(page, LocalityPage::default());

        let pending: PendingPage =
            serde_json::from_value(serde_json::json!({"results": null, "pagination": null})).unwrap();
        assert!(pending.results.is_empty());
        assert_eq!(pending.pagination.page_count(), 1);
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!(MappingStatus::from("APPROVED".to_string()), MappingStatus::Approved);
        assert_eq!(MappingStatus::from("mapped".to_string()), MappingStatus::Mapped);
        assert_eq!(
            MappingStatus::from("On Hold".to_string()),
            MappingStatus::Other("On Hold".to_string())
        );
    }

    #[test]
    fn row_defaults_missing_status_to_pending() {
        let row: LocalityRow = serde_json::from_value(serde_json::json!({
            "id": 7,
            "address": "12 Park Street",
            "status": null
        }))
        .unwrap();
        assert_eq!(row.status, MappingStatus::Pending);
        assert_eq!(row.locality, None);
    }

    #[test]
    fn km_accepts_numbers_and_numeric_strings() {
        let masters: Vec<MasterLocality> = serde_json::from_value(serde_json::json!([
            {"id": 1, "locality_name": "Dwarka", "billing_zone": "West", "billing_km": 12.5},
            {"id": 2, "locality_name": "Saket", "billing_zone": "South", "billing_km": "18"},
            {"id": 3, "locality_name": "Rohini", "billing_zone": null, "billing_km": "n/a"}
        ]))
        .unwrap();
        assert_eq!(masters[0].billing_km, Some(12.5));
        assert_eq!(masters[1].billing_km, Some(18.0));
        assert_eq!(masters[2].billing_km, None);
    }

    #[test]
    fn preview_formats_whole_km_without_fraction() {
        let locality = MasterLocality {
            id: 2,
            locality_name: "Saket".to_string(),
            billing_zone: Some("South".to_string()),
            billing_km: Some(18.0),
        };
        let preview = PreviewFields::from_locality(&locality);
        assert_eq!(preview.zone, "South");
        assert_eq!(preview.km, "18");
    }

    #[test]
    fn page_without_results_is_empty() {
        let page: LocalityPage = serde_json::from_str(r#"{"error": "boom"}"#).unwrap();
        assert!(page.results.is_empty());
        assert_eq!(page.global_pending, 0);
    }
}
