use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CabType {
    Sedan,
    #[value(name = "suv")]
    Suv,
    Mini,
}

impl CabType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CabType::Sedan => "Sedan",
            CabType::Suv => "SUV",
            CabType::Mini => "Mini",
        }
    }
}

impl fmt::Display for CabType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Vehicle {
    pub id: u64,
    pub vehicle_no: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub contact_no: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub cab_type: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub ownership: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub rc_document: Option<String>,
}

impl Vehicle {
    /// Case-insensitive match on the registration number, substring match on the contact.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return true;
        }
        if self
            .vehicle_no
            .to_lowercase()
            .contains(&term.to_lowercase())
        {
            return true;
        }
        self.contact_no
            .as_deref()
            .is_some_and(|contact| contact.contains(term))
    }
}

/// Fields of the "add vehicle" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewVehicle {
    pub vehicle_no: String,
    pub contact_no: String,
    pub cab_type: Option<CabType>,
    pub vehicle_ownership: String,
    pub rc_document: Option<PathBuf>,
}

// Empty strings and numbers both show up for the optional text columns.
fn deserialize_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) if text.trim().is_empty() => None,
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}
