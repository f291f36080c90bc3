use crate::domain::locality::MasterLocality;
use crate::services::api_client::ApiError;
use crate::services::reference_list::ReferenceList;

#[derive(Debug, Clone, PartialEq)]
pub enum LocalityCheck {
    Valid(MasterLocality),
    NotFound,
}

/// Verifies a locality name against the master list.
pub fn check_locality(name: &str, reference: &ReferenceList) -> Result<LocalityCheck, ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::Validation("Enter a locality name.".to_string()));
    }
    Ok(match reference.find_by_name(name) {
        Some(locality) => LocalityCheck::Valid(locality.clone()),
        None => LocalityCheck::NotFound,
    })
}
