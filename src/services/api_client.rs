use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::locality::{LocalityPage, MasterLocality, PendingAddress, PendingPage};
use crate::domain::pagination::null_as_default;
use crate::domain::report::{BillingMonth, DashboardData};
use crate::domain::session::{Credentials, LoginOutcome};
use crate::domain::vehicle::{NewVehicle, Vehicle};
use crate::services::config::ConsoleConfig;

const LOGIN_PATH: &str = "/api/login/";
const DASHBOARD_PATH: &str = "/api/dashboard-data/";
const LOCALITIES_PATH: &str = "/api/localities/";
const DROPDOWN_PATH: &str = "/api/dropdown-localities/";
const NEXT_PENDING_PATH: &str = "/api/next-pending/";
const LEGACY_PENDING_PATH: &str = "/api/get-pending-address/";
const SAVE_MAPPING_PATH: &str = "/api/save-mapping/";
const SEARCH_PENDING_PATH: &str = "/api/search-pending/";
const BULK_SAVE_PATH: &str = "/api/bulk-save/";
const ADD_MASTER_PATH: &str = "/api/add-master-locality/";
const VEHICLES_PATH: &str = "/api/vehicles/";
const ADD_VEHICLE_PATH: &str = "/api/add-vehicle/";

const NO_PARAMS: &[(&str, String)] = &[];

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("could not connect to the server")]
    Connection,
    #[error("resource not found")]
    NotFound,
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("unexpected response format")]
    Parse,
    /// The server answered `success: false`.
    #[error("{0}")]
    Rejected(String),
    /// A form precondition failed; nothing was sent.
    #[error("{0}")]
    Validation(String),
    #[error("failed to read {}: {source}", .path.display())]
    Upload {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{0}")]
    Other(String),
}

/// Every call the console screens make against the MIS backend.
#[async_trait]
pub trait ConsoleApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome, ApiError>;
    async fn dashboard_data(&self, month: BillingMonth) -> Result<DashboardData, ApiError>;
    async fn localities(&self, page: u32, search: &str) -> Result<LocalityPage, ApiError>;
    async fn dropdown_localities(&self) -> Result<Vec<MasterLocality>, ApiError>;
    /// `None` once no unresolved address is left.
    async fn next_pending(&self) -> Result<Option<PendingAddress>, ApiError>;
    async fn save_mapping(&self, address_id: u64, locality_id: u64) -> Result<(), ApiError>;
    async fn search_pending(&self, query: &str, page: u32) -> Result<PendingPage, ApiError>;
    /// Returns the number of addresses the server updated.
    async fn bulk_save(&self, address_ids: &[u64], locality_id: u64) -> Result<u64, ApiError>;
    /// Returns the server's confirmation message.
    async fn add_master_locality(&self, locality_name: &str, zone_name: &str)
    -> Result<String, ApiError>;
    async fn vehicles(&self) -> Result<Vec<Vehicle>, ApiError>;
    async fn add_vehicle(&self, vehicle: &NewVehicle) -> Result<(), ApiError>;
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ActionEnvelope {
    success: bool,
    message: Option<String>,
    error: Option<String>,
    count: Option<u64>,
}

impl ActionEnvelope {
    fn into_result(self) -> Result<Self, ApiError> {
        if self.success {
            return Ok(self);
        }
        let reason = self
            .error
            .filter(|text| !text.is_empty())
            .or(self.message.filter(|text| !text.is_empty()))
            .unwrap_or_else(|| "request was rejected".to_string());
        Err(ApiError::Rejected(reason))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PendingEnvelope {
    found: bool,
    data: Option<PendingAddress>,
}

impl PendingEnvelope {
    fn into_pending(self) -> Option<PendingAddress> {
        if self.found { self.data } else { None }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VehicleList {
    #[serde(deserialize_with = "null_as_default")]
    results: Vec<Vehicle>,
}

#[derive(Serialize)]
struct SaveMappingRequest {
    address_id: u64,
    locality_id: u64,
}

#[derive(Serialize)]
struct BulkSaveRequest<'a> {
    address_ids: &'a [u64],
    locality_id: u64,
}

#[derive(Serialize)]
struct AddMasterLocalityRequest<'a> {
    locality_name: &'a str,
    zone_name: &'a str,
}

pub struct MisApiClient {
    base_url: String,
    client: Client,
}

impl MisApiClient {
    pub fn new(config: &ConsoleConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder().cookie_store(true);
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::Other(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(%url, ?params, "GET");
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|err| {
                warn!(%url, error = %err, "request failed");
                ApiError::Connection
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "unexpected status");
            return Err(ApiError::Status(status.as_u16()));
        }

        response.json::<T>().await.map_err(|err| {
            warn!(%url, error = %err, "malformed response body");
            ApiError::Parse
        })
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                warn!(%url, error = %err, "request failed");
                ApiError::Connection
            })?;
        read_envelope(response).await
    }
}

// Business failures come back as JSON with a 4xx status; the body still wins when it parses.
async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.bytes().await.map_err(|_| ApiError::Connection)?;
    match serde_json::from_slice::<T>(&body) {
        Ok(value) => Ok(value),
        Err(_) if status == StatusCode::NOT_FOUND => Err(ApiError::NotFound),
        Err(_) if !status.is_success() => Err(ApiError::Status(status.as_u16())),
        Err(err) => {
            warn!(error = %err, "malformed response body");
            Err(ApiError::Parse)
        }
    }
}

#[async_trait]
impl ConsoleApi for MisApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome, ApiError> {
        let outcome: LoginOutcome = self.post_json(LOGIN_PATH, credentials).await?;
        debug!(success = outcome.success, "login answered");
        Ok(outcome)
    }

    async fn dashboard_data(&self, month: BillingMonth) -> Result<DashboardData, ApiError> {
        let params = [
            ("year", month.year.to_string()),
            ("month", format!("{:02}", month.month)),
        ];
        self.get_json(DASHBOARD_PATH, &params).await
    }

    async fn localities(&self, page: u32, search: &str) -> Result<LocalityPage, ApiError> {
        let params = [("page", page.to_string()), ("search", search.to_string())];
        self.get_json(LOCALITIES_PATH, &params).await
    }

    async fn dropdown_localities(&self) -> Result<Vec<MasterLocality>, ApiError> {
        self.get_json(DROPDOWN_PATH, NO_PARAMS).await
    }

    async fn next_pending(&self) -> Result<Option<PendingAddress>, ApiError> {
        let envelope: PendingEnvelope = match self.get_json(NEXT_PENDING_PATH, NO_PARAMS).await {
            Err(ApiError::NotFound) => {
                debug!("next-pending missing, using get-pending-address");
                self.get_json(LEGACY_PENDING_PATH, NO_PARAMS).await?
            }
            other => other?,
        };
        Ok(envelope.into_pending())
    }

    async fn save_mapping(&self, address_id: u64, locality_id: u64) -> Result<(), ApiError> {
        let request = SaveMappingRequest {
            address_id,
            locality_id,
        };
        let envelope: ActionEnvelope = self.post_json(SAVE_MAPPING_PATH, &request).await?;
        envelope.into_result().map(|_| ())
    }

    async fn search_pending(&self, query: &str, page: u32) -> Result<PendingPage, ApiError> {
        let params = [("q", query.to_string()), ("page", page.to_string())];
        self.get_json(SEARCH_PENDING_PATH, &params).await
    }

    async fn bulk_save(&self, address_ids: &[u64], locality_id: u64) -> Result<u64, ApiError> {
        let request = BulkSaveRequest {
            address_ids,
            locality_id,
        };
        let envelope: ActionEnvelope = self.post_json(BULK_SAVE_PATH, &request).await?;
        let envelope = envelope.into_result()?;
        Ok(envelope.count.unwrap_or(address_ids.len() as u64))
    }

    async fn add_master_locality(
        &self,
        locality_name: &str,
        zone_name: &str,
    ) -> Result<String, ApiError> {
        let request = AddMasterLocalityRequest {
            locality_name,
            zone_name,
        };
        let envelope: ActionEnvelope = self.post_json(ADD_MASTER_PATH, &request).await?;
        let envelope = envelope.into_result()?;
        Ok(envelope
            .message
            .unwrap_or_else(|| format!("Locality '{locality_name}' added.")))
    }

    async fn vehicles(&self) -> Result<Vec<Vehicle>, ApiError> {
        let list: VehicleList = self.get_json(VEHICLES_PATH, NO_PARAMS).await?;
        Ok(list.results)
    }

    async fn add_vehicle(&self, vehicle: &NewVehicle) -> Result<(), ApiError> {
        let mut form = Form::new()
            .text("vehicle_no", vehicle.vehicle_no.clone())
            .text("contact_no", vehicle.contact_no.clone())
            .text(
                "cab_type",
                vehicle
                    .cab_type
                    .map(|cab| cab.as_str().to_string())
                    .unwrap_or_default(),
            )
            .text("vehicle_ownership", vehicle.vehicle_ownership.clone());

        if let Some(path) = &vehicle.rc_document {
            let bytes = tokio::fs::read(path)
                .await
                .map_err(|source| ApiError::Upload {
                    path: path.clone(),
                    source,
                })?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "rc_document".to_string());
            form = form.part("rc_document", Part::bytes(bytes).file_name(file_name));
        }

        let url = self.url(ADD_VEHICLE_PATH);
        debug!(%url, "POST multipart");
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|err| {
                warn!(%url, error = %err, "request failed");
                ApiError::Connection
            })?;
        let envelope: ActionEnvelope = read_envelope(response).await?;
        envelope.into_result().map(|_| ())
    }
}
