use thiserror::Error;

use crate::router::RouteError;
use crate::services::api_client::ApiError;
use crate::services::config::ConfigError;

pub mod assign_cmd;
pub mod base_commands;
pub mod dashboard_cmd;
pub mod downloads_cmd;
pub mod gps_cmd;
pub mod locality_cmd;
pub mod login_cmd;
pub mod open_cmd;
pub mod report_format;
pub mod vehicle_cmd;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
