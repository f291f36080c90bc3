use crate::commands::CommandError;
use crate::commands::dashboard_cmd::dashboard_command;
use crate::commands::downloads_cmd::downloads_command;
use crate::commands::gps_cmd::gps_check_command;
use crate::commands::locality_cmd::{localities_command, reference_command};
use crate::commands::login_cmd::login_command;
use crate::commands::vehicle_cmd::vehicles_command;
use crate::domain::report::BillingMonth;
use crate::router::{Route, render_sidebar};
use crate::services::api_client::MisApiClient;
use crate::services::config::resolve_credentials;

/// Renders the screen behind a web path with its default inputs.
pub async fn open_command(api: &MisApiClient, path: &str) -> Result<(), CommandError> {
    let route = Route::from_path(path)?;
    if let Some(sidebar) = render_sidebar(route) {
        println!("{sidebar}");
        println!();
    }
    match route {
        Route::Login => login_command(api, resolve_credentials(None, None)).await,
        Route::Dashboard => dashboard_command(api, BillingMonth::current()).await,
        Route::LocalityManager => localities_command(api, 1, String::new(), false).await,
        Route::VehicleList => vehicles_command(api, api.base_url(), String::new()).await,
        Route::GpsChecker => gps_check_command(None, Vec::new()).await,
        Route::Downloads => {
            downloads_command();
            Ok(())
        }
        Route::LocalityChecker => {
            println!("Check a name with: mis-console check-locality <NAME>");
            println!();
            reference_command(api).await
        }
    }
}
