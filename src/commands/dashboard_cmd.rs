use tracing::error;

use crate::commands::CommandError;
use crate::commands::report_format::format_dashboard;
use crate::domain::report::BillingMonth;
use crate::services::api_client::ConsoleApi;

pub async fn dashboard_command(api: &dyn ConsoleApi, month: BillingMonth) -> Result<(), CommandError> {
    let data = api.dashboard_data(month).await.map_err(|err| {
        error!(%month, error = %err, "failed to load dashboard data");
        err
    })?;
    println!("{}", format_dashboard(month, &data));
    Ok(())
}
