use tracing::{info, warn};

use crate::commands::CommandError;
use crate::commands::dashboard_cmd::dashboard_command;
use crate::domain::report::BillingMonth;
use crate::domain::session::Credentials;
use crate::router::Route;
use crate::services::api_client::{ApiError, ConsoleApi};

/// Sends the credentials once. Success routes to the dashboard.
pub async fn submit_login(api: &dyn ConsoleApi, credentials: &Credentials) -> Result<(Route, String), ApiError> {
    if !credentials.is_complete() {
        return Err(ApiError::Validation(
            "Username and password are required.".to_string(),
        ));
    }
    let outcome = api.login(credentials).await?;
    if !outcome.success {
        warn!("login rejected");
        let message = if outcome.message.is_empty() {
            "Invalid credentials".to_string()
        } else {
            outcome.message
        };
        return Err(ApiError::Rejected(message));
    }
    let username = outcome.username.as_deref().unwrap_or(&credentials.username);
    info!(%username, "login succeeded");
    let greeting = if outcome.message.is_empty() {
        "Welcome Back!".to_string()
    } else {
        outcome.message
    };
    Ok((Route::Dashboard, greeting))
}

pub async fn login_command(api: &dyn ConsoleApi, credentials: Credentials) -> Result<(), CommandError> {
    let (route, greeting) = submit_login(api, &credentials).await?;
    println!("{greeting}");
    println!();
    match route {
        Route::Dashboard => dashboard_command(api, BillingMonth::current()).await,
        _ => Ok(()),
    }
}
