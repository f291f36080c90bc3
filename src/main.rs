mod commands;
mod domain;
mod logging;
mod router;
mod services;
#[cfg(test)]
mod test_support;

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::debug;

use crate::commands::CommandError;
use crate::commands::assign_cmd::{assign_command, bulk_assign_command, bulk_search_command};
use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::dashboard_cmd::dashboard_command;
use crate::commands::downloads_cmd::downloads_command;
use crate::commands::gps_cmd::gps_check_command;
use crate::commands::locality_cmd::{
    add_locality_command, check_locality_command, localities_command, remap_command,
    zones_command,
};
use crate::commands::login_cmd::login_command;
use crate::commands::open_cmd::open_command;
use crate::commands::vehicle_cmd::{add_vehicle_command, vehicles_command};
use crate::logging::{Verbosity, init_logging};
use crate::services::api_client::MisApiClient;
use crate::services::config::{ConsoleConfig, resolve_credentials};

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(Verbosity::from_flags(args.quiet, args.verbose));

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "command failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: CliArgs) -> Result<(), CommandError> {
    let CliArgs {
        config,
        base_url,
        command,
        ..
    } = args;
    let connect = || -> Result<MisApiClient, CommandError> {
        let config = ConsoleConfig::load(config.as_deref(), base_url.clone())?;
        debug!(base_url = %config.base_url, "using API origin");
        Ok(MisApiClient::new(&config)?)
    };

    match command {
        Commands::Login { username, password } => {
            let api = connect()?;
            login_command(&api, resolve_credentials(username, password)).await
        }
        Commands::Dashboard { month } => dashboard_command(&connect()?, month).await,
        Commands::Localities {
            page,
            search,
            browse,
        } => localities_command(&connect()?, page, search, browse).await,
        Commands::Remap {
            address_id,
            locality,
            page,
            search,
        } => remap_command(&connect()?, address_id, &locality, page, search).await,
        Commands::Assign => assign_command(&connect()?).await,
        Commands::BulkSearch { query, page } => {
            bulk_search_command(&connect()?, query, page).await
        }
        Commands::BulkAssign {
            ids,
            query,
            page,
            locality,
        } => bulk_assign_command(&connect()?, ids, query, page, &locality).await,
        Commands::AddLocality { name, zone } => {
            add_locality_command(&connect()?, name, zone).await
        }
        Commands::Zones => zones_command(&connect()?).await,
        Commands::CheckLocality { name } => check_locality_command(&connect()?, &name).await,
        Commands::Vehicles { search } => {
            let api = connect()?;
            vehicles_command(&api, api.base_url(), search).await
        }
        Commands::AddVehicle {
            vehicle_no,
            contact_no,
            cab_type,
            ownership,
            rc_document,
        } => {
            let api = connect()?;
            add_vehicle_command(
                &api,
                api.base_url(),
                vehicle_no,
                contact_no,
                cab_type,
                ownership,
                rc_document,
            )
            .await
        }
        Commands::GpsCheck { input, coords } => gps_check_command(input, coords).await,
        Commands::Downloads => {
            downloads_command();
            Ok(())
        }
        Commands::Open { path } => open_command(&connect()?, &path).await,
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut CliArgs::command(), "mis-console", &mut io::stdout());
            Ok(())
        }
    }
}
