use std::io::Read;

use crate::commands::CommandError;
use crate::commands::report_format::format_gps_report;
use crate::services::gps_checker::check_coordinates;

/// Inline pairs win; otherwise the file, otherwise stdin.
pub async fn gps_check_command(input: Option<String>, coords: Vec<String>) -> Result<(), CommandError> {
    let text = if !coords.is_empty() {
        coords.join("\n")
    } else if let Some(path) = input {
        tokio::fs::read_to_string(&path).await?
    } else {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    };
    println!("{}", format_gps_report(&check_coordinates(&text)));
    Ok(())
}
