use crate::domain::download::DownloadFile;
use crate::domain::locality::format_km;
use crate::domain::report::{BillingMonth, DashboardData, MonthSection};
use crate::domain::vehicle::Vehicle;
use crate::services::assignment::PendingAssignment;
use crate::services::bulk_assignment::BulkAssignment;
use crate::services::gps_checker::GpsReport;
use crate::services::locality_table::LocalityTable;
use crate::services::reference_list::ReferenceList;
use crate::services::vehicle_registry::document_url;

const PROGRESS_WIDTH: usize = 20;

fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(text) if !text.is_empty() => text,
        _ => "-",
    }
}

pub fn format_progress_bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) * PROGRESS_WIDTH / 100;
    format!(
        "[{}{}] {percent}%",
        "#".repeat(filled),
        ".".repeat(PROGRESS_WIDTH - filled)
    )
}

fn format_month_card(section: &MonthSection, is_current: bool) -> Vec<String> {
    let report = &section.data;
    let mut lines = Vec::new();
    if !report.found {
        lines.push(format!("{} {}  [Not Started]", section.month, section.year));
        lines.push("No reporting data available for this period.".to_string());
        return lines;
    }

    let badge = if is_current { "  [Live Tracking]" } else { "" };
    lines.push(format!("{} {}{badge}", section.month, section.year));
    lines.push(format!(
        "Completion Status {}",
        format_progress_bar(report.completion_percent())
    ));
    for step in report.timeline() {
        let mark = if step.completed { "[x]" } else { "[ ]" };
        lines.push(format!("{mark} {:<16}{}", step.title, step.subtitle));
    }
    lines
}

pub fn format_dashboard(month: BillingMonth, data: &DashboardData) -> String {
    let mut lines = Vec::new();
    lines.push("MIS Control Center".to_string());
    lines.push(format!("Period: {month}"));
    lines.push(String::new());
    lines.push("Current Period".to_string());
    lines.extend(format_month_card(&data.current, true));
    lines.push(String::new());
    lines.push("---------- History ----------".to_string());
    lines.extend(format_month_card(&data.previous, false));
    lines.join("\n")
}

pub fn format_locality_table(table: &LocalityTable) -> String {
    let mut lines = Vec::new();
    lines.push("Locality Manager".to_string());
    lines.push(format!("Pending Addresses: {}", table.global_pending));
    if !table.search.is_empty() {
        lines.push(format!("Filter: {}", table.search));
    }
    lines.push(String::new());
    lines.push("ID | Address | Locality | Zone | KM | Status".to_string());
    lines.push("---|---------|----------|------|----|-------".to_string());
    if table.is_empty() {
        lines.push("No records found.".to_string());
    }
    for row in &table.rows {
        let edit_marker = match &table.editing {
            Some(edit) if edit.row_id == row.id => " *",
            _ => "",
        };
        lines.push(format!(
            "{} | {} | {} | {} | {} | {}{edit_marker}",
            row.id,
            row.address,
            or_dash(row.locality.as_deref()),
            or_dash(row.billing_zone.as_deref()),
            or_dash(Some(format_km(row.billing_km).as_str())),
            row.status
        ));
    }
    lines.push(String::new());
    lines.push(format_page_footer(table.page, table.pagination.page_count()));
    lines.join("\n")
}

fn format_page_footer(page: u32, total_pages: u32) -> String {
    let previous = if page > 1 { "< Prev" } else { "      " };
    let next = if page < total_pages { "Next >" } else { "" };
    format!("{previous}  Page {page} of {total_pages}  {next}")
        .trim_end()
        .to_string()
}

pub fn format_reference_list(reference: &ReferenceList) -> String {
    let mut lines = Vec::new();
    lines.push("ID | Locality | Zone | KM".to_string());
    lines.push("---|----------|------|---".to_string());
    if reference.is_empty() {
        lines.push("No localities available.".to_string());
    }
    for locality in reference.localities() {
        lines.push(format!(
            "{} | {} | {} | {}",
            locality.id,
            locality.locality_name,
            or_dash(locality.billing_zone.as_deref()),
            or_dash(Some(format_km(locality.billing_km).as_str()))
        ));
    }
    lines.join("\n")
}

pub fn format_pending_card(assignment: &PendingAssignment) -> String {
    let Some(item) = assignment.current() else {
        return "No pending items!".to_string();
    };
    let selected = match assignment.selected() {
        Some(id) => match assignment.reference().find(id) {
            Some(locality) => format!("{} (#{id})", locality.locality_name),
            None => format!("#{id}"),
        },
        None => "-- Select --".to_string(),
    };
    let preview = assignment.preview();
    let preview_line = if preview.is_empty() {
        "Zone: -  KM: -".to_string()
    } else {
        format!("Zone: {}  KM: {}", preview.zone, preview.km)
    };
    let action = if assignment.can_save() {
        "[s] Save & Next"
    } else {
        "Select a locality to save."
    };
    [
        format!("Address #{}: {}", item.id, item.address),
        format!("Locality: {selected}"),
        preview_line,
        action.to_string(),
    ]
    .join("\n")
}

pub fn format_bulk_results(bulk: &BulkAssignment) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "Showing {} records (page {} of {}, {} total)",
        bulk.results.len(),
        bulk.pagination.current_page,
        bulk.pagination.page_count(),
        bulk.pagination.total_records
    ));
    if bulk.results.is_empty() {
        lines.push("No pending addresses match.".to_string());
        return lines.join("\n");
    }
    lines.push("   | ID | Address".to_string());
    for row in &bulk.results {
        let mark = if bulk.selected().contains(&row.id) { "[x]" } else { "[ ]" };
        lines.push(format!("{mark} | {} | {}", row.id, row.address));
    }
    lines.join("\n")
}

pub fn format_vehicle_table(vehicles: &[&Vehicle], base_url: &str) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Vehicle List ({} Total)", vehicles.len()));
    lines.push(String::new());
    lines.push("ID | Vehicle Number | Contact | Type | Ownership | RC Document".to_string());
    lines.push("---|----------------|---------|------|-----------|------------".to_string());
    if vehicles.is_empty() {
        lines.push("No vehicles found.".to_string());
    }
    for vehicle in vehicles {
        let document = match vehicle.rc_document.as_deref() {
            Some(path) => document_url(base_url, path),
            None => "No File".to_string(),
        };
        lines.push(format!(
            "#{} | {} | {} | {} | {} | {document}",
            vehicle.id,
            vehicle.vehicle_no,
            or_dash(vehicle.contact_no.as_deref()),
            or_dash(vehicle.cab_type.as_deref()),
            or_dash(vehicle.ownership.as_deref())
        ));
    }
    lines.join("\n")
}

pub fn format_gps_report(report: &GpsReport) -> String {
    if report.is_empty() {
        return "No coordinates to validate.".to_string();
    }
    let mut lines = Vec::new();
    lines.push("GPS Checker".to_string());
    for line in &report.lines {
        match &line.result {
            Ok(coordinate) => lines.push(format!(
                "line {}: OK {:.6}, {:.6}",
                line.line_no, coordinate.latitude, coordinate.longitude
            )),
            Err(err) => lines.push(format!("line {}: INVALID '{}' ({err})", line.line_no, line.raw)),
        }
    }
    lines.push(format!(
        "{} valid, {} invalid",
        report.valid_count(),
        report.invalid_count()
    ));
    lines.join("\n")
}

pub fn format_downloads(files: &[DownloadFile]) -> String {
    let mut lines = Vec::new();
    lines.push("Downloads".to_string());
    lines.push("Access project resources and generated reports.".to_string());
    lines.push(String::new());
    for file in files {
        let date = file
            .date
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        lines.push(format!("{}. {}  ({date}, {})", file.id, file.name, file.size));
    }
    lines.join("\n")
}
