use crate::commands::report_format::format_downloads;
use crate::domain::download::catalog;

pub fn downloads_command() {
    println!("{}", format_downloads(&catalog()));
}
