use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadFile {
	pub id: u32,
	pub name: &'static str,
	pub date: Option<NaiveDate>,
	pub size: &'static str,
}

/// Project resources offered on the downloads screen.
pub fn catalog() -> Vec<DownloadFile> {
	vec![
		DownloadFile {
			id: 1,
			name: "Master_Locality_List_2025.xlsx",
			date: NaiveDate::from_ymd_opt(2025, 1, 10),
			size: "2.4 MB",
		},
		DownloadFile {
			id: 2,
			name: "GPS_Validation_Guidelines.pdf",
			date: NaiveDate::from_ymd_opt(2024, 12, 5),
			size: "1.1 MB",
		},
		DownloadFile {
			id: 3,
			name: "December_2024_MIS_Report.csv",
			date: NaiveDate::from_ymd_opt(2025, 1, 2),
			size: "500 KB",
		},
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn catalog_lists_three_resources_in_order() {
		let files = catalog();
		assert_eq!(files.len(), 3);
		assert_eq!(files[0].name, "Master_Locality_List_2025.xlsx");
		assert_eq!(files[1].date, NaiveDate::from_ymd_opt(2024, 12, 5));
		assert_eq!(files[2].size, "500 KB");
	}
}
