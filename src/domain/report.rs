use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::Deserialize;
use thiserror::Error;

/// Number of boolean checkpoints that make up a monthly report.
pub const TOTAL_STEPS: usize = 8;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid month '{0}' (expected YYYY-MM)")]
pub struct ParseMonthError(pub String);

/// A billing period as picked in the dashboard filter (`YYYY-MM`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillingMonth {
    pub year: i32,
    pub month: u32,
}

impl BillingMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, ParseMonthError> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(ParseMonthError(format!("{year:04}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }
}

impl fmt::Display for BillingMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for BillingMonth {
    type Err = ParseMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let date = NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d")
            .map_err(|_| ParseMonthError(text.to_string()))?;
        Self::new(date.year(), date.month())
    }
}

/// One of the three ten-day validation windows of a month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StageReport {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub locality: bool,
    pub gps: bool,
}

impl StageReport {
    pub fn is_complete(&self) -> bool {
        self.locality && self.gps
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FinalStage {
    pub mis_status: bool,
    pub bill_approval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MonthReport {
    pub found: bool,
    pub progress: Option<u8>,
    pub stage1: StageReport,
    pub stage2: StageReport,
    pub stage3: StageReport,
    #[serde(rename = "final")]
    pub final_stage: FinalStage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineStep {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub completed: bool,
}

impl MonthReport {
    pub fn completed_steps(&self) -> usize {
        [
            self.stage1.locality,
            self.stage1.gps,
            self.stage2.locality,
            self.stage2.gps,
            self.stage3.locality,
            self.stage3.gps,
            self.final_stage.mis_status,
            self.final_stage.bill_approval,
        ]
        .into_iter()
        .filter(|flag| *flag)
        .count()
    }

    /// Server-reported progress, or the share of completed checkpoints when absent.
    pub fn completion_percent(&self) -> u8 {
        if let Some(progress) = self.progress {
            return progress.min(100);
        }
        (self.completed_steps() * 100 / TOTAL_STEPS) as u8
    }

    pub fn timeline(&self) -> [TimelineStep; 5] {
        [
            TimelineStep {
                title: "1st - 10th",
                subtitle: "Initial Phase",
                completed: self.stage1.is_complete(),
            },
            TimelineStep {
                title: "11th - 20th",
                subtitle: "Mid Phase",
                completed: self.stage2.is_complete(),
            },
            TimelineStep {
                title: "21st - End",
                subtitle: "Final Phase",
                completed: self.stage3.is_complete(),
            },
            TimelineStep {
                title: "MIS Submission",
                subtitle: "Report Gen",
                completed: self.final_stage.mis_status,
            },
            TimelineStep {
                title: "Bill Approval",
                subtitle: "Finance",
                completed: self.final_stage.bill_approval,
            },
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MonthSection {
    pub month: String,
    pub year: i32,
    pub data: MonthReport,
}

/// Payload of `/api/dashboard-data/`: the selected month and the one before it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardData {
    pub current: MonthSection,
    pub previous: MonthSection,
}
