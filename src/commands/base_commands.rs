use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::report::BillingMonth;
use crate::domain::vehicle::CabType;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Path to console config YAML
    #[arg(short, long, global = true)]
    pub config: Option<String>,
    /// API origin; overrides the config file and MIS_API_URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,
    /// Print more diagnostics to stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Only print errors to stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and open the dashboard
    Login {
        /// Username (defaults to MIS_USERNAME)
        #[arg(short, long)]
        username: Option<String>,
        /// Password (defaults to MIS_PASSWORD)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Show monthly MIS progress for a month and the one before it
    Dashboard {
        /// Billing month (YYYY-MM)
        #[arg(short, long, default_value_t = BillingMonth::current())]
        month: BillingMonth,
    },
    /// List address-to-locality mappings
    Localities {
        /// Page number
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        /// Address filter
        #[arg(short, long, default_value = "")]
        search: String,
        /// Page through the table interactively (n = next, p = previous, q = quit)
        #[arg(short, long)]
        browse: bool,
    },
    /// Change the locality of one address from the locality table
    Remap {
        /// Address id (row id in the locality table)
        #[arg(short, long)]
        address_id: u64,
        /// Target locality id or name
        #[arg(short, long)]
        locality: String,
        /// Table page holding the row
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        /// Address filter used to find the row
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Map pending addresses one at a time (interactive)
    Assign,
    /// Search pending addresses for bulk mapping
    BulkSearch {
        /// Address filter
        #[arg(long, default_value = "")]
        query: String,
        /// Page number
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Map several pending addresses to one locality
    BulkAssign {
        /// Address ids (comma separated)
        #[arg(short, long, value_delimiter = ',')]
        ids: Vec<u64>,
        /// Select every address matching this filter on the given page
        #[arg(long, conflicts_with = "ids")]
        query: Option<String>,
        /// Page used with --query
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        /// Target locality id or name
        #[arg(short, long)]
        locality: String,
    },
    /// Add a locality to the master list
    AddLocality {
        /// New locality name
        #[arg(short, long)]
        name: String,
        /// Existing billing zone
        #[arg(short, long)]
        zone: String,
    },
    /// List the billing zones known to the master list
    Zones,
    /// Verify a locality name against the master list
    CheckLocality {
        /// Locality name
        name: String,
    },
    /// List registered vehicles
    Vehicles {
        /// Filter by vehicle number or contact
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Register a vehicle
    AddVehicle {
        /// Vehicle number, e.g. DL-01-AB-1234
        #[arg(short = 'n', long)]
        vehicle_no: String,
        /// Contact number
        #[arg(long, default_value = "")]
        contact_no: String,
        /// Cab type
        #[arg(short = 't', long, value_enum)]
        cab_type: Option<CabType>,
        /// Owner or vendor name
        #[arg(short, long, default_value = "")]
        ownership: String,
        /// RC document (PDF or image) to upload
        #[arg(short, long)]
        rc_document: Option<PathBuf>,
    },
    /// Validate GPS coordinates ("lat, long" per line)
    GpsCheck {
        /// File with one coordinate pair per line (stdin when omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Coordinate pairs given inline
        #[arg(allow_hyphen_values = true)]
        coords: Vec<String>,
    },
    /// List downloadable project resources
    Downloads,
    /// Open a screen by its web path, e.g. /dashboard
    Open {
        /// Screen path
        path: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
