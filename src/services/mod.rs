pub mod api_client;
pub mod assignment;
pub mod bulk_assignment;
pub mod config;
pub mod gps_checker;
pub mod locality_checker;
pub mod locality_table;
pub mod master_locality;
pub mod reference_list;
pub mod vehicle_registry;
