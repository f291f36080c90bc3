pub mod download;
pub mod locality;
pub mod pagination;
pub mod report;
pub mod session;
pub mod vehicle;
