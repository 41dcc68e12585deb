pub mod config;
pub mod period;
pub mod report;
