pub mod headline;
pub mod periodic;
pub mod status_monitor;
