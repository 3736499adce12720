pub mod controller;
pub mod service;

pub use controller::{CommandResult, ScanController};
pub use service::AppService;
