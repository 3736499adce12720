pub mod education;
pub mod report;
pub mod session;
pub mod simulator;
pub mod traits;
