pub mod config;
pub mod content;
pub mod outcome;
pub mod report;
pub mod types;

// Keep the public surface small and intentional.
pub use config::*;
pub use outcome::*;
pub use report::*;
pub use types::*;
