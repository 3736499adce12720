pub mod clock;
pub mod config_store;
pub mod defaults;
pub mod random;
