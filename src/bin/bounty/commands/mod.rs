pub mod config;
pub mod edit;
pub mod history;
pub mod set;
pub mod show;
