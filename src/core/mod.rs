pub mod catalog;
pub mod engine;
pub mod ranking;
pub mod store;
pub mod types;
pub mod validation;
