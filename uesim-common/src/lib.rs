//! Common types and utilities for the simulated-UE store
//!
//! This crate provides the UE record written to the store, the shared error
//! type, and the logging setup used by the validation and storage crates.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{UeConfig, AUTH_KEY_LEN, AUTH_OPC_LEN, IMSI_MAX_LEN, IMSI_MIN_LEN};
pub use error::Error;
pub use logging::{init_logging, init_logging_with_filter, LogLevel};
