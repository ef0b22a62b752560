use crate::error::DriverError;

pub mod config;
pub mod error;
pub mod logger;
pub mod storage;

pub(crate) fn env(key: &str) -> Result<String, DriverError> {
    dotenvy::var(key).map_err(DriverError::from)
}
