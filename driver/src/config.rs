use std::env::VarError;
use std::path::{Path, PathBuf};

use error_stack::ResultExt;

use kernel::KernelError;

use crate::env;
use crate::error::{ConvertError, DriverError};

static BOOK_STORAGE_PATH: &str = "BOOK_STORAGE_PATH";
static ACCOUNT_STORAGE_PATH: &str = "ACCOUNT_STORAGE_PATH";

static DEFAULT_BOOK_STORAGE: &str = "books.data";
static DEFAULT_ACCOUNT_STORAGE: &str = "accounts.data";

/// Storage file locations, overridable through the environment or `.env`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    book_path: PathBuf,
    account_path: PathBuf,
}

impl StorageConfig {
    pub fn new(book_path: impl Into<PathBuf>, account_path: impl Into<PathBuf>) -> Self {
        Self {
            book_path: book_path.into(),
            account_path: account_path.into(),
        }
    }

    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let book_path = env_or(BOOK_STORAGE_PATH, DEFAULT_BOOK_STORAGE)?;
        let account_path = env_or(ACCOUNT_STORAGE_PATH, DEFAULT_ACCOUNT_STORAGE)?;
        Ok(Self::new(book_path, account_path))
    }

    pub fn book_path(&self) -> &Path {
        &self.book_path
    }

    pub fn account_path(&self) -> &Path {
        &self.account_path
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BOOK_STORAGE, DEFAULT_ACCOUNT_STORAGE)
    }
}

fn env_or(key: &str, default: &str) -> error_stack::Result<String, KernelError> {
    match env(key) {
        Err(DriverError::Env(dotenvy::Error::EnvVar(VarError::NotPresent))) => {
            Ok(String::from(default))
        }
        other => other
            .convert_error()
            .attach_printable_lazy(|| format!("Failed to read {key}")),
    }
}
