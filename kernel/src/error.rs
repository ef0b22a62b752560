use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    Validation,
    AlreadyExists,
    NotFound,
    AccountClosed,
    InsufficientFunds,
    Storage,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation => write!(f, "Value failed validation"),
            KernelError::AlreadyExists => write!(f, "Item already exists in the list"),
            KernelError::NotFound => write!(f, "Item does not exist"),
            KernelError::AccountClosed => write!(f, "Operation is not allowed on a closed account"),
            KernelError::InsufficientFunds => write!(f, "Balance cannot become less than zero"),
            KernelError::Storage => write!(f, "Storage is unreadable or corrupted"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
