use std::io::ErrorKind;
use std::string::FromUtf8Error;

use error_stack::Report;

use kernel::KernelError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Io(std::io::Error),
    #[error(transparent)]
    Env(dotenvy::Error),
    #[error(transparent)]
    Conversion(anyhow::Error),
    #[error("Corrupted record: {0}")]
    Corrupted(String),
}

impl From<std::io::Error> for DriverError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<dotenvy::Error> for DriverError {
    fn from(value: dotenvy::Error) -> Self {
        Self::Env(value)
    }
}

impl From<FromUtf8Error> for DriverError {
    fn from(value: FromUtf8Error) -> Self {
        Self::Conversion(anyhow::Error::new(value))
    }
}

pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T> ConvertError for Result<T, DriverError> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let context = match &error {
                DriverError::Io(io) if io.kind() == ErrorKind::NotFound => KernelError::NotFound,
                DriverError::Env(_) => KernelError::Internal,
                _ => KernelError::Storage,
            };
            Report::new(error).change_context(context)
        })
    }
}

#[cfg(test)]
mod test {
    use std::io::{Error, ErrorKind};

    use kernel::KernelError;

    use crate::error::{ConvertError, DriverError};

    #[test]
    fn maps_to_kernel_errors() {
        let missing: Result<(), DriverError> = Err(Error::from(ErrorKind::NotFound).into());
        let report = missing.convert_error().unwrap_err();
        assert_eq!(report.current_context(), &KernelError::NotFound);

        let truncated: Result<(), DriverError> =
            Err(Error::from(ErrorKind::UnexpectedEof).into());
        let report = truncated.convert_error().unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Storage);

        let corrupted: Result<(), DriverError> = Err(DriverError::Corrupted("flags".into()));
        let report = corrupted.convert_error().unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Storage);
    }
}
