use error_stack::Report;
use kernel::KernelError;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

/// Turns an expected failure into `false` and passes any other report on.
pub fn expect_failure(
    result: error_stack::Result<(), KernelError>,
    expected: KernelError,
) -> error_stack::Result<bool, KernelError> {
    match result {
        Ok(()) => Ok(true),
        Err(report) if *report.current_context() == expected => Ok(false),
        Err(report) => Err(report),
    }
}
