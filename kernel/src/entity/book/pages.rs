use error_stack::Report;
use vodca::{AsRefln, Fromln};

use crate::KernelError;

#[derive(Debug, Clone, Copy, Default, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookPagesAmount(i32);

impl BookPagesAmount {
    pub fn new(amount: impl Into<i32>) -> error_stack::Result<Self, KernelError> {
        let amount = amount.into();
        if amount < 0 {
            return Err(Report::new(KernelError::Validation)
                .attach_printable(format!("Pages amount cannot be less than zero: {amount}")));
        }
        Ok(Self(amount))
    }
}

#[cfg(test)]
mod test {
    use crate::entity::BookPagesAmount;
    use crate::KernelError;

    #[test]
    fn rejects_negative() {
        let report = BookPagesAmount::new(-1).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Validation);
        assert_eq!(BookPagesAmount::new(0).unwrap().as_ref(), &0);
    }
}
