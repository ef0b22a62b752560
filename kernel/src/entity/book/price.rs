use error_stack::Report;
use rust_decimal::Decimal;
use vodca::{AsRefln, Fromln};

use crate::KernelError;

#[derive(Debug, Clone, Copy, Default, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookPrice(Decimal);

impl BookPrice {
    pub fn new(price: impl Into<Decimal>) -> error_stack::Result<Self, KernelError> {
        let price = price.into();
        if price.is_sign_negative() && !price.is_zero() {
            return Err(Report::new(KernelError::Validation)
                .attach_printable(format!("Price cannot be less than zero: {price}")));
        }
        Ok(Self(price))
    }

    pub fn is_free(&self) -> bool {
        self.0.is_zero()
    }
}

#[cfg(test)]
mod test {
    use rust_decimal::Decimal;

    use crate::entity::BookPrice;
    use crate::KernelError;

    #[test]
    fn rejects_negative() {
        let report = BookPrice::new(Decimal::new(-1, 2)).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Validation);
    }

    #[test]
    fn negative_zero_is_free() {
        let price = BookPrice::new(Decimal::from_parts(0, 0, 0, true, 2)).unwrap();
        assert!(price.is_free());
    }
}
