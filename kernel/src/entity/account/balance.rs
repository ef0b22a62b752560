use error_stack::Report;
use rust_decimal::Decimal;
use vodca::{AsRefln, Fromln};

use crate::KernelError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct AccountBalance(Decimal);

impl AccountBalance {
    pub fn new(balance: impl Into<Decimal>) -> error_stack::Result<Self, KernelError> {
        let balance = balance.into();
        if balance.is_sign_negative() && !balance.is_zero() {
            return Err(Report::new(KernelError::Validation)
                .attach_printable(format!("Balance cannot be less than zero: {balance}")));
        }
        Ok(Self(balance))
    }
}

/// Bonus points never drop below zero; negative input is floored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct BonusPoints(i64);

impl BonusPoints {
    pub fn new(points: impl Into<i64>) -> Self {
        Self(points.into().max(0))
    }

    pub fn credit(self, points: i64) -> Self {
        Self::new(self.0.saturating_add(points))
    }

    pub fn debit(self, points: i64) -> Self {
        Self::new(self.0.saturating_sub(points))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct IsClosed(bool);

impl IsClosed {
    pub fn new(value: impl Into<bool>) -> Self {
        Self(value.into())
    }
}
