use rust_decimal::Decimal;

use kernel::prelude::entity::{
    AccountId, AccountKind, BankAccount, DestructBankAccount, FirstName, LastName,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankAccountDto {
    pub id: i32,
    pub kind: AccountKind,
    pub first_name: String,
    pub last_name: String,
    pub balance: Decimal,
    pub bonus_points: i64,
    pub is_closed: bool,
}

impl From<BankAccount> for BankAccountDto {
    fn from(value: BankAccount) -> Self {
        let DestructBankAccount {
            id,
            kind,
            first_name,
            last_name,
            balance,
            bonus_points,
            is_closed,
        } = value.into_destruct();
        Self {
            id: id.into(),
            kind,
            first_name: first_name.into(),
            last_name: last_name.into(),
            balance: balance.into(),
            bonus_points: bonus_points.into(),
            is_closed: is_closed.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBankAccountDto {
    pub id: i32,
    pub kind: AccountKind,
    pub first_name: String,
    pub last_name: String,
}

impl From<CreateBankAccountDto> for BankAccount {
    fn from(value: CreateBankAccountDto) -> Self {
        BankAccount::new(
            AccountId::new(value.id),
            value.kind,
            FirstName::new(value.first_name),
            LastName::new(value.last_name),
        )
    }
}
