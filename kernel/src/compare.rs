use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::entity::{BankAccount, Book};

/// Ordering strategy used by list services when sorting.
pub trait Comparer<T> {
    fn compare(&self, first: &T, second: &T) -> Ordering;
}

impl<T, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, first: &T, second: &T) -> Ordering {
        self(first, second)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TitleComparer;

impl Comparer<Book> for TitleComparer {
    fn compare(&self, first: &Book, second: &Book) -> Ordering {
        first.compare_to(Some(second))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PriceComparer;

impl Comparer<Book> for PriceComparer {
    fn compare(&self, first: &Book, second: &Book) -> Ordering {
        let first: &Decimal = first.price().as_ref();
        let second: &Decimal = second.price().as_ref();
        first.cmp(second)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AccountIdComparer;

impl Comparer<BankAccount> for AccountIdComparer {
    fn compare(&self, first: &BankAccount, second: &BankAccount) -> Ordering {
        let first: &i32 = first.id().as_ref();
        let second: &i32 = second.id().as_ref();
        first.cmp(second)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceComparer;

impl Comparer<BankAccount> for BalanceComparer {
    fn compare(&self, first: &BankAccount, second: &BankAccount) -> Ordering {
        let first: &Decimal = first.balance().as_ref();
        let second: &Decimal = second.balance().as_ref();
        first.cmp(second)
    }
}
