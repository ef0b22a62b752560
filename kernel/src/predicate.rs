use crate::entity::{BankAccount, Book};

/// Search condition used by list services.
pub trait Predicate<T> {
    fn is_true(&self, item: &T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn is_true(&self, item: &T) -> bool {
        self(item)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BookIsFree;

impl Predicate<Book> for BookIsFree {
    fn is_true(&self, item: &Book) -> bool {
        item.price().is_free()
    }
}

#[derive(Debug, Clone)]
pub struct TitleContains(String);

impl TitleContains {
    pub fn new(word: impl Into<String>) -> Self {
        Self(word.into())
    }
}

impl Predicate<Book> for TitleContains {
    fn is_true(&self, item: &Book) -> bool {
        let title: &String = item.title().as_ref();
        title.contains(self.0.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AccountHasId(pub i32);

impl Predicate<BankAccount> for AccountHasId {
    fn is_true(&self, item: &BankAccount) -> bool {
        item.id().as_ref() == &self.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AccountIsClosed;

impl Predicate<BankAccount> for AccountIsClosed {
    fn is_true(&self, item: &BankAccount) -> bool {
        item.closed()
    }
}
