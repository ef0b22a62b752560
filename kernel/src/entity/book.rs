mod author;
mod format;
mod isbn;
mod pages;
mod price;
mod publisher;
mod title;

pub use self::{author::*, format::*, isbn::*, pages::*, price::*, publisher::*, title::*};

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use destructure::Destructure;
use rust_decimal::Decimal;
use vodca::References;

use crate::entity::Entity;

#[derive(Debug, Clone, Hash, Eq, PartialEq, References, Destructure)]
pub struct Book {
    title: BookTitle,
    author: BookAuthor,
    isbn: BookIsbn,
    publishing_house: BookPublishingHouse,
    publishing_year: BookPublishingYear,
    pages_amount: BookPagesAmount,
    price: BookPrice,
}

impl Book {
    pub fn new(
        title: BookTitle,
        author: BookAuthor,
        isbn: BookIsbn,
        publishing_house: BookPublishingHouse,
        publishing_year: BookPublishingYear,
        pages_amount: BookPagesAmount,
        price: BookPrice,
    ) -> Self {
        Self {
            title,
            author,
            isbn,
            publishing_house,
            publishing_year,
            pages_amount,
            price,
        }
    }

    /// Orders books by title only, using ordinal string comparison.
    ///
    /// A missing book is always ordered before this one, so `None` yields
    /// [`Ordering::Greater`]. Two books with the same title compare as
    /// `Equal` even when they are not equal by value.
    pub fn compare_to(&self, other: Option<&Book>) -> Ordering {
        match other {
            None => Ordering::Greater,
            Some(other) => {
                let title: &String = self.title.as_ref();
                let other_title: &String = other.title.as_ref();
                title.cmp(other_title)
            }
        }
    }

    /// Renders the book using one of the [`BookFormat`] codes.
    ///
    /// The provider chooses the decimal separator for the price and may
    /// render a code itself through [`FormatProvider::custom_format`].
    pub fn format(&self, code: &str, provider: &impl FormatProvider) -> String {
        let code = normalize_code(code);
        if let Some(custom) = provider.custom_format(&code, self) {
            return custom;
        }

        let title: &String = self.title.as_ref();
        let author: &String = self.author.as_ref();
        let isbn: &String = self.isbn.as_ref();
        let house: &String = self.publishing_house.as_ref();
        let year: &i32 = self.publishing_year.as_ref();
        let pages: &i32 = self.pages_amount.as_ref();
        let price: &Decimal = self.price.as_ref();

        match BookFormat::from_code(&code) {
            BookFormat::General => format!(
                "Title: {title}; Author: {author}; Price: {}; ISBN: {isbn}; \
                 Publishing house: {house}; Publishing year: {year}; Amount of pages: {pages};",
                provider.format_decimal(price)
            ),
            BookFormat::Short => format!("{author}, {title}"),
            BookFormat::Citation => format!("{author}, {title}, \"{house}\", {year}"),
            BookFormat::Reference => {
                format!("ISBN: {isbn}, {author}, {title}, \"{house}\", {year}, P. {pages}.")
            }
            BookFormat::Full => format!(
                "ISBN: {isbn}, {author}, {title}, \"{house}\", {year}, P. {pages}., {}.",
                provider.format_decimal(price)
            ),
        }
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format("G", &NumberFormat::invariant()))
    }
}

impl Entity for Book {
    const NAME: &'static str = "book";
}
