use error_stack::Report;
use rust_decimal::Decimal;

use kernel::prelude::entity::{
    Book, BookAuthor, BookIsbn, BookPagesAmount, BookPrice, BookPublishingHouse,
    BookPublishingYear, BookTitle, DestructBook,
};
use kernel::KernelError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publishing_house: String,
    pub publishing_year: i32,
    pub pages_amount: i32,
    pub price: Decimal,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            title,
            author,
            isbn,
            publishing_house,
            publishing_year,
            pages_amount,
            price,
        } = value.into_destruct();
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            publishing_house: publishing_house.into(),
            publishing_year: publishing_year.into(),
            pages_amount: pages_amount.into(),
            price: price.into(),
        }
    }
}

/// Missing text fields become empty strings.
#[derive(Debug, Clone, Default)]
pub struct CreateBookDto {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub publishing_house: Option<String>,
    pub publishing_year: i32,
    pub pages_amount: i32,
    pub price: Decimal,
}

impl CreateBookDto {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

impl TryFrom<CreateBookDto> for Book {
    type Error = Report<KernelError>;
    fn try_from(value: CreateBookDto) -> Result<Self, Self::Error> {
        Ok(Book::new(
            BookTitle::new(value.title.unwrap_or_default()),
            BookAuthor::new(value.author.unwrap_or_default()),
            BookIsbn::new(value.isbn.unwrap_or_default()),
            BookPublishingHouse::new(value.publishing_house.unwrap_or_default()),
            BookPublishingYear::new(value.publishing_year),
            BookPagesAmount::new(value.pages_amount)?,
            BookPrice::new(value.price)?,
        ))
    }
}
