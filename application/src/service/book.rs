use kernel::interface::logger::Logger;
use kernel::prelude::entity::Book;
use kernel::KernelError;

use crate::service::ListService;
use crate::transfer::CreateBookDto;

pub type BookListService<L> = ListService<Book, L>;

impl<L: Logger> ListService<Book, L> {
    /// Validates the dto and adds the resulting book.
    pub fn add_book(&mut self, dto: CreateBookDto) -> error_stack::Result<Book, KernelError> {
        let book = Book::try_from(dto)?;
        self.add(book.clone())?;
        Ok(book)
    }
}
