use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use error_stack::{Report, ResultExt};
use rust_decimal::Decimal;
use tracing::debug;

use kernel::interface::storage::Storage;
use kernel::prelude::entity::{
    Book, BookAuthor, BookIsbn, BookPagesAmount, BookPrice, BookPublishingHouse,
    BookPublishingYear, BookTitle,
};
use kernel::KernelError;

use crate::error::{ConvertError, DriverError};
use crate::storage::binary::{read_records, write_records, BinaryReader, BinaryWriter};

/// Stores books as consecutive records with no header or count.
///
/// Record layout: title, author, price, pages amount, ISBN,
/// publishing house, publishing year.
#[derive(Debug, Clone)]
pub struct BinaryBookStorage {
    path: PathBuf,
}

impl BinaryBookStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage<Book> for BinaryBookStorage {
    #[tracing::instrument(skip_all, fields(path = %self.path.display()))]
    fn load(&self) -> error_stack::Result<Vec<Book>, KernelError> {
        if !self.path.is_file() {
            return Err(Report::new(KernelError::NotFound).attach_printable(format!(
                "Book storage file does not exist: {}",
                self.path.display()
            )));
        }

        let records = read_records(&self.path, BookRecord::read)
            .convert_error()
            .attach_printable_lazy(|| format!("Failed to read {}", self.path.display()))?;
        let books = records
            .into_iter()
            .map(Book::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Loaded {} books", books.len());
        Ok(books)
    }

    #[tracing::instrument(skip_all, fields(path = %self.path.display()))]
    fn save(&self, items: &[Book]) -> error_stack::Result<(), KernelError> {
        write_records(&self.path, items, BookRecord::write)
            .convert_error()
            .attach_printable_lazy(|| format!("Failed to write {}", self.path.display()))?;

        debug!("Saved {} books", items.len());
        Ok(())
    }
}

#[derive(Debug)]
struct BookRecord {
    title: String,
    author: String,
    price: Decimal,
    pages_amount: i32,
    isbn: String,
    publishing_house: String,
    publishing_year: i32,
}

impl BookRecord {
    fn read<R: Read>(reader: &mut BinaryReader<R>) -> Result<Self, DriverError> {
        Ok(Self {
            title: reader.read_string()?,
            author: reader.read_string()?,
            price: reader.read_decimal()?,
            pages_amount: reader.read_i32()?,
            isbn: reader.read_string()?,
            publishing_house: reader.read_string()?,
            publishing_year: reader.read_i32()?,
        })
    }

    fn write<W: Write>(writer: &mut BinaryWriter<W>, book: &Book) -> Result<(), DriverError> {
        let title: &String = book.title().as_ref();
        let author: &String = book.author().as_ref();
        let isbn: &String = book.isbn().as_ref();
        let publishing_house: &String = book.publishing_house().as_ref();

        writer.write_string(title)?;
        writer.write_string(author)?;
        writer.write_decimal(book.price().as_ref())?;
        writer.write_i32(*book.pages_amount().as_ref())?;
        writer.write_string(isbn)?;
        writer.write_string(publishing_house)?;
        writer.write_i32(*book.publishing_year().as_ref())?;
        Ok(())
    }
}

impl TryFrom<BookRecord> for Book {
    type Error = Report<KernelError>;
    fn try_from(value: BookRecord) -> Result<Self, Self::Error> {
        Ok(Book::new(
            BookTitle::new(value.title),
            BookAuthor::new(value.author),
            BookIsbn::new(value.isbn),
            BookPublishingHouse::new(value.publishing_house),
            BookPublishingYear::new(value.publishing_year),
            BookPagesAmount::new(value.pages_amount)?,
            BookPrice::new(value.price)?,
        ))
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use rust_decimal::Decimal;

    use kernel::interface::storage::Storage;
    use kernel::prelude::entity::{
        Book, BookAuthor, BookIsbn, BookPagesAmount, BookPrice, BookPublishingHouse,
        BookPublishingYear, BookTitle,
    };
    use kernel::KernelError;

    use crate::storage::BinaryBookStorage;

    fn book(title: &str, pages: i32, cents: i64) -> error_stack::Result<Book, KernelError> {
        Ok(Book::new(
            BookTitle::new(title),
            BookAuthor::new("Jeffrey Richter"),
            BookIsbn::new("978-0-7356-6745-7"),
            BookPublishingHouse::new("Microsoft Press"),
            BookPublishingYear::new(2012),
            BookPagesAmount::new(pages)?,
            BookPrice::new(Decimal::new(cents, 2))?,
        ))
    }

    #[test]
    fn round_trip() -> error_stack::Result<(), KernelError> {
        let dir = tempfile::tempdir().unwrap();
        let storage = BinaryBookStorage::new(dir.path().join("books.data"));
        let books = vec![
            book("CLR via C#", 826, 5999)?,
            book("Пиши, сокращай", 440, 0)?,
            book("", 0, 1)?,
        ];

        storage.save(&books)?;
        let loaded = storage.load()?;
        assert_eq!(loaded, books);

        storage.save(&books[..1])?;
        assert_eq!(storage.load()?, books[..1].to_vec());

        storage.save(&[])?;
        assert!(storage.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let storage = BinaryBookStorage::new(dir.path().join("missing.data"));
        let report = storage.load().unwrap_err();
        assert_eq!(report.current_context(), &KernelError::NotFound);
    }

    #[test]
    fn truncated_file_is_storage_error() -> error_stack::Result<(), KernelError> {
        let dir = tempfile::tempdir().unwrap();
        let storage = BinaryBookStorage::new(dir.path().join("books.data"));
        storage.save(&[book("CLR via C#", 826, 5999)?])?;

        let bytes = fs::read(storage.path()).unwrap();
        fs::write(storage.path(), &bytes[..bytes.len() - 2]).unwrap();

        let report = storage.load().unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Storage);
        Ok(())
    }

    #[test]
    fn negative_pages_on_disk_fail_validation() -> error_stack::Result<(), KernelError> {
        let dir = tempfile::tempdir().unwrap();
        let storage = BinaryBookStorage::new(dir.path().join("books.data"));
        storage.save(&[book("A", 7, 100)?])?;

        // pages amount follows 2-byte title, 16-byte author, 16-byte price
        let mut bytes = fs::read(storage.path()).unwrap();
        let offset = 2 + 16 + 16;
        bytes[offset..offset + 4].copy_from_slice(&(-7i32).to_le_bytes());
        fs::write(storage.path(), bytes).unwrap();

        let report = storage.load().unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Validation);
        Ok(())
    }
}
