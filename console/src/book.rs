use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;

use application::service::BookListService;
use application::transfer::CreateBookDto;
use driver::config::StorageConfig;
use driver::logger::TracingLogger;
use driver::storage::BinaryBookStorage;
use kernel::interface::compare::{PriceComparer, TitleComparer};
use kernel::interface::predicate::{BookIsFree, TitleContains};
use kernel::prelude::entity::{Book, NumberFormat};
use kernel::KernelError;

use crate::error::expect_failure;

fn hash_of(book: &Book) -> u64 {
    let mut hasher = DefaultHasher::new();
    book.hash(&mut hasher);
    hasher.finish()
}

pub fn run(config: &StorageConfig) -> error_stack::Result<(), KernelError> {
    let first = Book::try_from(CreateBookDto::titled("Nice Book"))?;
    let second = Book::try_from(CreateBookDto::titled("A Very Nice Book"))?;
    let second_equal = Book::try_from(CreateBookDto::titled("A Very Nice Book"))?;

    println!("First book: {first}");
    println!("Second book: {second}");
    println!("Third book: {second_equal}");

    println!("\nFirst equals second: {}", first == second);
    println!("Second equals third: {}", second == second_equal);
    println!(
        "Second and third have same hash codes: {}",
        hash_of(&second) == hash_of(&second_equal)
    );
    println!(
        "First book is greater than second book: {}",
        first.compare_to(Some(&second)).is_gt()
    );
    println!(
        "Second book is in the same position as third: {}",
        second.compare_to(Some(&second_equal)).is_eq()
    );

    let clr = Book::try_from(CreateBookDto {
        title: Some(String::from("CLR via C#")),
        author: Some(String::from("Jeffrey Richter")),
        isbn: Some(String::from("978-0-7356-6745-7")),
        publishing_house: Some(String::from("Microsoft Press")),
        publishing_year: 2012,
        pages_amount: 826,
        price: Decimal::new(5999, 2),
    })?;
    let invariant = NumberFormat::invariant();
    println!();
    for code in ["G", "S", "C", "O", "F"] {
        println!("Format {code}: {}", clr.format(code, &invariant));
    }

    let mut service = BookListService::new(TracingLogger::new("books"));

    println!("\nAdding first book");
    service.add(first.clone())?;
    if expect_failure(service.add(first.clone()), KernelError::AlreadyExists)? {
        println!("Added first book once more");
    } else {
        println!("Couldn't add first book once more");
    }

    println!("\nAdding second book");
    service.add(second)?;
    if expect_failure(service.add(second_equal), KernelError::AlreadyExists)? {
        println!("Added third book that is equal to second");
    } else {
        println!("Couldn't add third book that is equal to second");
    }
    service.add(clr)?;

    service.sort(&TitleComparer);
    service.sort(&PriceComparer);

    match service.find(&BookIsFree) {
        Some(book) => println!("\nBook that is free: {book}"),
        None => println!("\nNo free book found"),
    }
    match service.find(&TitleContains::new("Nice")) {
        Some(book) => println!("Book which title contains word 'Nice': {book}"),
        None => println!("No book contains word 'Nice'"),
    }

    let storage = BinaryBookStorage::new(config.book_path());

    println!("\nBooks in list before saving:");
    for book in service.get_all() {
        println!("{book}");
    }
    service.save_to_storage(&storage)?;

    service.remove_all();
    println!("\nRemoved all books from list.");

    service.load_from_storage(&storage)?;
    service.load_from_storage(&storage)?;

    println!("\nBooks in list after loading from storage:");
    for book in service.get_all() {
        println!("{book}");
    }

    Ok(())
}
