use error_stack::Report;

use kernel::interface::compare::Comparer;
use kernel::interface::logger::Logger;
use kernel::interface::predicate::Predicate;
use kernel::interface::storage::Storage;
use kernel::prelude::entity::Entity;
use kernel::KernelError;

/// In-memory ordered list of entities with value-based duplicate detection.
///
/// Every failing operation leaves the list exactly as it was.
#[derive(Debug)]
pub struct ListService<T, L> {
    items: Vec<T>,
    logger: L,
}

impl<T: Entity, L: Logger> ListService<T, L> {
    pub fn new(logger: L) -> Self {
        Self {
            items: Vec::new(),
            logger,
        }
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    pub fn add(&mut self, item: T) -> error_stack::Result<(), KernelError> {
        if self.items.contains(&item) {
            self.logger
                .warn(&format!("Rejected duplicate {}: {item}", T::NAME));
            return Err(Report::new(KernelError::AlreadyExists)
                .attach_printable(format!("{} already exists in the list: {item}", T::NAME)));
        }

        self.logger.debug(&format!("Adding {}: {item}", T::NAME));
        self.items.push(item);
        Ok(())
    }

    /// Removes the first entry equal to `item` and hands it back.
    pub fn remove(&mut self, item: &T) -> error_stack::Result<T, KernelError> {
        let Some(position) = self.items.iter().position(|entry| entry == item) else {
            self.logger
                .warn(&format!("Cannot remove missing {}: {item}", T::NAME));
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("{} doesn't exist in the list: {item}", T::NAME)));
        };

        self.logger.debug(&format!("Removing {}: {item}", T::NAME));
        Ok(self.items.remove(position))
    }

    pub fn find(&self, predicate: &impl Predicate<T>) -> Option<&T> {
        let found = self.items.iter().find(|item| predicate.is_true(item));
        if found.is_none() {
            self.logger
                .trace(&format!("No {} matched the predicate", T::NAME));
        }
        found
    }

    pub fn find_mut(&mut self, predicate: &impl Predicate<T>) -> Option<&mut T> {
        self.items.iter_mut().find(|item| predicate.is_true(item))
    }

    pub fn get_all(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Stable in-place sort.
    pub fn sort(&mut self, comparer: &impl Comparer<T>) {
        self.logger
            .debug(&format!("Sorting {} {} entries", self.items.len(), T::NAME));
        self.items.sort_by(|first, second| comparer.compare(first, second));
    }

    pub fn remove_all(&mut self) {
        self.logger
            .debug(&format!("Removing all {} {} entries", self.items.len(), T::NAME));
        self.items.clear();
    }

    /// Appends every stored entry that is not already present.
    /// Returns how many entries were added.
    pub fn load_from_storage(
        &mut self,
        storage: &impl Storage<T>,
    ) -> error_stack::Result<usize, KernelError> {
        let loaded = storage.load().map_err(|report| {
            self.logger
                .error(&format!("Failed to load {} entries: {report:?}", T::NAME));
            report
        })?;

        let total = loaded.len();
        let mut added = 0;
        for item in loaded {
            if !self.items.contains(&item) {
                self.items.push(item);
                added += 1;
            }
        }

        self.logger.info(&format!(
            "Loaded {total} {} entries from storage, {added} new",
            T::NAME
        ));
        Ok(added)
    }

    pub fn save_to_storage(&self, storage: &impl Storage<T>) -> error_stack::Result<(), KernelError> {
        storage.save(&self.items).map_err(|report| {
            self.logger
                .error(&format!("Failed to save {} entries: {report:?}", T::NAME));
            report
        })?;

        self.logger.info(&format!(
            "Saved {} {} entries to storage",
            self.items.len(),
            T::NAME
        ));
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test {
    use std::cell::RefCell;
    use std::cmp::Ordering;

    use error_stack::Report;
    use rust_decimal::Decimal;

    use kernel::interface::compare::{PriceComparer, TitleComparer};
    use kernel::interface::logger::Logger;
    use kernel::interface::predicate::{BookIsFree, TitleContains};
    use kernel::interface::storage::Storage;
    use kernel::prelude::entity::{
        Book, BookAuthor, BookIsbn, BookPagesAmount, BookPrice, BookPublishingHouse,
        BookPublishingYear, BookTitle,
    };
    use kernel::KernelError;

    use crate::service::ListService;

    #[derive(Default)]
    pub(crate) struct RecordingLogger {
        pub(crate) lines: RefCell<Vec<String>>,
    }

    impl RecordingLogger {
        fn record(&self, level: &str, message: &str) {
            self.lines.borrow_mut().push(format!("{level}: {message}"));
        }
    }

    impl Logger for RecordingLogger {
        fn trace(&self, message: &str) {
            self.record("TRACE", message)
        }
        fn debug(&self, message: &str) {
            self.record("DEBUG", message)
        }
        fn info(&self, message: &str) {
            self.record("INFO", message)
        }
        fn warn(&self, message: &str) {
            self.record("WARN", message)
        }
        fn error(&self, message: &str) {
            self.record("ERROR", message)
        }
    }

    pub(crate) struct MemoryStorage<T> {
        pub(crate) items: RefCell<Vec<T>>,
    }

    impl<T> Default for MemoryStorage<T> {
        fn default() -> Self {
            Self {
                items: RefCell::new(Vec::new()),
            }
        }
    }

    impl<T: Clone> Storage<T> for MemoryStorage<T> {
        fn load(&self) -> error_stack::Result<Vec<T>, KernelError> {
            Ok(self.items.borrow().clone())
        }

        fn save(&self, items: &[T]) -> error_stack::Result<(), KernelError> {
            *self.items.borrow_mut() = items.to_vec();
            Ok(())
        }
    }

    struct BrokenStorage;

    impl Storage<Book> for BrokenStorage {
        fn load(&self) -> error_stack::Result<Vec<Book>, KernelError> {
            Err(Report::new(KernelError::Storage))
        }

        fn save(&self, _items: &[Book]) -> error_stack::Result<(), KernelError> {
            Err(Report::new(KernelError::Storage))
        }
    }

    fn book(title: &str, cents: i64) -> Book {
        Book::new(
            BookTitle::new(title),
            BookAuthor::new("Author"),
            BookIsbn::default(),
            BookPublishingHouse::default(),
            BookPublishingYear::new(2020),
            BookPagesAmount::new(100).unwrap(),
            BookPrice::new(Decimal::new(cents, 2)).unwrap(),
        )
    }

    fn titles<L: Logger>(service: &ListService<Book, L>) -> Vec<String> {
        service
            .get_all()
            .iter()
            .map(|book| String::from(book.title().clone()))
            .collect()
    }

    #[test]
    fn add_rejects_duplicates() {
        let mut service = ListService::new(RecordingLogger::default());
        let first = book("Nice Book", 0);
        service.add(first.clone()).unwrap();

        let report = service.add(first.clone()).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::AlreadyExists);

        let report = service.add(book("Nice Book", 0)).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::AlreadyExists);
        assert_eq!(service.len(), 1);
        assert!(service
            .logger()
            .lines
            .borrow()
            .iter()
            .any(|line| line.starts_with("WARN: Rejected duplicate book")));
    }

    #[test]
    fn remove_missing_fails() {
        let mut service = ListService::new(RecordingLogger::default());
        service.add(book("A", 100)).unwrap();

        let report = service.remove(&book("B", 100)).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::NotFound);
        assert_eq!(service.len(), 1);

        let removed = service.remove(&book("A", 100)).unwrap();
        assert_eq!(removed, book("A", 100));
        assert!(service.is_empty());
    }

    #[test]
    fn find_returns_first_match() {
        let mut service = ListService::new(RecordingLogger::default());
        service.add(book("A Very Nice Book", 100)).unwrap();
        service.add(book("Nice Book", 0)).unwrap();
        service.add(book("Free Book", 0)).unwrap();

        let free = service.find(&BookIsFree).unwrap();
        assert_eq!(free, &book("Nice Book", 0));

        let nice = service.find(&TitleContains::new("Nice")).unwrap();
        assert_eq!(nice, &book("A Very Nice Book", 100));

        assert!(service.find(&TitleContains::new("Missing")).is_none());
        assert!(service
            .find(&|item: &Book| item.pages_amount().as_ref() == &100)
            .is_some());
    }

    #[test]
    fn sort_is_stable() {
        let mut service = ListService::new(RecordingLogger::default());
        service.add(book("C", 100)).unwrap();
        service.add(book("A", 300)).unwrap();
        service.add(book("B", 100)).unwrap();

        service.sort(&TitleComparer);
        assert_eq!(titles(&service), vec!["A", "B", "C"]);

        service.sort(&PriceComparer);
        assert_eq!(titles(&service), vec!["B", "C", "A"]);

        service.sort(&|first: &Book, second: &Book| second.compare_to(Some(first)));
        assert_eq!(titles(&service), vec!["C", "B", "A"]);
        assert_eq!(
            book("A", 1).compare_to(Some(&book("A", 2))),
            Ordering::Equal
        );
    }

    #[test]
    fn load_skips_present_entries() {
        let storage = MemoryStorage::default();
        let mut service = ListService::new(RecordingLogger::default());
        service.add(book("A", 100)).unwrap();
        service.add(book("B", 200)).unwrap();
        service.save_to_storage(&storage).unwrap();

        service.remove_all();
        assert!(service.is_empty());

        assert_eq!(service.load_from_storage(&storage).unwrap(), 2);
        assert_eq!(service.load_from_storage(&storage).unwrap(), 0);
        assert_eq!(titles(&service), vec!["A", "B"]);
    }

    #[test]
    fn storage_failure_leaves_list_unchanged() {
        let mut service = ListService::new(RecordingLogger::default());
        service.add(book("A", 100)).unwrap();

        let report = service.load_from_storage(&BrokenStorage).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Storage);
        let report = service.save_to_storage(&BrokenStorage).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Storage);
        assert_eq!(titles(&service), vec!["A"]);
        assert!(service
            .logger()
            .lines
            .borrow()
            .iter()
            .any(|line| line.starts_with("ERROR: Failed to load book")));
    }
}
