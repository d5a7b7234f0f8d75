//! The in-memory book store shared by all resolvers.

use crate::model::{Book, BookUpdate, NewBook};
use clap::ValueEnum;
use parking_lot::RwLock;
use std::{collections::HashSet, sync::Arc};
use tracing::{debug, warn};

/// How the store picks the id of a newly added book.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum IdAssignment {
    /// One more than the current number of books. Collides with an existing id after any
    /// deletion that is not of the last book.
    #[default]
    Length,
    /// A counter that only ever grows, starting one past the largest id initially present. Once
    /// it passes `i32::MAX`, new books get the lowest positive id no current book holds.
    Counter,
}

/// A handle to an ordered, in-memory collection of books.
///
/// Cloning the handle does not clone the books: all clones observe the same collection. Every
/// operation takes the lock once, so operations are atomic with respect to each other.
#[derive(Clone, Debug)]
pub struct BookStore {
    /// The shared state.
    shelf: Arc<RwLock<Shelf>>,
}

/// The state behind a [`BookStore`].
#[derive(Debug)]
struct Shelf {
    /// The books, in insertion order.
    books: Vec<Book>,
    /// The policy for new ids.
    assignment: IdAssignment,
    /// The next id handed out under [`IdAssignment::Counter`], or `None` once exhausted.
    next_id: Option<i32>,
}

impl Shelf {
    /// Index of the first book with the given id.
    fn position(&self, id: i32) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }

    /// Picks the id for the next added book and advances the counter.
    fn assign_id(&mut self) -> i32 {
        match self.assignment {
            IdAssignment::Length => (self.books.len() as i32).saturating_add(1),
            IdAssignment::Counter => match self.next_id {
                Some(id) => {
                    self.next_id = id.checked_add(1);
                    id
                },
                None => {
                    let id = self.lowest_free_id();
                    warn!(id, "id counter exhausted, assigning lowest free id");
                    id
                },
            },
        }
    }

    /// The lowest positive id not held by any book.
    fn lowest_free_id(&self) -> i32 {
        let taken = self.books.iter().map(|book| book.id).collect::<HashSet<_>>();
        // There are fewer books than positive ids, so this always finds one.
        (1..=i32::MAX).find(|id| !taken.contains(id)).unwrap_or(1)
    }
}

impl BookStore {
    /// Creates an empty store.
    #[inline]
    #[must_use]
    pub fn new(assignment: IdAssignment) -> Self {
        Self::with_books(Vec::new(), assignment)
    }

    /// Creates a store holding the [seed records](Book::seed).
    #[inline]
    #[must_use]
    pub fn seeded(assignment: IdAssignment) -> Self {
        Self::with_books(Book::seed(), assignment)
    }

    /// Creates a store holding the given books, in order.
    #[inline]
    #[must_use]
    pub fn with_books(books: Vec<Book>, assignment: IdAssignment) -> Self {
        let next_id = books
            .iter()
            .map(|book| book.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1));
        Self {
            shelf: Arc::new(RwLock::new(Shelf {
                books,
                assignment,
                next_id,
            })),
        }
    }

    /// All books, in current order.
    #[inline]
    #[must_use]
    pub fn books(&self) -> Vec<Book> {
        self.shelf.read().books.clone()
    }

    /// The first book with the given id.
    #[inline]
    #[must_use]
    pub fn book(&self, id: i32) -> Option<Book> {
        self.shelf
            .read()
            .books
            .iter()
            .find(|book| book.id == id)
            .cloned()
    }

    /// Appends a new book and returns it. The id is not checked for uniqueness.
    #[inline]
    pub fn add(&self, new: NewBook) -> Book {
        let mut shelf = self.shelf.write();
        let book = Book::new(shelf.assign_id(), new.title, new.author);
        shelf.books.push(book.clone());
        debug!(id = book.id, len = shelf.books.len(), "added book");
        book
    }

    /// Removes the first book with the given id and returns it. The remaining books keep their
    /// relative order.
    #[inline]
    pub fn delete(&self, id: i32) -> Option<Book> {
        let mut shelf = self.shelf.write();
        let Some(index) = shelf.position(id) else {
            debug!(id, "no book to delete");
            return None;
        };
        let removed = shelf.books.remove(index);
        debug!(id, len = shelf.books.len(), "deleted book");
        Some(removed)
    }

    /// Replaces the first book with the given id and returns the replacement.
    #[inline]
    pub fn update(&self, update: BookUpdate) -> Option<Book> {
        let mut shelf = self.shelf.write();
        let Some(index) = shelf.position(update.id) else {
            debug!(id = update.id, "no book to update");
            return None;
        };
        let book = Book::from(update);
        shelf.books[index] = book.clone();
        debug!(id = book.id, "updated book");
        Some(book)
    }

    /// The number of books.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.shelf.read().books.len()
    }

    /// Whether there are no books.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shelf.read().books.is_empty()
    }
}
