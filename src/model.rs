//! The book entity and the typed argument sets of the mutations that act on it.

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// The representation of a book.
// Id uniqueness is not enforced anywhere; see `IdAssignment`.
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// The identifier of the book.
    pub id: i32,
    /// The title of the book.
    pub title: Option<String>,
    /// The person who authored the book.
    pub author: Option<String>,
}

impl Book {
    /// Creates a book with every field present.
    #[inline]
    #[must_use]
    pub fn new(id: i32, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            author: Some(author.into()),
        }
    }

    /// The two records a freshly started server holds.
    #[inline]
    #[must_use]
    pub fn seed() -> Vec<Self> {
        vec![
            Self::new(1, "Rich Dad poor Dad", "Robert Kiyosaki"),
            Self::new(2, "Art of negotiations", "Michael Wheeler"),
        ]
    }
}

/// Arguments of `addBook`. The id is chosen by the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewBook {
    /// The title of the new book.
    pub title: String,
    /// The author of the new book.
    pub author: String,
}

/// Arguments of `updateBook`. All three fields are required, so this is a full replacement and
/// never a merge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookUpdate {
    /// The id of the book to replace. It is also the id of the replacement.
    pub id: i32,
    /// The new title.
    pub title: String,
    /// The new author.
    pub author: String,
}

impl From<BookUpdate> for Book {
    #[inline]
    fn from(update: BookUpdate) -> Self {
        Self::new(update.id, update.title, update.author)
    }
}
