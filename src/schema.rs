//! The GraphQL roots. Every resolver is a single call into the [`BookStore`].

use crate::{
    model::{Book, BookUpdate, NewBook},
    store::BookStore,
};
use async_graphql::{EmptySubscription, Object, Schema};

/// The executable schema served by this crate.
pub type BookSchema = Schema<Query, Mutation, EmptySubscription>;

/// The operations that change the collection.
#[derive(Clone, Debug)]
pub struct Mutation {
    /// The books being served.
    store: BookStore,
}

#[Object]
impl Mutation {
    /// Appends a book and returns it.
    async fn add_book(&self, title: String, author: String) -> Option<Book> {
        Some(self.store.add(NewBook { title, author }))
    }

    /// Removes the book with the given id and returns it, or null if there is none.
    async fn delete_book(&self, id: i32) -> Option<Book> {
        self.store.delete(id)
    }

    /// Replaces the book with the given id and returns the replacement, or null if there is none.
    async fn update_book(&self, id: i32, title: String, author: String) -> Option<Book> {
        self.store.update(BookUpdate { id, title, author })
    }
}

/// The read-only operations.
#[derive(Clone, Debug)]
pub struct Query {
    /// The books being served.
    store: BookStore,
}

#[Object]
impl Query {
    /// Every book, in insertion order.
    async fn books(&self) -> Option<Vec<Option<Book>>> {
        Some(self.store.books().into_iter().map(Some).collect())
    }

    /// The first book with the given id, or null if there is none.
    async fn book(&self, id: i32) -> Option<Book> {
        self.store.book(id)
    }
}

/// Builds the schema, with both roots reading from and writing to `store`.
#[inline]
#[must_use]
pub fn build_schema(store: BookStore) -> BookSchema {
    // Both roots hold a handle to the same collection.
    let query = Query {
        store: store.clone(),
    };
    let mutation = Mutation { store };
    Schema::new(query, mutation, EmptySubscription)
}
