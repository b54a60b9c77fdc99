//! Repository layer for entity storage
//!
//! Each entity gets a storage interface; the workflow and services only ever
//! talk to these traits. Two backends exist: Postgres via sqlx (production)
//! and an in-memory store used by the tests.

pub mod books;
pub mod borrowing_records;
pub mod memory;
pub mod patrons;

use std::sync::Arc;

use sqlx::{Pool, Postgres};

pub use books::BooksRepository;
pub use borrowing_records::BorrowingRecordsRepository;
pub use patrons::PatronsRepository;

/// Main repository struct aggregating the per-entity stores
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<dyn BooksRepository>,
    pub patrons: Arc<dyn PatronsRepository>,
    pub borrowing_records: Arc<dyn BorrowingRecordsRepository>,
}

impl Repository {
    /// Create a Postgres-backed repository with the given database pool
    pub fn postgres(pool: Pool<Postgres>) -> Self {
        Self {
            books: Arc::new(books::PgBooksRepository::new(pool.clone())),
            patrons: Arc::new(patrons::PgPatronsRepository::new(pool.clone())),
            borrowing_records: Arc::new(
                borrowing_records::PgBorrowingRecordsRepository::new(pool),
            ),
        }
    }

    /// Create a repository backed by a single in-memory store
    pub fn in_memory() -> Self {
        let store = Arc::new(memory::MemoryStore::new());
        Self {
            books: store.clone(),
            patrons: store.clone(),
            borrowing_records: store,
        }
    }
}
