//! In-memory storage backend
//!
//! Implements all three repository interfaces over a single mutex-guarded
//! state. Ids are monotonic and never reused, matching the BIGSERIAL
//! behavior of the Postgres backend. Used by the test suites and usable as
//! a throwaway backend for local experimentation.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BookInput},
        borrowing_record::BorrowingRecord,
        patron::{Patron, PatronInput},
    },
};

use super::{BooksRepository, BorrowingRecordsRepository, PatronsRepository};

#[derive(Default)]
struct MemoryState {
    books: BTreeMap<i64, Book>,
    patrons: BTreeMap<i64, Patron>,
    records: BTreeMap<i64, BorrowingRecord>,
    next_book_id: i64,
    next_patron_id: i64,
    next_record_id: i64,
}

pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState::default()),
        }
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| AppError::Internal("memory store lock poisoned".to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BooksRepository for MemoryStore {
    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let state = self.lock()?;
        Ok(state.books.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        let state = self.lock()?;
        Ok(state.books.get(&id).cloned())
    }

    async fn create(&self, data: &BookInput) -> AppResult<Book> {
        let mut state = self.lock()?;
        state.next_book_id += 1;
        let book = Book {
            id: state.next_book_id,
            title: data.title.clone(),
            author: data.author.clone(),
            publication_year: data.publication_year,
            isbn: data.isbn.clone(),
        };
        state.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn update(&self, id: i64, data: &BookInput) -> AppResult<Option<Book>> {
        let mut state = self.lock()?;
        if !state.books.contains_key(&id) {
            return Ok(None);
        }
        let book = Book {
            id,
            title: data.title.clone(),
            author: data.author.clone(),
            publication_year: data.publication_year,
            isbn: data.isbn.clone(),
        };
        state.books.insert(id, book.clone());
        Ok(Some(book))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let mut state = self.lock()?;
        Ok(state.books.remove(&id).is_some())
    }
}

#[async_trait]
impl PatronsRepository for MemoryStore {
    async fn find_all(&self) -> AppResult<Vec<Patron>> {
        let state = self.lock()?;
        Ok(state.patrons.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Patron>> {
        let state = self.lock()?;
        Ok(state.patrons.get(&id).cloned())
    }

    async fn create(&self, data: &PatronInput) -> AppResult<Patron> {
        let mut state = self.lock()?;
        state.next_patron_id += 1;
        let patron = Patron {
            id: state.next_patron_id,
            name: data.name.clone(),
            contact_information: data.contact_information.clone(),
        };
        state.patrons.insert(patron.id, patron.clone());
        Ok(patron)
    }

    async fn update(&self, id: i64, data: &PatronInput) -> AppResult<Option<Patron>> {
        let mut state = self.lock()?;
        if !state.patrons.contains_key(&id) {
            return Ok(None);
        }
        let patron = Patron {
            id,
            name: data.name.clone(),
            contact_information: data.contact_information.clone(),
        };
        state.patrons.insert(id, patron.clone());
        Ok(Some(patron))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let mut state = self.lock()?;
        Ok(state.patrons.remove(&id).is_some())
    }
}

#[async_trait]
impl BorrowingRecordsRepository for MemoryStore {
    async fn find_open(&self, book_id: i64, patron_id: i64) -> AppResult<Option<BorrowingRecord>> {
        let state = self.lock()?;
        Ok(state
            .records
            .values()
            .find(|r| r.book_id == book_id && r.patron_id == patron_id && r.is_open())
            .cloned())
    }

    async fn insert(
        &self,
        book_id: i64,
        patron_id: i64,
        borrow_date: NaiveDate,
    ) -> AppResult<BorrowingRecord> {
        let mut state = self.lock()?;
        state.next_record_id += 1;
        let record = BorrowingRecord {
            id: state.next_record_id,
            book_id,
            patron_id,
            borrow_date,
            return_date: None,
        };
        state.records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn close(&self, id: i64, return_date: NaiveDate) -> AppResult<BorrowingRecord> {
        let mut state = self.lock()?;
        let record = state.records.get_mut(&id).ok_or_else(|| {
            AppError::NotFound(format!("Borrowing record with id {} not found", id))
        })?;
        record.return_date = Some(return_date);
        Ok(record.clone())
    }
}
