//! Circulation service: the borrow/return workflow
//!
//! Gates the creation and closure of borrowing records. A record starts
//! open and is closed exactly once; at most one open record may exist per
//! (book, patron) pair, enforced by an existence check before the insert.

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::borrowing_record::BorrowingRecord,
    repository::Repository,
};

#[derive(Clone)]
pub struct CirculationService {
    repository: Repository,
}

impl CirculationService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Borrow a book for a patron, creating a new open record.
    ///
    /// Fails with NotFound when the book or the patron does not exist, and
    /// with Conflict when the pair already has an open record. No
    /// transaction spans the existence check and the insert; two concurrent
    /// calls for the same pair can race past the check.
    pub async fn borrow_book(&self, book_id: i64, patron_id: i64) -> AppResult<BorrowingRecord> {
        let book = self
            .repository
            .books
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", book_id)))?;

        let patron = self
            .repository
            .patrons
            .find_by_id(patron_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Patron with id {} not found", patron_id))
            })?;

        if self
            .repository
            .borrowing_records
            .find_open(book.id, patron.id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("Book is already borrowed".to_string()));
        }

        let today = Utc::now().date_naive();
        let record = self
            .repository
            .borrowing_records
            .insert(book.id, patron.id, today)
            .await?;

        tracing::info!(
            record_id = record.id,
            book_id,
            patron_id,
            "borrowing record created"
        );
        Ok(record)
    }

    /// Return a borrowed book, closing the open record for the pair.
    ///
    /// Book and patron existence are checked together; either missing
    /// yields a single NotFound that does not say which one was absent.
    pub async fn return_book(&self, book_id: i64, patron_id: i64) -> AppResult<BorrowingRecord> {
        let book = self.repository.books.find_by_id(book_id).await?;
        let patron = self.repository.patrons.find_by_id(patron_id).await?;

        if book.is_none() || patron.is_none() {
            return Err(AppError::NotFound(format!(
                "Book or patron not found (book id {}, patron id {})",
                book_id, patron_id
            )));
        }

        let record = self
            .repository
            .borrowing_records
            .find_open(book_id, patron_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Borrowing record not found for book id {} and patron id {}",
                    book_id, patron_id
                ))
            })?;

        let today = Utc::now().date_naive();
        let closed = self
            .repository
            .borrowing_records
            .close(record.id, today)
            .await?;

        tracing::info!(record_id = closed.id, book_id, patron_id, "borrowing record closed");
        Ok(closed)
    }
}
