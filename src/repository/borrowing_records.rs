//! Borrowing records repository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::borrowing_record::BorrowingRecord,
};

/// Storage interface for borrowing records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BorrowingRecordsRepository: Send + Sync {
    /// Find the open record (no return date) for a (book, patron) pair
    async fn find_open(&self, book_id: i64, patron_id: i64) -> AppResult<Option<BorrowingRecord>>;

    /// Insert a new open record with the given borrow date
    async fn insert(
        &self,
        book_id: i64,
        patron_id: i64,
        borrow_date: NaiveDate,
    ) -> AppResult<BorrowingRecord>;

    /// Set the return date on a record, closing it
    async fn close(&self, id: i64, return_date: NaiveDate) -> AppResult<BorrowingRecord>;
}

#[derive(Clone)]
pub struct PgBorrowingRecordsRepository {
    pool: Pool<Postgres>,
}

impl PgBorrowingRecordsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BorrowingRecordsRepository for PgBorrowingRecordsRepository {
    async fn find_open(&self, book_id: i64, patron_id: i64) -> AppResult<Option<BorrowingRecord>> {
        let record = sqlx::query_as::<_, BorrowingRecord>(
            r#"
            SELECT * FROM borrowing_records
            WHERE book_id = $1 AND patron_id = $2 AND return_date IS NULL
            "#,
        )
        .bind(book_id)
        .bind(patron_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    async fn insert(
        &self,
        book_id: i64,
        patron_id: i64,
        borrow_date: NaiveDate,
    ) -> AppResult<BorrowingRecord> {
        let record = sqlx::query_as::<_, BorrowingRecord>(
            r#"
            INSERT INTO borrowing_records (book_id, patron_id, borrow_date)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(book_id)
        .bind(patron_id)
        .bind(borrow_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(record)
    }

    async fn close(&self, id: i64, return_date: NaiveDate) -> AppResult<BorrowingRecord> {
        sqlx::query_as::<_, BorrowingRecord>(
            r#"
            UPDATE borrowing_records
            SET return_date = $1
            WHERE id = $2
            RETURNING *
            "#,
        )
        .bind(return_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Borrowing record with id {} not found", id)))
    }
}
