//! Books repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::book::{Book, BookInput},
};

/// Storage interface for books
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BooksRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Book>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>>;
    async fn create(&self, data: &BookInput) -> AppResult<Book>;
    /// Full replacement; returns None when no book with this id exists
    async fn update(&self, id: i64, data: &BookInput) -> AppResult<Option<Book>>;
    /// Returns false when no book with this id exists
    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;
}

#[derive(Clone)]
pub struct PgBooksRepository {
    pool: Pool<Postgres>,
}

impl PgBooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BooksRepository for PgBooksRepository {
    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(book)
    }

    async fn create(&self, data: &BookInput) -> AppResult<Book> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, publication_year, isbn)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.author)
        .bind(data.publication_year)
        .bind(&data.isbn)
        .fetch_one(&self.pool)
        .await?;
        Ok(book)
    }

    async fn update(&self, id: i64, data: &BookInput) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = $1, author = $2, publication_year = $3, isbn = $4
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.author)
        .bind(data.publication_year)
        .bind(&data.isbn)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
