//! Book management service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookInput},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.repository
            .books
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    pub async fn create(&self, data: &BookInput) -> AppResult<Book> {
        self.repository.books.create(data).await
    }

    /// Full replacement of the book with the given id
    pub async fn update(&self, id: i64, data: &BookInput) -> AppResult<Book> {
        self.repository
            .books
            .update(id, data)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.repository.books.delete_by_id(id).await? {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }
        Ok(())
    }
}
