//! Patron management service

use crate::{
    error::{AppError, AppResult},
    models::patron::{Patron, PatronInput},
    repository::Repository,
};

#[derive(Clone)]
pub struct PatronsService {
    repository: Repository,
}

impl PatronsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Patron>> {
        self.repository.patrons.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Patron> {
        self.repository
            .patrons
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Patron with id {} not found", id)))
    }

    pub async fn create(&self, data: &PatronInput) -> AppResult<Patron> {
        self.repository.patrons.create(data).await
    }

    /// Full replacement of the patron with the given id
    pub async fn update(&self, id: i64, data: &PatronInput) -> AppResult<Patron> {
        self.repository
            .patrons
            .update(id, data)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Patron with id {} not found", id)))
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.repository.patrons.delete_by_id(id).await? {
            return Err(AppError::NotFound(format!(
                "Patron with id {} not found",
                id
            )));
        }
        Ok(())
    }
}
