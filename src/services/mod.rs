//! Business logic services

pub mod books;
pub mod circulation;
pub mod patrons;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub patrons: patrons::PatronsService,
    pub circulation: circulation::CirculationService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            books: books::BooksService::new(repository.clone()),
            patrons: patrons::PatronsService::new(repository.clone()),
            circulation: circulation::CirculationService::new(repository),
        }
    }
}
