//! Business logic services

pub mod catalog;

use crate::models::Book;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
}

impl Services {
    /// Create all services, seeding the catalog with the given records
    pub fn new(seed: Vec<Book>) -> Self {
        Self {
            catalog: catalog::CatalogService::new(seed),
        }
    }
}
