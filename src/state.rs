//! Shared application state for all routes.

use crate::repository::PropertyRepository;

#[derive(Clone)]
pub struct AppState {
    pub repo: PropertyRepository,
}
