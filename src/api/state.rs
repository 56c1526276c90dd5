use std::sync::Arc;

use crate::domain::repositories::UserRepository;

/// Shared state handed to every handler
///
/// The repository is injected so tests can swap PostgreSQL for an in-memory
/// implementation.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}
