// API layer module (adapters for controllers)
// The HTTP surface over the domain repositories

pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
