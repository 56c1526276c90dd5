// Infrastructure layer module
// Contains the database connector and repository adapters

pub mod database;
pub mod repositories;
