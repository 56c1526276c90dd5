// HTTP handlers, one per route

pub mod health;
pub mod users;
