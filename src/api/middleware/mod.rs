// Cross-cutting response layers applied to every route

pub mod headers;

pub use headers::{cors_layer, json_content_type_layer};
