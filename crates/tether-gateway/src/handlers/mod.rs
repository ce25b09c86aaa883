mod api;
mod health;
mod link;

pub use api::{api_not_found_handler, create_link_handler, stats_handler};
pub use health::health_handler;
pub use link::{not_found_handler, resolve_handler};
