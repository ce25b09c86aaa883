//! HTTP routing layer for the Tether short-link service.
//!
//! Maps the create, resolve and stats operations of a
//! [`LinkService`](tether_core::LinkService) onto HTTP.

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod page;
pub mod state;

pub use app::App;
pub use state::AppState;
