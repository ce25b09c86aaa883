//! Core types and traits for the Tether short-link service.
//!
//! This crate holds the link record model, the short code type, the
//! key-value store contract consumed by the link service, and the
//! operation trait exposed to the routing layer.

pub mod error;
pub mod link;
pub mod record;
pub mod shortcode;
pub mod store;

pub use error::{LinkError, StorageError};
pub use link::{CreateParams, Created, LinkService};
pub use record::{LinkRecord, Resolution, StatsView};
pub use shortcode::ShortCode;
pub use store::KvStore;
