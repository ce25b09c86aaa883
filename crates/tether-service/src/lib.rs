//! Link store service implementation.
//!
//! This crate provides [`LinkStoreService`], which owns every read and write
//! of link records against a [`KvStore`](tether_core::KvStore). Core types are
//! re-exported from `tether_core`.

pub mod codec;
pub mod service;
pub mod settings;

pub use service::LinkStoreService;
pub use settings::{ClickConsistency, ServiceSettings};
pub use tether_core::{CreateParams, Created, LinkError, LinkService, StatsView};
