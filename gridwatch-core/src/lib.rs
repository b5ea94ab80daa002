//! GridWatch core library — feeder domain types, the JSON-backed store,
//! registry operations, and lookup stubs.
//!
//! Public API surface:
//! - [`types`] — [`Feeder`], [`FeederId`], the [`ToolResult`] envelope
//! - [`error`] — [`StoreError`]
//! - [`store`] — [`FeederStore`] and key-namespace helpers
//! - [`registry`] — register / list / health / alerts
//! - [`lookup`] — weather and local-time stubs

pub mod error;
pub mod lookup;
pub mod registry;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::FeederStore;
pub use types::{Feeder, FeederId, ToolResult};
