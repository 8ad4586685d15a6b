//! Catalog building and the load session that owns the current catalog.

mod builder;
mod session;

pub use builder::CatalogBuilder;
pub use session::{CatalogSession, LoadOutcome, LoadTicket};
