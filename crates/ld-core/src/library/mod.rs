//! Read-only entity models supplied by the external data layer.

pub mod collection;
pub mod link;
pub mod tag;

pub use collection::Collection;
pub use link::Link;
pub use tag::Tag;
