//! Hypermedia primitives (HAL-style JSON).
//!
//! - `Link` / `Links`: relation name -> href, serialized under `_links`.
//! - `EntityModel<T>`: a resource with its fields flattened next to `_links`.
//! - `CollectionModel<T>`: resources embedded under `_embedded.<rel>`.
//!
//! These types only serialize; building hrefs is the presenter's job.

pub mod link;
pub mod model;

pub use link::{Link, Links};
pub use model::{CollectionModel, EntityModel};

/// Relation name for a link pointing at the resource itself.
pub const REL_SELF: &str = "self";
