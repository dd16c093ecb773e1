//! Creative Cloud Library manifest decoding.
//!
//! - `schema.rs` - Typed manifest, group, element and component records
//! - `parse.rs` - Loading the `manifest` file from an extracted archive
//! - `hierarchy.rs` - Group index and element folder hierarchy resolution

pub use error::{Error, Result};
pub use hierarchy::{DEFAULT_MAX_DEPTH, GroupIndex, UNGROUPED};
pub use parse::{MANIFEST_FILE, parse_manifest};
pub use schema::{Component, Element, Group, Manifest, UNKNOWN_LIBRARY};

mod error;
mod hierarchy;
mod parse;
mod schema;
