//! Viking namespace URIs
//!
//! The OpenViking client addresses everything through hierarchical
//! `viking://` URIs. The gateway only ever constructs the two root
//! namespaces and the per-category memory paths; everything else is
//! resolved by the client.

/// Root namespace for indexed resources
pub const RESOURCES_ROOT: &str = "viking://resources/";

/// Root namespace for user memories
pub const MEMORIES_ROOT: &str = "viking://user/memories/";

/// Build the listing URI for a memory category
///
/// An absent or empty category targets the whole memories namespace.
pub fn memories_uri(category: &str) -> String {
    if category.is_empty() {
        MEMORIES_ROOT.to_string()
    } else {
        format!("{MEMORIES_ROOT}{category}/")
    }
}

/// Derive the stored name for a new memory
///
/// The name encodes the category and the character count of the
/// content. Two memories of equal length in the same category collide;
/// kept as-is for compatibility with existing stores.
pub fn memory_name(category: &str, content: &str) -> String {
    format!("memory_{}_{}", category, content.chars().count())
}
