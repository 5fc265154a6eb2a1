//! Sentinel handling for schema layers that require the complete key set.
//!
//! The codec itself works on sparse maps. These helpers convert to and from
//! the fixed-key form and surface what the codec silently tolerates.

use super::registry::{self, FIELDS, UNSET};
use super::types::ResourceNameRestriction;
use super::FlatMap;

/// Complete `flat` to every registry key, writing [`UNSET`] where a key is missing.
pub fn fill_unset(mut flat: FlatMap) -> FlatMap {
    for key in registry::keys() {
        flat.entry(key.to_string())
            .or_insert_with(|| UNSET.to_string());
    }
    flat
}

/// Keys the registry does not know, in map order.
pub fn unknown_keys(flat: &FlatMap) -> Vec<String> {
    flat.keys()
        .filter(|key| !registry::is_known_key(key))
        .cloned()
        .collect()
}

/// Registry keys whose leaf value is the reserved sentinel literal.
pub fn reserved_collisions(restriction: &ResourceNameRestriction) -> Vec<&'static str> {
    FIELDS
        .iter()
        .filter(|field| field.value(restriction) == Some(UNSET))
        .map(|field| field.key)
        .collect()
}
