use super::registry::{FIELDS, UNSET};
use super::types::ResourceNameRestriction;
use super::FlatMap;

/// Flatten `restriction` into one map entry per set leaf.
///
/// Unset leaves and empty groups produce nothing. A leaf holding [`UNSET`]
/// counts as unset, so the sentinel is never written. The returned flag is
/// true iff at least one entry was written.
pub fn flatten(restriction: &ResourceNameRestriction) -> (FlatMap, bool) {
    let mut flat = FlatMap::new();

    for field in FIELDS.iter() {
        if let Some(value) = field.value(restriction).filter(|v| *v != UNSET) {
            flat.insert(field.key.to_string(), value.to_string());
        }
    }

    let has_any_value = !flat.is_empty();
    (flat, has_any_value)
}
