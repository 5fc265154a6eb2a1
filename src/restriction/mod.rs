pub mod flatten;
pub mod registry;
pub mod types;
pub mod unflatten;
pub mod wire;

use std::collections::BTreeMap;

pub use flatten::flatten;
pub use registry::{FieldSpec, Group, FIELDS, UNSET};
pub use types::*;
pub use unflatten::unflatten;

/// Flat schema form of a restriction: registry key -> leaf value.
/// Ordered so rendered output is stable.
pub type FlatMap = BTreeMap<String, String>;
