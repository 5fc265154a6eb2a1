pub mod builders;

pub use builders::{flat_map, RestrictionBuilder};
