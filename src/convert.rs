//! JSON documents in, JSON documents out.
//!
//! Caller-side policy around the codec: reserved-value rejection, unknown key
//! strictness, the complete key set form, and omitting restrictions that
//! carry no value.

use serde_json::Value;

use crate::errors::RestrictionError;
use crate::restriction::{self, wire, FlatMap, ResourceNameRestriction, UNSET};
use crate::settings::Settings;

/// Result of converting one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// `Value::Null` when nothing was set and the attribute should be omitted.
    pub output: Value,
    pub has_any_value: bool,
}

impl Conversion {
    pub fn render(&self, pretty: bool) -> Result<String, RestrictionError> {
        let rendered = if pretty {
            serde_json::to_string_pretty(&self.output)?
        } else {
            serde_json::to_string(&self.output)?
        };
        Ok(rendered)
    }
}

/// Restriction JSON to flat map JSON.
pub fn flatten_document(input: &str, settings: &Settings) -> Result<Conversion, RestrictionError> {
    let restriction: ResourceNameRestriction = serde_json::from_str(input)?;
    flatten_restriction(&restriction, settings)
}

pub fn flatten_restriction(
    restriction: &ResourceNameRestriction,
    settings: &Settings,
) -> Result<Conversion, RestrictionError> {
    let collisions = wire::reserved_collisions(restriction);
    if !collisions.is_empty() {
        return Err(RestrictionError::ReservedValue {
            value: UNSET.to_string(),
            keys: collisions.into_iter().map(String::from).collect(),
        });
    }

    let (mut flat, has_any_value) = restriction::flatten(restriction);
    tracing::debug!(entries = flat.len(), has_any_value, "Flattened restriction");

    if !has_any_value {
        return Ok(Conversion {
            output: Value::Null,
            has_any_value,
        });
    }
    if settings.codec.emit_unset {
        flat = wire::fill_unset(flat);
    }

    Ok(Conversion {
        output: serde_json::to_value(flat)?,
        has_any_value,
    })
}

/// Flat map JSON to restriction JSON.
pub fn unflatten_document(
    input: &str,
    settings: &Settings,
) -> Result<Conversion, RestrictionError> {
    let flat: FlatMap = serde_json::from_str(input)?;
    unflatten_map(&flat, settings)
}

pub fn unflatten_map(flat: &FlatMap, settings: &Settings) -> Result<Conversion, RestrictionError> {
    let unknown = wire::unknown_keys(flat);
    if !unknown.is_empty() {
        if settings.codec.strict_keys {
            return Err(RestrictionError::UnknownKeys { keys: unknown });
        }
        tracing::warn!(keys = ?unknown, "Ignoring unrecognized flat keys");
    }

    let (restriction, has_any_value) = restriction::unflatten(flat);
    tracing::debug!(has_any_value, "Unflattened restriction");

    let output = if has_any_value {
        serde_json::to_value(&restriction)?
    } else {
        Value::Null
    };

    Ok(Conversion {
        output,
        has_any_value,
    })
}
