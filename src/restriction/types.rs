use serde::{Deserialize, Serialize};

use super::registry::{FIELDS, UNSET};

/// Resource names a credential is restricted to.
///
/// Every group and leaf is optional. A group that is `Some` is expected to
/// carry at least one leaf; the codec never builds an empty group, but
/// hand-written or deserialized values may, see [`ResourceNameRestriction::pruned`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceNameRestriction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common: Option<CommonRestriction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pulsar: Option<PulsarRestriction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud: Option<CloudRestriction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonRestriction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulsarRestriction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<TopicRestriction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<SubscriptionRestriction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRestriction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRestriction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudRestriction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apikey: Option<ApikeyRestriction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApikeyRestriction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ResourceNameRestriction {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no leaf is set anywhere, regardless of allocated groups.
    /// Leaves holding [`UNSET`] count as unset.
    pub fn is_empty(&self) -> bool {
        FIELDS
            .iter()
            .all(|field| field.value(self).map_or(true, |v| v == UNSET))
    }

    /// Copy of `self` without [`UNSET`] leaves and without groups that hold no leaf.
    pub fn pruned(&self) -> Self {
        let mut pruned = Self::default();
        for field in FIELDS.iter() {
            if let Some(value) = field.value(self).filter(|v| *v != UNSET) {
                field.assign(&mut pruned, value.to_string());
            }
        }
        pruned
    }
}
