use super::registry::{FieldSpec, FIELDS, UNSET};
use super::types::ResourceNameRestriction;
use super::FlatMap;

/// Rebuild a restriction from its flat form.
///
/// Keys missing from `flat` or holding [`UNSET`] leave their leaf unset.
/// Keys outside the registry are ignored. Groups are allocated only for
/// leaves that end up set, so the result never contains an empty group.
pub fn unflatten(flat: &FlatMap) -> (ResourceNameRestriction, bool) {
    let pending: Vec<(&FieldSpec, &str)> = FIELDS
        .iter()
        .filter_map(|field| {
            flat.get(field.key)
                .map(String::as_str)
                .filter(|value| *value != UNSET)
                .map(|value| (field, value))
        })
        .collect();

    let mut restriction = ResourceNameRestriction::default();
    for (field, value) in &pending {
        field.assign(&mut restriction, value.to_string());
    }

    (restriction, !pending.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restriction::types::*;

    fn flat(entries: &[(&str, &str)]) -> FlatMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_unflatten_empty() {
        let (r, has_any) = unflatten(&FlatMap::new());
        assert_eq!(r, ResourceNameRestriction::default());
        assert!(!has_any);
    }

    #[test]
    fn test_unflatten_ignores_sentinel() {
        let input = flat(&[
            ("common_organization", "org-1"),
            ("common_instance", "ins-1"),
            ("common_cluster", "cluster-1"),
            ("cloud_apikey_name", UNSET),
            ("pulsar_subscription_name", UNSET),
        ]);

        let (r, has_any) = unflatten(&input);
        assert!(has_any);
        assert_eq!(
            r,
            ResourceNameRestriction {
                common: Some(CommonRestriction {
                    organization: Some("org-1".into()),
                    instance: Some("ins-1".into()),
                    cluster: Some("cluster-1".into()),
                    tenant: None,
                    namespace: None,
                    topic: None,
                }),
                pulsar: None,
                cloud: None,
            }
        );
    }

    #[test]
    fn test_unflatten_all_sentinels_is_empty() {
        let input: FlatMap = FIELDS
            .iter()
            .map(|f| (f.key.to_string(), UNSET.to_string()))
            .collect();

        let (r, has_any) = unflatten(&input);
        assert_eq!(r, ResourceNameRestriction::default());
        assert!(!has_any);
    }

    #[test]
    fn test_unflatten_ignores_unknown_keys() {
        let input = flat(&[
            ("common_tenant", "public"),
            ("common_region", "us-east-1"),
            ("pulsar_topic_domain", "non-persistent"),
        ]);

        let (r, has_any) = unflatten(&input);
        assert!(has_any);
        assert_eq!(
            r.common,
            Some(CommonRestriction {
                tenant: Some("public".into()),
                ..Default::default()
            })
        );
        assert_eq!(
            r.pulsar,
            Some(PulsarRestriction {
                topic: Some(TopicRestriction {
                    domain: Some("non-persistent".into()),
                }),
                subscription: None,
            })
        );
        assert_eq!(r.cloud, None);
    }

    #[test]
    fn test_unflatten_only_unknown_keys() {
        let (r, has_any) = unflatten(&flat(&[("legacy_role", "admin")]));
        assert_eq!(r, ResourceNameRestriction::default());
        assert!(!has_any);
    }

    #[test]
    fn test_unflatten_subscription_without_topic() {
        let (r, _) = unflatten(&flat(&[("pulsar_subscription_name", "sub-1")]));
        let pulsar = r.pulsar.expect("pulsar group allocated");
        assert!(pulsar.topic.is_none());
        assert_eq!(
            pulsar.subscription.and_then(|s| s.name).as_deref(),
            Some("sub-1")
        );
    }
}
