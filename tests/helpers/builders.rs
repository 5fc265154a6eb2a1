use pulsar_restriction::restriction::*;

/// Builder for creating test restrictions
///
/// Groups are only allocated by the setters that touch them.
#[derive(Default)]
pub struct RestrictionBuilder {
    restriction: ResourceNameRestriction,
}

impl RestrictionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every leaf set, one value per group path.
    pub fn full() -> Self {
        Self::new()
            .organization("org-1")
            .instance("ins-1")
            .cluster("cluster-1")
            .tenant("tenant-1")
            .namespace("ns-1")
            .topic("topic-1")
            .topic_domain("persistent")
            .subscription("sub-1")
            .apikey("key-1")
    }

    fn common(&mut self) -> &mut CommonRestriction {
        self.restriction.common.get_or_insert_with(Default::default)
    }

    pub fn organization(mut self, value: &str) -> Self {
        self.common().organization = Some(value.to_string());
        self
    }

    pub fn instance(mut self, value: &str) -> Self {
        self.common().instance = Some(value.to_string());
        self
    }

    pub fn cluster(mut self, value: &str) -> Self {
        self.common().cluster = Some(value.to_string());
        self
    }

    pub fn tenant(mut self, value: &str) -> Self {
        self.common().tenant = Some(value.to_string());
        self
    }

    pub fn namespace(mut self, value: &str) -> Self {
        self.common().namespace = Some(value.to_string());
        self
    }

    pub fn topic(mut self, value: &str) -> Self {
        self.common().topic = Some(value.to_string());
        self
    }

    pub fn topic_domain(mut self, value: &str) -> Self {
        self.restriction
            .pulsar
            .get_or_insert_with(Default::default)
            .topic = Some(TopicRestriction {
            domain: Some(value.to_string()),
        });
        self
    }

    pub fn subscription(mut self, value: &str) -> Self {
        self.restriction
            .pulsar
            .get_or_insert_with(Default::default)
            .subscription = Some(SubscriptionRestriction {
            name: Some(value.to_string()),
        });
        self
    }

    pub fn apikey(mut self, value: &str) -> Self {
        self.restriction.cloud = Some(CloudRestriction {
            apikey: Some(ApikeyRestriction {
                name: Some(value.to_string()),
            }),
        });
        self
    }

    pub fn build(self) -> ResourceNameRestriction {
        self.restriction
    }
}

/// Flat map from literal pairs.
pub fn flat_map(entries: &[(&str, &str)]) -> FlatMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
