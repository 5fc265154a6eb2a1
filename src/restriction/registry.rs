use super::types::ResourceNameRestriction;

/// Reserved flat-map value meaning "key present, leaf unset".
///
/// Never a legal leaf value: a leaf holding this literal reads back as unset.
pub const UNSET: &str = "__unset__";

/// Optional grouping structure a leaf lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Group {
    Common,
    PulsarTopic,
    PulsarSubscription,
    CloudApikey,
}

impl Group {
    pub const ALL: [Group; 4] = [
        Group::Common,
        Group::PulsarTopic,
        Group::PulsarSubscription,
        Group::CloudApikey,
    ];

    /// Dotted location of the group inside the descriptor.
    pub fn path(self) -> &'static str {
        match self {
            Group::Common => "common",
            Group::PulsarTopic => "pulsar.topic",
            Group::PulsarSubscription => "pulsar.subscription",
            Group::CloudApikey => "cloud.apikey",
        }
    }

    /// Whether the group object exists in `restriction`, empty or not.
    pub fn is_allocated(self, restriction: &ResourceNameRestriction) -> bool {
        match self {
            Group::Common => restriction.common.is_some(),
            Group::PulsarTopic => restriction
                .pulsar
                .as_ref()
                .is_some_and(|p| p.topic.is_some()),
            Group::PulsarSubscription => restriction
                .pulsar
                .as_ref()
                .is_some_and(|p| p.subscription.is_some()),
            Group::CloudApikey => restriction
                .cloud
                .as_ref()
                .is_some_and(|c| c.apikey.is_some()),
        }
    }

    pub fn fields(self) -> impl Iterator<Item = &'static FieldSpec> {
        FIELDS.iter().filter(move |f| f.group == self)
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// One leaf of the descriptor and the flat key it is stored under.
pub struct FieldSpec {
    pub key: &'static str,
    pub group: Group,
    pub leaf: &'static str,
    get: fn(&ResourceNameRestriction) -> Option<&String>,
    slot: fn(&mut ResourceNameRestriction) -> &mut Option<String>,
}

impl FieldSpec {
    /// Leaf value, reached without allocating anything.
    pub fn value<'a>(&self, restriction: &'a ResourceNameRestriction) -> Option<&'a str> {
        (self.get)(restriction).map(String::as_str)
    }

    /// Write `value` into the leaf, allocating its group chain as needed.
    pub fn assign(&self, restriction: &mut ResourceNameRestriction, value: String) {
        *(self.slot)(restriction) = Some(value);
    }

    /// Dotted location of the leaf, e.g. `pulsar.topic.domain`.
    pub fn path(&self) -> String {
        format!("{}.{}", self.group.path(), self.leaf)
    }
}

impl std::fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldSpec")
            .field("key", &self.key)
            .field("group", &self.group)
            .field("leaf", &self.leaf)
            .finish()
    }
}

/// Every leaf, in flattening order.
pub static FIELDS: [FieldSpec; 9] = [
    FieldSpec {
        key: "common_organization",
        group: Group::Common,
        leaf: "organization",
        get: |r| r.common.as_ref()?.organization.as_ref(),
        slot: |r| &mut r.common.get_or_insert_with(Default::default).organization,
    },
    FieldSpec {
        key: "common_instance",
        group: Group::Common,
        leaf: "instance",
        get: |r| r.common.as_ref()?.instance.as_ref(),
        slot: |r| &mut r.common.get_or_insert_with(Default::default).instance,
    },
    FieldSpec {
        key: "common_cluster",
        group: Group::Common,
        leaf: "cluster",
        get: |r| r.common.as_ref()?.cluster.as_ref(),
        slot: |r| &mut r.common.get_or_insert_with(Default::default).cluster,
    },
    FieldSpec {
        key: "common_tenant",
        group: Group::Common,
        leaf: "tenant",
        get: |r| r.common.as_ref()?.tenant.as_ref(),
        slot: |r| &mut r.common.get_or_insert_with(Default::default).tenant,
    },
    FieldSpec {
        key: "common_namespace",
        group: Group::Common,
        leaf: "namespace",
        get: |r| r.common.as_ref()?.namespace.as_ref(),
        slot: |r| &mut r.common.get_or_insert_with(Default::default).namespace,
    },
    FieldSpec {
        key: "common_topic",
        group: Group::Common,
        leaf: "topic",
        get: |r| r.common.as_ref()?.topic.as_ref(),
        slot: |r| &mut r.common.get_or_insert_with(Default::default).topic,
    },
    FieldSpec {
        key: "pulsar_topic_domain",
        group: Group::PulsarTopic,
        leaf: "domain",
        get: |r| r.pulsar.as_ref()?.topic.as_ref()?.domain.as_ref(),
        slot: |r| {
            &mut r
                .pulsar
                .get_or_insert_with(Default::default)
                .topic
                .get_or_insert_with(Default::default)
                .domain
        },
    },
    FieldSpec {
        key: "pulsar_subscription_name",
        group: Group::PulsarSubscription,
        leaf: "name",
        get: |r| r.pulsar.as_ref()?.subscription.as_ref()?.name.as_ref(),
        slot: |r| {
            &mut r
                .pulsar
                .get_or_insert_with(Default::default)
                .subscription
                .get_or_insert_with(Default::default)
                .name
        },
    },
    FieldSpec {
        key: "cloud_apikey_name",
        group: Group::CloudApikey,
        leaf: "name",
        get: |r| r.cloud.as_ref()?.apikey.as_ref()?.name.as_ref(),
        slot: |r| {
            &mut r
                .cloud
                .get_or_insert_with(Default::default)
                .apikey
                .get_or_insert_with(Default::default)
                .name
        },
    },
];

/// Registry entry stored under `key`.
pub fn field(key: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.key == key)
}

pub fn keys() -> impl Iterator<Item = &'static str> {
    FIELDS.iter().map(|f| f.key)
}

pub fn is_known_key(key: &str) -> bool {
    field(key).is_some()
}
