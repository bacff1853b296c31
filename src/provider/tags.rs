//! Instance tag conversion
//!
//! ECS `RunInstances` expects the cluster tag in the first tag slot and the
//! role tag in the second; everything else follows.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use alicloud_common::{Error, CLUSTER_TAG_MARKER, ROLE_TAG_MARKER};

/// Message returned when a reserved tag is missing
pub const MISSING_RESERVED_TAGS: &str = "Tags should at least contains 2 keys, which are prefixed with kubernetes.io/cluster and kubernetes.io/role";

/// A single ECS instance tag
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceTag {
    /// Tag key
    pub key: String,
    /// Tag value
    pub value: String,
}

impl InstanceTag {
    fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// Convert a tag map into the ordered ECS tag list
///
/// Index 0 holds the tag whose key contains `kubernetes.io/cluster/`, index 1
/// the tag whose key contains `kubernetes.io/role/`. A key containing both
/// counts as the cluster tag. When several keys match the same slot the last
/// one in key order wins and the others are dropped.
pub fn to_instance_tags(tags: &BTreeMap<String, String>) -> Result<Vec<InstanceTag>, Error> {
    let mut cluster: Option<InstanceTag> = None;
    let mut role: Option<InstanceTag> = None;
    let mut rest = Vec::with_capacity(tags.len().saturating_sub(2));

    for (key, value) in tags {
        let slot = if key.contains(CLUSTER_TAG_MARKER) {
            &mut cluster
        } else if key.contains(ROLE_TAG_MARKER) {
            &mut role
        } else {
            rest.push(InstanceTag::new(key, value));
            continue;
        };

        if let Some(displaced) = slot.replace(InstanceTag::new(key, value)) {
            warn!(
                dropped = %displaced.key,
                kept = %key,
                "Multiple tags match the same reserved slot; dropping earlier one"
            );
        }
    }

    let (Some(cluster), Some(role)) = (cluster, role) else {
        return Err(Error::validation_for_field("tags", MISSING_RESERVED_TAGS));
    };

    let mut result = Vec::with_capacity(rest.len() + 2);
    result.push(cluster);
    result.push(role);
    result.extend(rest);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn reserved_tags_take_the_first_two_slots() {
        let input = tags(&[
            ("a-team", "infra"),
            ("kubernetes.io/role/node", "1"),
            ("cost-center", "42"),
            ("kubernetes.io/cluster/shoot--dev--a", "1"),
        ]);

        let result = to_instance_tags(&input).expect("tags with both reserved keys");
        assert_eq!(result.len(), input.len());
        assert_eq!(
            result[0],
            InstanceTag::new("kubernetes.io/cluster/shoot--dev--a", "1")
        );
        assert_eq!(result[1], InstanceTag::new("kubernetes.io/role/node", "1"));

        let mut others: Vec<_> = result[2..].iter().map(|t| t.key.as_str()).collect();
        others.sort_unstable();
        assert_eq!(others, vec!["a-team", "cost-center"]);
    }

    #[test]
    fn only_reserved_tags() {
        let input = tags(&[
            ("kubernetes.io/cluster/c", "1"),
            ("kubernetes.io/role/worker", "1"),
        ]);
        let result = to_instance_tags(&input).expect("both reserved keys present");
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].key, "kubernetes.io/cluster/c");
        assert_eq!(result[1].key, "kubernetes.io/role/worker");
    }

    #[test]
    fn markers_match_anywhere_in_the_key() {
        let input = tags(&[
            ("legacy.kubernetes.io/cluster/c", "owned"),
            ("x/kubernetes.io/role/master", "1"),
        ]);
        let result = to_instance_tags(&input).expect("substring match should count");
        assert_eq!(result[0].value, "owned");
        assert_eq!(result[1].key, "x/kubernetes.io/role/master");
    }

    #[test]
    fn prefix_without_trailing_slash_does_not_match() {
        let input = tags(&[
            ("kubernetes.io/cluster", "c"),
            ("kubernetes.io/role/node", "1"),
        ]);
        assert!(to_instance_tags(&input).is_err());
    }

    #[test]
    fn missing_role_tag_fails() {
        let input = tags(&[("kubernetes.io/cluster/c", "1"), ("team", "infra")]);
        let err = to_instance_tags(&input).expect_err("role tag is required");
        assert!(err.to_string().contains(MISSING_RESERVED_TAGS));
        assert!(!err.is_retryable());
    }

    #[test]
    fn missing_cluster_tag_fails() {
        let input = tags(&[("kubernetes.io/role/node", "1")]);
        assert!(to_instance_tags(&input).is_err());
    }

    #[test]
    fn empty_map_fails() {
        assert!(to_instance_tags(&BTreeMap::new()).is_err());
    }

    #[test]
    fn key_with_both_markers_is_the_cluster_tag() {
        let both = "kubernetes.io/cluster/kubernetes.io/role/x";

        let err = to_instance_tags(&tags(&[(both, "1")]))
            .expect_err("the key cannot fill both slots");
        assert!(matches!(err, Error::Validation { .. }));

        let result = to_instance_tags(&tags(&[(both, "1"), ("kubernetes.io/role/node", "1")]))
            .expect("separate role tag present");
        assert_eq!(result[0].key, both);
        assert_eq!(result[1].key, "kubernetes.io/role/node");
    }

    #[test]
    fn duplicate_reserved_matches_keep_last_in_key_order() {
        let input = tags(&[
            ("kubernetes.io/cluster/a", "first"),
            ("kubernetes.io/cluster/b", "second"),
            ("kubernetes.io/role/node", "1"),
            ("team", "infra"),
        ]);

        let result = to_instance_tags(&input).expect("duplicates are tolerated");
        assert_eq!(result[0], InstanceTag::new("kubernetes.io/cluster/b", "second"));
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|t| t.key != "kubernetes.io/cluster/a"));
    }

    #[test]
    fn serializes_in_sdk_shape() {
        let json = serde_json::to_value(InstanceTag::new("k", "v")).expect("tag serializes");
        assert_eq!(json, serde_json::json!({"Key": "k", "Value": "v"}));
    }
}
